//! Error type of the crate.

///
/// Errors raised by the hasher.
///
/// Absorbing input and running the permutation cannot fail, so the only
/// failures are a bad width at construction and the optional fallible
/// allocation of hex output.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum KeccakError {
    /// Requested width is not one of 224, 256, 384 or 512 bits.
    InvalidVariant(u32),
    /// The hex output buffer could not be reserved.
    ResourceExhausted {
        /// Bytes the allocation asked for.
        requested: usize,
    },
}

impl core::fmt::Display for KeccakError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            KeccakError::InvalidVariant(bits) => write!(
                f,
                "unsupported Keccak width {bits}: must be 224, 256, 384, or 512"
            ),
            KeccakError::ResourceExhausted { requested } => {
                write!(f, "failed to allocate {requested} bytes for hex digest")
            }
        }
    }
}

impl core::error::Error for KeccakError {}
