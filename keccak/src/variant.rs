//! Supported output widths and the sponge sizes derived from them.

use crate::error::KeccakError;

/// Size of the Keccak state in bytes (1600 bits).
pub const STATE_BYTES: usize = 200;

/// Keccak-224 has the largest rate of all supported widths.
pub const MAX_BLOCK_SIZE: usize = Variant::Keccak224.block_size();

/// Keccak-512 has the longest digest of all supported widths.
pub const MAX_DIGEST_LEN: usize = Variant::Keccak512.digest_len();

/// Output width of the hash, in bits.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Variant {
    /// 28-byte digest, 144-byte rate.
    Keccak224 = 224,
    /// 32-byte digest, 136-byte rate.
    Keccak256 = 256,
    /// 48-byte digest, 104-byte rate.
    Keccak384 = 384,
    /// 64-byte digest, 72-byte rate.
    Keccak512 = 512,
}

impl Variant {
    /// Every supported width, narrowest first.
    pub const ALL: [Variant; 4] = [
        Variant::Keccak224,
        Variant::Keccak256,
        Variant::Keccak384,
        Variant::Keccak512,
    ];

    /// Output width in bits.
    pub const fn bits(self) -> usize {
        self as u16 as usize
    }

    /// Digest length in bytes.
    pub const fn digest_len(self) -> usize {
        self.bits() / 8
    }

    /// Rate in bytes. Twice the digest length is reserved as capacity.
    pub const fn block_size(self) -> usize {
        STATE_BYTES - 2 * self.digest_len()
    }

    /// Sponge sizes for this width.
    pub const fn params(self) -> SpongeParams {
        SpongeParams {
            variant: self,
            block_size: self.block_size(),
            digest_len: self.digest_len(),
        }
    }
}

impl TryFrom<u32> for Variant {
    type Error = KeccakError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        match bits {
            224 => Ok(Variant::Keccak224),
            256 => Ok(Variant::Keccak256),
            384 => Ok(Variant::Keccak384),
            512 => Ok(Variant::Keccak512),
            _ => {
                log::debug!("rejecting unsupported Keccak width of {bits} bits");
                Err(KeccakError::InvalidVariant(bits))
            }
        }
    }
}

impl core::str::FromStr for Variant {
    type Err = KeccakError;

    /// Accepts either the bare width (`"256"`) or the prefixed name (`"keccak256"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("keccak")
            .or_else(|| trimmed.strip_prefix("Keccak"))
            .map(|rest| rest.trim_start_matches('-'))
            .unwrap_or(trimmed);
        // Widths that do not parse collapse to 0, which is rejected below.
        let bits = digits.parse::<u32>().unwrap_or(0);
        Variant::try_from(bits)
    }
}

impl core::fmt::Display for Variant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Keccak-{}", self.bits())
    }
}

/// Quantities derived from a [`Variant`], computed once when a sponge is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpongeParams {
    /// Width these sizes belong to.
    pub variant: Variant,
    /// Rate in bytes.
    pub block_size: usize,
    /// Digest length in bytes.
    pub digest_len: usize,
}

impl SpongeParams {
    /// Capacity in bytes, the part of the state never touched by input.
    pub const fn capacity(&self) -> usize {
        STATE_BYTES - self.block_size
    }
}
