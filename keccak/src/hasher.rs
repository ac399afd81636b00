//! Streaming hashers: [`KeccakHasher`] with a runtime width and the fixed-width
//! [`Keccak224`], [`Keccak256`], [`Keccak384`] and [`Keccak512`].

use alloc::string::String;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::digest::{Digest, Encoding, Output};
use crate::error::KeccakError;
use crate::sponge::SpongeState;
use crate::variant::{Variant, MAX_DIGEST_LEN, STATE_BYTES};
use crate::MiniDigest;

/// Keccak hasher with the width chosen at runtime.
///
/// Consuming finalizers (`finalize`, `finalize_hex`, `into_output`) release the
/// hasher. The `*_reset` finalizers leave it empty and ready for an unrelated
/// message. The sponge is wiped when the hasher is reset or dropped.
#[derive(Clone)]
pub struct KeccakHasher {
    sponge: SpongeState,
}

impl KeccakHasher {
    /// New hasher
    pub fn new(variant: Variant) -> Self {
        log::trace!("creating {variant} hasher");
        Self {
            sponge: SpongeState::new(variant),
        }
    }

    /// Create a hasher from a width in bits. Anything other than 224, 256,
    /// 384 or 512 is rejected.
    pub fn with_bits(bits: u32) -> Result<Self, KeccakError> {
        Ok(Self::new(Variant::try_from(bits)?))
    }

    /// Width of this hasher.
    pub fn variant(&self) -> Variant {
        self.sponge.params().variant
    }

    /// Rate in bytes.
    pub fn block_size(&self) -> usize {
        self.sponge.params().block_size
    }

    /// Digest length in bytes.
    pub fn digest_len(&self) -> usize {
        self.sponge.params().digest_len
    }

    /// Bytes consumed by full-block permutations so far.
    pub fn bytes_processed(&self) -> u64 {
        self.sponge.bytes_processed()
    }

    /// Bytes waiting for the next block.
    pub fn buffered_len(&self) -> usize {
        self.sponge.buffered_len()
    }

    /// Raw lanes of the sponge.
    pub fn lanes(&self) -> &[u64; 25] {
        self.sponge.lanes()
    }

    /// Sponge state serialized little-endian.
    pub fn state_bytes(&self) -> [u8; STATE_BYTES] {
        self.sponge.state_bytes()
    }

    /// Hash bytes
    pub fn update(&mut self, input: &[u8]) {
        self.sponge.absorb(input);
    }

    /// Hash the UTF-8 encoding of a string
    pub fn update_str(&mut self, input: &str) {
        self.update(input.as_bytes());
    }

    /// Discard everything absorbed so far.
    pub fn reset(&mut self) {
        log::trace!(
            "resetting {} hasher after {} bytes",
            self.variant(),
            self.bytes_processed() + self.buffered_len() as u64
        );
        self.sponge.reset();
    }

    fn finalize_digest(&mut self) -> Digest {
        let variant = self.variant();
        let mut buf = [0u8; MAX_DIGEST_LEN];
        log::trace!(
            "finalizing {variant} hasher after {} bytes",
            self.bytes_processed() + self.buffered_len() as u64
        );
        self.sponge.finalize_into(&mut buf[..variant.digest_len()]);
        let digest = Digest::from_buffer(variant, &buf);
        buf.zeroize();
        digest
    }

    /// Output the digest and release the hasher.
    pub fn finalize(mut self) -> Digest {
        self.finalize_digest()
    }

    /// Output the digest and reset the hasher for reuse.
    pub fn finalize_reset(&mut self) -> Digest {
        let digest = self.finalize_digest();
        self.reset();
        digest
    }

    /// Output the digest as lowercase hex and release the hasher.
    pub fn finalize_hex(self) -> String {
        self.finalize().to_hex()
    }

    /// Output the digest as lowercase hex and reset the hasher for reuse.
    pub fn finalize_hex_reset(&mut self) -> String {
        self.finalize_reset().to_hex()
    }

    /// Like [`KeccakHasher::finalize_hex`], but allocation failure is returned
    /// as [`KeccakError::ResourceExhausted`].
    pub fn try_finalize_hex(self) -> Result<String, KeccakError> {
        self.finalize().try_to_hex()
    }

    /// Like [`KeccakHasher::finalize_hex_reset`], but allocation failure is
    /// returned as [`KeccakError::ResourceExhausted`]. The hasher is reset either way.
    pub fn try_finalize_hex_reset(&mut self) -> Result<String, KeccakError> {
        self.finalize_reset().try_to_hex()
    }

    /// Finalize into the requested encoding and release the hasher.
    pub fn into_output(self, encoding: Encoding) -> Output {
        Output::encode(self.finalize(), encoding)
    }

    /// Finalize into the requested encoding and reset the hasher for reuse.
    pub fn finalize_with(&mut self, encoding: Encoding) -> Output {
        Output::encode(self.finalize_reset(), encoding)
    }
}

impl From<Variant> for KeccakHasher {
    fn from(variant: Variant) -> Self {
        Self::new(variant)
    }
}

impl Zeroize for KeccakHasher {
    fn zeroize(&mut self) {
        self.sponge.zeroize();
    }
}

impl ZeroizeOnDrop for KeccakHasher {}

impl core::fmt::Debug for KeccakHasher {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeccakHasher")
            .field("variant", &self.variant())
            .field("bytes_processed", &self.bytes_processed())
            .field("buffered_len", &self.buffered_len())
            .finish_non_exhaustive()
    }
}

macro_rules! fixed_width_hasher {
    ($name:ident, $variant:expr, $len:expr) => {
        #[doc = concat!("Keccak hasher with a fixed ", stringify!($len), "-byte output.")]
        #[derive(Clone)]
        pub struct $name {
            sponge: SpongeState,
        }

        impl $name {
            /// New hasher
            pub const fn new() -> Self {
                Self {
                    sponge: SpongeState::new($variant),
                }
            }

            /// Hash bytes
            pub fn update(&mut self, input: &[u8]) {
                self.sponge.absorb(input);
            }

            /// Output a hash
            pub fn finalize(mut self) -> [u8; $len] {
                let mut out = [0u8; $len];
                self.sponge.finalize_into(&mut out);
                out
            }
        }

        impl Zeroize for $name {
            fn zeroize(&mut self) {
                self.sponge.zeroize();
            }
        }

        impl ZeroizeOnDrop for $name {}

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl MiniDigest for $name {
            type HashOutput = [u8; $len];

            #[inline(always)]
            fn new() -> Self {
                $name::new()
            }

            #[inline(always)]
            fn digest(input: impl AsRef<[u8]>) -> Self::HashOutput {
                let mut hasher = $name::new();
                hasher.update(input.as_ref());
                hasher.finalize()
            }

            #[inline(always)]
            fn update(&mut self, input: impl AsRef<[u8]>) {
                $name::update(self, input.as_ref());
            }

            #[inline(always)]
            fn finalize(self) -> Self::HashOutput {
                $name::finalize(self)
            }

            #[inline(always)]
            fn finalize_reset(&mut self) -> Self::HashOutput {
                let mut out = [0u8; $len];
                self.sponge.finalize_into(&mut out);
                self.sponge.reset();
                out
            }
        }
    };
}

fixed_width_hasher!(Keccak224, Variant::Keccak224, 28);
fixed_width_hasher!(Keccak256, Variant::Keccak256, 32);
fixed_width_hasher!(Keccak384, Variant::Keccak384, 48);
fixed_width_hasher!(Keccak512, Variant::Keccak512, 64);
