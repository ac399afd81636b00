#![cfg_attr(not(test), no_std)]

//! Keccak [sponge function](https://en.wikipedia.org/wiki/Sponge_function)
//! hashes as submitted to the SHA-3 competition, before FIPS 202.
//!
//! Digests use the original pad10*1 padding (first pad byte `0x01`) and
//! therefore differ from SHA3-224/256/384/512. They match what Ethereum and
//! most pre-2015 libraries call "Keccak".
//!
//! ```
//! use legacy_keccak::{KeccakHasher, Variant};
//!
//! let mut hasher = KeccakHasher::new(Variant::Keccak256);
//! hasher.update(b"");
//! assert_eq!(
//!     hasher.finalize_hex(),
//!     "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470",
//! );
//!
//! assert_eq!(
//!     legacy_keccak::keccak224_hex("abc"),
//!     "c30411768506ebe1c2871b1ee2e87d38df342317300a9b97a95ec6a8",
//! );
//! ```
//!
//! To disable loop unrolling in the permutation use the `no_unroll` feature.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![allow(non_upper_case_globals)]
#![warn(
    clippy::mod_module_files,
    missing_docs,
    clippy::unwrap_used,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

extern crate alloc;

#[macro_use]
#[rustfmt::skip]
mod unroll;

pub mod digest;
pub mod error;
pub mod hasher;
pub mod permutation;
pub mod sponge;
pub mod variant;

use alloc::string::String;

pub use digest::{Digest, Encoding, Output};
pub use error::KeccakError;
pub use hasher::{Keccak224, Keccak256, Keccak384, Keccak512, KeccakHasher};
pub use permutation::keccak_f1600;
pub use variant::{SpongeParams, Variant};

/// Minimal streaming hash interface shared by the fixed-width hashers.
pub trait MiniDigest: Sized {
    /// Fixed-size digest bytes
    type HashOutput;

    /// New hasher
    fn new() -> Self;
    /// Hash a whole message at once
    fn digest(input: impl AsRef<[u8]>) -> Self::HashOutput;
    /// Hash bytes
    fn update(&mut self, input: impl AsRef<[u8]>);
    /// Output a hash
    fn finalize(self) -> Self::HashOutput;
    /// Output a hash and reset the hasher
    fn finalize_reset(&mut self) -> Self::HashOutput;
}

/// Compute Keccak-224 digest for byte string
pub fn keccak224(input: impl AsRef<[u8]>) -> [u8; 28] {
    Keccak224::digest(input)
}

/// Compute Keccak-256 digest for byte string
pub fn keccak256(input: impl AsRef<[u8]>) -> [u8; 32] {
    Keccak256::digest(input)
}

/// Compute Keccak-384 digest for byte string
pub fn keccak384(input: impl AsRef<[u8]>) -> [u8; 48] {
    Keccak384::digest(input)
}

/// Compute Keccak-512 digest for byte string
pub fn keccak512(input: impl AsRef<[u8]>) -> [u8; 64] {
    Keccak512::digest(input)
}

/// Compute Keccak-224 digest as lowercase hex
pub fn keccak224_hex(input: impl AsRef<[u8]>) -> String {
    hex::encode(keccak224(input))
}

/// Compute Keccak-256 digest as lowercase hex
pub fn keccak256_hex(input: impl AsRef<[u8]>) -> String {
    hex::encode(keccak256(input))
}

/// Compute Keccak-384 digest as lowercase hex
pub fn keccak384_hex(input: impl AsRef<[u8]>) -> String {
    hex::encode(keccak384(input))
}

/// Compute Keccak-512 digest as lowercase hex
pub fn keccak512_hex(input: impl AsRef<[u8]>) -> String {
    hex::encode(keccak512(input))
}

/// One-shot digest with the width chosen at runtime.
pub fn digest(variant: Variant, input: impl AsRef<[u8]>) -> Digest {
    let mut hasher = KeccakHasher::new(variant);
    hasher.update(input.as_ref());
    hasher.finalize()
}
