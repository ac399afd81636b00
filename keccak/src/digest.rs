//! Finalized digests and their encodings.

use alloc::string::String;
use arrayvec::ArrayVec;
use core::fmt::Write;

use crate::error::KeccakError;
use crate::variant::{Variant, MAX_DIGEST_LEN};

/// Raw digest bytes, `variant.digest_len()` of them.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Digest {
    variant: Variant,
    bytes: ArrayVec<u8, MAX_DIGEST_LEN>,
}

impl Digest {
    /// Wrap the first `variant.digest_len()` bytes of `buf`.
    pub(crate) fn from_buffer(variant: Variant, buf: &[u8; MAX_DIGEST_LEN]) -> Self {
        let mut bytes = ArrayVec::new();
        // Never exceeds capacity: every digest length is at most MAX_DIGEST_LEN.
        bytes.extend(buf[..variant.digest_len()].iter().copied());
        Self { variant, bytes }
    }

    /// Width that produced this digest.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Digest bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Digest length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Never true for a finalized digest.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Lowercase hex, two characters per byte.
    ///
    /// Allocation failure aborts, as with any other `String`.
    pub fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }

    /// Same as [`Digest::to_hex`] but reports allocation failure instead of aborting.
    pub fn try_to_hex(&self) -> Result<String, KeccakError> {
        let requested = self.len() * 2;
        let mut out = String::new();
        out.try_reserve_exact(requested)
            .map_err(|_| KeccakError::ResourceExhausted { requested })?;
        write!(out, "{self:x}").map_err(|_| KeccakError::ResourceExhausted { requested })?;
        Ok(out)
    }
}

impl core::ops::Deref for Digest {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl PartialEq<[u8]> for Digest {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl<const N: usize> PartialEq<[u8; N]> for Digest {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.as_bytes() == other.as_slice()
    }
}

impl core::fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for byte in self.bytes.iter() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl core::fmt::Display for Digest {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::LowerHex::fmt(self, f)
    }
}

impl core::fmt::Debug for Digest {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Digest({}, {self:x})", self.variant)
    }
}

/// Requested form of the finalized output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// Digest bytes as they are.
    Raw,
    /// Lowercase hex string.
    #[default]
    Hex,
}

/// Finalized output in the requested [`Encoding`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Digest bytes.
    Raw(Digest),
    /// Lowercase hex of the digest.
    Hex(String),
}

impl Output {
    pub(crate) fn encode(digest: Digest, encoding: Encoding) -> Self {
        match encoding {
            Encoding::Raw => Output::Raw(digest),
            Encoding::Hex => Output::Hex(digest.to_hex()),
        }
    }

    /// Bytes of the raw digest, or the ASCII bytes of the hex string.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Output::Raw(digest) => digest.as_bytes(),
            Output::Hex(hex) => hex.as_bytes(),
        }
    }

    /// Length of [`Output::as_bytes`].
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Whether [`Output::as_bytes`] is empty.
    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}
