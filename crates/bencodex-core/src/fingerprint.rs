//! Fingerprints: compact digests standing in for full encodings.
//!
//! A fingerprint is `(type, encoding_length, digest)`. Scalars whose payload
//! fits in [`MAX_INLINE_DIGEST`] bytes carry the payload itself as digest;
//! longer scalars carry its SHA-1. Non-empty containers carry the SHA-1 of
//! their children's serialized fingerprints, so a container's fingerprint is
//! derived from cached child fingerprints without materializing the
//! encoding.

use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};
use std::fmt;

use crate::types::ValueType;

/// Payloads up to this many bytes are used verbatim as the digest.
pub const MAX_INLINE_DIGEST: usize = 20;

/// Serialized length field switches to 8 bytes above this bound.
const SHORT_LENGTH_MAX: u64 = i32::MAX as u64;

/// A digest identifying a value up to hash collisions.
///
/// Equal values always have equal fingerprints. The converse holds only as
/// far as SHA-1 is collision resistant, so `==` on values never relies on
/// it alone.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint {
    value_type: ValueType,
    encoding_length: u64,
    digest: Vec<u8>,
}

impl Fingerprint {
    /// Create a fingerprint from its parts.
    pub fn new(
        value_type: ValueType,
        encoding_length: u64,
        digest: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            value_type,
            encoding_length,
            digest: digest.into(),
        }
    }

    /// A fingerprint with an empty digest (null, empty containers).
    pub const fn bare(value_type: ValueType, encoding_length: u64) -> Self {
        Self {
            value_type,
            encoding_length,
            digest: Vec::new(),
        }
    }

    /// Fingerprint of a scalar from its payload bytes.
    pub(crate) fn scalar(value_type: ValueType, encoding_length: u64, payload: &[u8]) -> Self {
        let digest = if payload.len() > MAX_INLINE_DIGEST {
            Sha1::digest(payload).to_vec()
        } else {
            payload.to_vec()
        };
        Self::new(value_type, encoding_length, digest)
    }

    pub const fn value_type(&self) -> ValueType {
        self.value_type
    }

    pub const fn encoding_length(&self) -> u64 {
        self.encoding_length
    }

    pub fn digest(&self) -> &[u8] {
        &self.digest
    }

    /// Hex of the digest bytes.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.digest)
    }

    /// Serialize as `type || length || digest`.
    ///
    /// The length is 4 bytes big-endian when it fits in an `i32`, 8 bytes
    /// big-endian otherwise.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(1 + 8 + self.digest.len());
        self.write_to(&mut buf);
        buf
    }

    fn write_to(&self, buf: &mut Vec<u8>) {
        buf.push(self.value_type.to_u8());
        if self.encoding_length <= SHORT_LENGTH_MAX {
            buf.extend_from_slice(&(self.encoding_length as u32).to_be_bytes());
        } else {
            buf.extend_from_slice(&self.encoding_length.to_be_bytes());
        }
        buf.extend_from_slice(&self.digest);
    }

    /// Parse the output of [`Fingerprint::to_bytes`].
    ///
    /// A 29-byte input is the long-length form (1 + 8 + 20); anything else
    /// up to 25 bytes is the short form.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        let (&tag, rest) = bytes.split_first()?;
        let value_type = ValueType::from_u8(tag)?;

        let (encoding_length, digest) = if bytes.len() == 1 + 8 + MAX_INLINE_DIGEST {
            let (len, digest) = rest.split_at(8);
            let len = u64::from_be_bytes(len.try_into().ok()?);
            if len <= SHORT_LENGTH_MAX {
                return None;
            }
            (len, digest)
        } else {
            if rest.len() < 4 || rest.len() > 4 + MAX_INLINE_DIGEST {
                return None;
            }
            let (len, digest) = rest.split_at(4);
            let len = u32::from_be_bytes(len.try_into().ok()?) as u64;
            if len > SHORT_LENGTH_MAX {
                return None;
            }
            (len, digest)
        };

        Some(Self::new(value_type, encoding_length, digest))
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Fingerprint({:?}, {}, {})",
            self.value_type,
            self.encoding_length,
            self.to_hex()
        )
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.value_type,
            self.encoding_length,
            self.to_hex()
        )
    }
}

/// Incremental digest over child fingerprints of a container.
pub(crate) struct ContainerDigest {
    hasher: Sha1,
    scratch: Vec<u8>,
    children: usize,
}

impl ContainerDigest {
    pub(crate) fn new() -> Self {
        Self {
            hasher: Sha1::new(),
            scratch: Vec::with_capacity(1 + 8 + MAX_INLINE_DIGEST),
            children: 0,
        }
    }

    pub(crate) fn push(&mut self, child: &Fingerprint) {
        self.scratch.clear();
        child.write_to(&mut self.scratch);
        self.hasher.update(&self.scratch);
        self.children += 1;
    }

    pub(crate) fn finish(self, value_type: ValueType, encoding_length: u64) -> Fingerprint {
        if self.children == 0 {
            return Fingerprint::bare(value_type, encoding_length);
        }
        Fingerprint::new(value_type, encoding_length, self.hasher.finalize().to_vec())
    }
}
