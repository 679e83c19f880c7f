//! Dictionary keys and canonical key order.
//!
//! Canonical order: every binary key precedes every text key; within a
//! kind, keys compare byte-wise (text by its UTF-8 encoding), a strict
//! prefix sorting first. The derived `Ord` on [`Key`] is exactly that order
//! because `Binary` is declared before `Text`.

use bytes::Bytes;
use std::fmt;

use crate::fingerprint::Fingerprint;
use crate::scalar::{Binary, Text};
use crate::types::ValueType;

/// A value that can be used as a dictionary key.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    Binary(Binary),
    Text(Text),
}

impl Key {
    pub fn value_type(&self) -> ValueType {
        match self {
            Key::Binary(_) => ValueType::Binary,
            Key::Text(_) => ValueType::Text,
        }
    }

    /// The raw key bytes (UTF-8 for text keys).
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Key::Binary(b) => b.as_bytes(),
            Key::Text(t) => t.as_str().as_bytes(),
        }
    }

    pub fn encoding_length(&self) -> u64 {
        match self {
            Key::Binary(b) => b.encoding_length(),
            Key::Text(t) => t.encoding_length(),
        }
    }

    pub fn fingerprint(&self) -> Fingerprint {
        match self {
            Key::Binary(b) => b.fingerprint(),
            Key::Text(t) => t.fingerprint(),
        }
    }

    pub fn inspection(&self) -> String {
        match self {
            Key::Binary(b) => b.inspection(),
            Key::Text(t) => t.inspection(),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inspection())
    }
}

impl From<Binary> for Key {
    fn from(b: Binary) -> Self {
        Key::Binary(b)
    }
}

impl From<Text> for Key {
    fn from(t: Text) -> Self {
        Key::Text(t)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Text(Text::from(s))
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Text(Text::from(s))
    }
}

impl From<&[u8]> for Key {
    fn from(b: &[u8]) -> Self {
        Key::Binary(Binary::from(b))
    }
}

impl<const N: usize> From<&[u8; N]> for Key {
    fn from(b: &[u8; N]) -> Self {
        Key::Binary(Binary::from(b))
    }
}

impl<const N: usize> From<[u8; N]> for Key {
    fn from(b: [u8; N]) -> Self {
        Key::Binary(Binary::from(b))
    }
}

impl From<Vec<u8>> for Key {
    fn from(b: Vec<u8>) -> Self {
        Key::Binary(Binary::from(b))
    }
}

impl From<Bytes> for Key {
    fn from(b: Bytes) -> Self {
        Key::Binary(Binary::from(b))
    }
}

impl From<&Key> for Key {
    fn from(k: &Key) -> Self {
        k.clone()
    }
}
