//! Scalar payload types: arbitrary-precision integers, byte strings, text.

use bytes::Bytes;
use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive};
use std::fmt;
use std::sync::Arc;

use crate::fingerprint::Fingerprint;
use crate::inspect;
use crate::types::ValueType;

/// Number of ASCII digits needed to print `n` in decimal.
pub(crate) fn decimal_len(n: u64) -> u64 {
    let mut digits = 1;
    let mut n = n / 10;
    while n > 0 {
        digits += 1;
        n /= 10;
    }
    digits
}

/// An arbitrary-precision signed integer, encoded as `i<digits>e`.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Integer(BigInt);

impl Integer {
    pub fn new(value: impl Into<BigInt>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &BigInt {
        &self.0
    }

    pub fn into_inner(self) -> BigInt {
        self.0
    }

    /// The value as `i64`, if it fits.
    pub fn to_i64(&self) -> Option<i64> {
        self.0.to_i64()
    }

    /// The value as `u64`, if it fits.
    pub fn to_u64(&self) -> Option<u64> {
        self.0.to_u64()
    }

    pub(crate) fn encoded_body(&self) -> String {
        self.0.to_string()
    }

    pub fn encoding_length(&self) -> u64 {
        let magnitude = self.0.abs().to_string().len() as u64;
        let sign = u64::from(self.0.is_negative());
        2 + sign + magnitude
    }

    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::scalar(
            ValueType::Integer,
            self.encoding_length(),
            &self.0.to_signed_bytes_le(),
        )
    }

    pub fn inspection(&self) -> String {
        self.0.to_string()
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

macro_rules! integer_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Integer {
                fn from(n: $t) -> Self {
                    Self(BigInt::from(n))
                }
            }
        )*
    };
}

integer_from!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<BigInt> for Integer {
    fn from(n: BigInt) -> Self {
        Self(n)
    }
}

/// A raw byte string, encoded as `<len>:<bytes>`.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Binary(Bytes);

impl Binary {
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_bytes(&self) -> Bytes {
        self.0.clone()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn encoding_length(&self) -> u64 {
        let len = self.0.len() as u64;
        decimal_len(len) + 1 + len
    }

    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::scalar(ValueType::Binary, self.encoding_length(), &self.0)
    }

    pub fn inspection(&self) -> String {
        inspect::quote_binary(&self.0)
    }
}

impl AsRef<[u8]> for Binary {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Bytes> for Binary {
    fn from(bytes: Bytes) -> Self {
        Self(bytes)
    }
}

impl From<Vec<u8>> for Binary {
    fn from(bytes: Vec<u8>) -> Self {
        Self(Bytes::from(bytes))
    }
}

impl From<&[u8]> for Binary {
    fn from(bytes: &[u8]) -> Self {
        Self(Bytes::copy_from_slice(bytes))
    }
}

impl<const N: usize> From<[u8; N]> for Binary {
    fn from(bytes: [u8; N]) -> Self {
        Self(Bytes::copy_from_slice(&bytes))
    }
}

impl<const N: usize> From<&[u8; N]> for Binary {
    fn from(bytes: &[u8; N]) -> Self {
        Self(Bytes::copy_from_slice(bytes))
    }
}

/// A Unicode string, encoded as `u<utf8 len>:<utf8 bytes>`.
///
/// Ordering is byte-wise over the UTF-8 encoding, which is what `str`'s
/// `Ord` already does.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Text(Arc<str>);

impl Text {
    pub fn new(s: impl Into<Arc<str>>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn encoding_length(&self) -> u64 {
        let len = self.0.len() as u64;
        1 + decimal_len(len) + 1 + len
    }

    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::scalar(ValueType::Text, self.encoding_length(), self.0.as_bytes())
    }

    pub fn inspection(&self) -> String {
        inspect::quote_text(&self.0)
    }
}

impl Default for Text {
    fn default() -> Self {
        Self(Arc::from(""))
    }
}

impl AsRef<str> for Text {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Self(Arc::from(s))
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Self(Arc::from(s))
    }
}

impl From<Arc<str>> for Text {
    fn from(s: Arc<str>) -> Self {
        Self(s)
    }
}
