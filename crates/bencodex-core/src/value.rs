//! The Bencodex value tree.

use bytes::Bytes;
use num_bigint::BigInt;
use std::fmt;

use crate::dictionary::Dictionary;
use crate::error::BencodexError;
use crate::fingerprint::Fingerprint;
use crate::key::Key;
use crate::list::List;
use crate::scalar::{Binary, Integer, Text};
use crate::types::{Null, ValueType};

/// Fingerprint of the only null value.
pub static NULL_FINGERPRINT: Fingerprint = Fingerprint::bare(ValueType::Null, 1);

/// Any Bencodex value.
///
/// # Examples
///
/// ```
/// use bencodex_core::{Dictionary, Value, ValueType};
///
/// let dict = Dictionary::empty().set_item("foo", "bar");
/// let value = Value::from(dict);
///
/// assert_eq!(value.value_type(), ValueType::Dictionary);
/// assert_eq!(value.encoding_length(), 14);
/// assert_eq!(value.inspection(), "{\n  \"foo\": \"bar\",\n}");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    Null,
    Boolean(bool),
    Integer(Integer),
    Binary(Binary),
    Text(Text),
    List(List),
    Dictionary(Dictionary),
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::Boolean(_) => ValueType::Boolean,
            Value::Integer(_) => ValueType::Integer,
            Value::Binary(_) => ValueType::Binary,
            Value::Text(_) => ValueType::Text,
            Value::List(_) => ValueType::List,
            Value::Dictionary(_) => ValueType::Dictionary,
        }
    }

    /// Exact length of the canonical encoding, without encoding.
    pub fn encoding_length(&self) -> u64 {
        match self {
            Value::Null | Value::Boolean(_) => 1,
            Value::Integer(i) => i.encoding_length(),
            Value::Binary(b) => b.encoding_length(),
            Value::Text(t) => t.encoding_length(),
            Value::List(l) => l.encoding_length(),
            Value::Dictionary(d) => d.encoding_length(),
        }
    }

    pub fn fingerprint(&self) -> Fingerprint {
        match self {
            Value::Null => NULL_FINGERPRINT.clone(),
            Value::Boolean(b) => Fingerprint::new(ValueType::Boolean, 1, vec![u8::from(*b)]),
            Value::Integer(i) => i.fingerprint(),
            Value::Binary(b) => b.fingerprint(),
            Value::Text(t) => t.fingerprint(),
            Value::List(l) => l.fingerprint(),
            Value::Dictionary(d) => d.fingerprint(),
        }
    }

    /// Equality by fingerprint only.
    ///
    /// Cheaper than `==` on large trees whose fingerprints are cached, but
    /// only as reliable as SHA-1 collision resistance.
    pub fn fingerprint_eq(&self, other: &Value) -> bool {
        self.fingerprint() == other.fingerprint()
    }

    /// Human-readable rendering for debugging. Not a serialization format.
    pub fn inspection(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Boolean(true) => "true".to_string(),
            Value::Boolean(false) => "false".to_string(),
            Value::Integer(i) => i.inspection(),
            Value::Binary(b) => b.inspection(),
            Value::Text(t) => t.inspection(),
            Value::List(l) => l.inspection(),
            Value::Dictionary(d) => d.inspection(),
        }
    }

    pub(crate) fn is_container(&self) -> bool {
        matches!(self, Value::List(_) | Value::Dictionary(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<&Integer> {
        match self {
            Value::Integer(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_binary(&self) -> Option<&Binary> {
        match self {
            Value::Binary(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Value::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.as_text().map(Text::as_str)
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_dictionary(&self) -> Option<&Dictionary> {
        match self {
            Value::Dictionary(d) => Some(d),
            _ => None,
        }
    }

    /// Look up `key` if this is a dictionary.
    pub fn get(&self, key: impl Into<Key>) -> Option<&Value> {
        self.as_dictionary()?.get(key)
    }

    /// This value as a dictionary key, if it is binary or text.
    pub fn as_key(&self) -> Option<Key> {
        match self {
            Value::Binary(b) => Some(Key::Binary(b.clone())),
            Value::Text(t) => Some(Key::Text(t.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inspection())
    }
}

impl From<Null> for Value {
    fn from(_: Null) -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

macro_rules! value_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Integer(Integer::from(n))
                }
            }
        )*
    };
}

value_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, BigInt);

impl From<Integer> for Value {
    fn from(i: Integer) -> Self {
        Value::Integer(i)
    }
}

impl From<Binary> for Value {
    fn from(b: Binary) -> Self {
        Value::Binary(b)
    }
}

impl From<Bytes> for Value {
    fn from(b: Bytes) -> Self {
        Value::Binary(Binary::from(b))
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Binary(Binary::from(b))
    }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Value::Binary(Binary::from(b))
    }
}

impl<const N: usize> From<&[u8; N]> for Value {
    fn from(b: &[u8; N]) -> Self {
        Value::Binary(Binary::from(b))
    }
}

impl From<Text> for Value {
    fn from(t: Text) -> Self {
        Value::Text(t)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(Text::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(Text::from(s))
    }
}

impl From<Key> for Value {
    fn from(k: Key) -> Self {
        match k {
            Key::Binary(b) => Value::Binary(b),
            Key::Text(t) => Value::Text(t),
        }
    }
}

impl From<List> for Value {
    fn from(l: List) -> Self {
        Value::List(l)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(List::new(items))
    }
}

impl From<Dictionary> for Value {
    fn from(d: Dictionary) -> Self {
        Value::Dictionary(d)
    }
}

/// `None` becomes [`Value::Null`].
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl TryFrom<&Value> for Null {
    type Error = BencodexError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(Null),
            other => Err(BencodexError::mismatch(ValueType::Null, other.value_type())),
        }
    }
}

impl TryFrom<&Value> for bool {
    type Error = BencodexError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Boolean(b) => Ok(*b),
            other => Err(BencodexError::mismatch(ValueType::Boolean, other.value_type())),
        }
    }
}

macro_rules! try_from_variant {
    ($($variant:ident => $t:ty),*) => {
        $(
            impl TryFrom<&Value> for $t {
                type Error = BencodexError;

                fn try_from(value: &Value) -> Result<Self, Self::Error> {
                    match value {
                        Value::$variant(inner) => Ok(inner.clone()),
                        other => Err(BencodexError::mismatch(
                            ValueType::$variant,
                            other.value_type(),
                        )),
                    }
                }
            }

            impl TryFrom<Value> for $t {
                type Error = BencodexError;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    match value {
                        Value::$variant(inner) => Ok(inner),
                        other => Err(BencodexError::mismatch(
                            ValueType::$variant,
                            other.value_type(),
                        )),
                    }
                }
            }
        )*
    };
}

try_from_variant!(
    Integer => Integer,
    Binary => Binary,
    Text => Text,
    List => List,
    Dictionary => Dictionary
);

impl TryFrom<&Value> for Key {
    type Error = BencodexError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_key().ok_or_else(|| {
            BencodexError::UnsupportedType(format!(
                "{} cannot be a dictionary key",
                value.value_type()
            ))
        })
    }
}
