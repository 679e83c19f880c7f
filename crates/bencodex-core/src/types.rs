//! Type discriminants shared by every value variant.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The tag of a Bencodex value.
///
/// The discriminants are part of the fingerprint wire contract: the first
/// byte of a serialized [`Fingerprint`](crate::Fingerprint) is this tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ValueType {
    Null = 0,
    Boolean = 1,
    Integer = 2,
    Binary = 3,
    Text = 4,
    List = 5,
    Dictionary = 6,
}

impl ValueType {
    /// Convert to the fingerprint tag byte.
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Parse from a fingerprint tag byte.
    pub fn from_u8(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(ValueType::Null),
            1 => Some(ValueType::Boolean),
            2 => Some(ValueType::Integer),
            3 => Some(ValueType::Binary),
            4 => Some(ValueType::Text),
            5 => Some(ValueType::List),
            6 => Some(ValueType::Dictionary),
            _ => None,
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            ValueType::Null => "null",
            ValueType::Boolean => "boolean",
            ValueType::Integer => "integer",
            ValueType::Binary => "binary",
            ValueType::Text => "text",
            ValueType::List => "list",
            ValueType::Dictionary => "dictionary",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The Bencodex null value, for typed extraction (`Null::try_from(&value)`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Null;
