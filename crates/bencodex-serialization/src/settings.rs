//! Serializer settings.

use bencodex_core::Key;
use std::fmt;

/// How record field names become dictionary keys.
#[derive(Clone, Copy, Default)]
pub enum KeyConvention {
    /// Field names are text keys.
    #[default]
    Text,
    /// Field names are the UTF-8 bytes of the name, as binary keys.
    Binary,
    /// Caller-provided mapping.
    Custom(fn(&str) -> Key),
}

impl KeyConvention {
    /// The dictionary key for a field name.
    pub fn key(&self, name: &str) -> Key {
        match self {
            KeyConvention::Text => Key::from(name),
            KeyConvention::Binary => Key::from(name.as_bytes()),
            KeyConvention::Custom(f) => f(name),
        }
    }
}

impl fmt::Debug for KeyConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyConvention::Text => f.write_str("Text"),
            KeyConvention::Binary => f.write_str("Binary"),
            KeyConvention::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Settings shared by [`RecordWriter`](crate::RecordWriter) and
/// [`RecordReader`](crate::RecordReader).
#[derive(Clone, Copy, Debug, Default)]
pub struct SerializerSettings {
    pub key_convention: KeyConvention,
}

impl SerializerSettings {
    pub fn with_key_convention(key_convention: KeyConvention) -> Self {
        Self { key_convention }
    }
}
