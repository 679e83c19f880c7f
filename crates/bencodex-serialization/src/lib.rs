//! # Bencodex Serialization
//!
//! Typed conversion between Rust values and Bencodex [`Value`]s.
//!
//! Conversions are plain trait implementations ([`ToValue`] and
//! [`FromValue`]) resolved at compile time. Record types are written with
//! [`RecordWriter`] and read with [`RecordReader`]; the
//! [`SerializerSettings`] they share decide how field names become keys.

pub mod convert;
pub mod error;
pub mod record;
pub mod settings;

pub use convert::{FromValue, ToValue};
pub use error::{Result, SerializationError};
pub use record::{RecordReader, RecordWriter};
pub use settings::{KeyConvention, SerializerSettings};

use bencodex_core::Value;

/// Convert a Rust value to a Bencodex value.
pub fn to_value<T: ToValue + ?Sized>(value: &T) -> Value {
    value.to_value()
}

/// Convert a Bencodex value to a Rust value.
pub fn from_value<T: FromValue>(value: &Value) -> Result<T> {
    T::from_value(value)
}

/// Convert a Rust value straight to canonical bytes.
pub fn to_bytes<T: ToValue + ?Sized>(value: &T) -> Vec<u8> {
    bencodex_core::encode(&value.to_value())
}

/// Decode canonical bytes and convert the result.
pub fn from_bytes<T: FromValue>(bytes: &[u8]) -> Result<T> {
    let value = bencodex_core::decode(bytes)?;
    T::from_value(&value)
}
