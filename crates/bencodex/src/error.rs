//! Error types for the facade.

use bencodex_core::{BencodexError, DecodingError};
use bencodex_serialization::SerializationError;
use thiserror::Error;

/// Errors from [`Codec`](crate::Codec) operations.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Input bytes were not a canonical encoding.
    #[error("decoding error: {0}")]
    Decoding(#[from] DecodingError),

    /// The decoded value did not fit the requested type.
    #[error("conversion error: {0}")]
    Conversion(#[from] SerializationError),

    /// The encoding exceeded the configured size limit.
    #[error("encoding is {len} bytes, limit is {limit}")]
    TooLarge { len: u64, limit: u64 },
}

/// Result type for value operations, for callers working with values
/// directly rather than through a [`Codec`](crate::Codec).
///
/// ```
/// use bencodex::{decode, Dictionary, Integer, Result};
///
/// fn balance(bytes: &[u8]) -> Result<Integer> {
///     let value = decode(bytes)?;
///     let dict: Dictionary = value.try_into()?;
///     dict.get_value("balance")
/// }
///
/// assert_eq!(balance(b"du7:balancei10ee").unwrap(), Integer::from(10));
/// assert!(balance(b"du7:balanceu2:10e").is_err());
/// assert!(balance(b"i1e").is_err());
/// ```
pub type Result<T> = std::result::Result<T, BencodexError>;
