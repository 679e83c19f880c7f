//! Error types for value conversion.

use bencodex_core::{BencodexError, DecodingError};
use thiserror::Error;

/// Errors that can occur converting between Rust and Bencodex values.
#[derive(Debug, Error)]
pub enum SerializationError {
    #[error(transparent)]
    Bencodex(#[from] BencodexError),

    #[error("decoding error: {0}")]
    Decoding(#[from] DecodingError),

    #[error("missing field: {0}")]
    MissingField(String),

    #[error("integer {value} out of range for {target}")]
    OutOfRange { value: String, target: &'static str },

    #[error("invalid value: {0}")]
    InvalidValue(String),

    #[error("field {field}: {source}")]
    Field {
        field: String,
        #[source]
        source: Box<SerializationError>,
    },
}

impl SerializationError {
    pub(crate) fn in_field(self, field: &str) -> Self {
        SerializationError::Field {
            field: field.to_string(),
            source: Box::new(self),
        }
    }
}

/// Result type for conversions.
pub type Result<T> = std::result::Result<T, SerializationError>;
