//! Error types for Bencodex Core.

use thiserror::Error;

use crate::types::ValueType;

/// Errors raised while decoding a byte stream.
///
/// Every positional variant carries the byte offset at which the problem
/// was detected. Non-canonical input is always rejected, never repaired.
#[derive(Debug, Error)]
pub enum DecodingError {
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEof { offset: usize },

    #[error("invalid length prefix at offset {offset}")]
    InvalidLengthPrefix { offset: usize },

    #[error("missing ':' separator at offset {offset}")]
    MissingSeparator { offset: usize },

    #[error("invalid integer at offset {offset}: {reason}")]
    InvalidInteger { offset: usize, reason: &'static str },

    #[error("text payload at offset {offset} is not valid UTF-8")]
    InvalidUtf8 { offset: usize },

    #[error("unknown tag byte 0x{tag:02x} at offset {offset}")]
    UnknownTag { offset: usize, tag: u8 },

    #[error("dictionary key at offset {offset} is not binary or text")]
    InvalidKey { offset: usize },

    #[error("dictionary key at offset {offset} is out of canonical order")]
    KeyOrderViolation { offset: usize },

    #[error("duplicate dictionary key at offset {offset}")]
    DuplicateKey { offset: usize },

    #[error("trailing data at offset {offset}")]
    TrailingData { offset: usize },

    #[error("nesting deeper than {max_depth} at offset {offset}")]
    NestingTooDeep { offset: usize, max_depth: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl DecodingError {
    /// The byte offset the error refers to, if it is positional.
    pub fn offset(&self) -> Option<usize> {
        match self {
            DecodingError::UnexpectedEof { offset }
            | DecodingError::InvalidLengthPrefix { offset }
            | DecodingError::MissingSeparator { offset }
            | DecodingError::InvalidInteger { offset, .. }
            | DecodingError::InvalidUtf8 { offset }
            | DecodingError::UnknownTag { offset, .. }
            | DecodingError::InvalidKey { offset }
            | DecodingError::KeyOrderViolation { offset }
            | DecodingError::DuplicateKey { offset }
            | DecodingError::TrailingData { offset }
            | DecodingError::NestingTooDeep { offset, .. } => Some(*offset),
            DecodingError::Io(_) => None,
        }
    }
}

/// Errors raised by value construction and typed access.
#[derive(Debug, Error)]
pub enum BencodexError {
    #[error("decoding error: {0}")]
    Decoding(#[from] DecodingError),

    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: ValueType,
        actual: ValueType,
    },

    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    #[error("key not found: {0}")]
    KeyNotFound(String),

    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("unsupported type: {0}")]
    UnsupportedType(String),
}

impl BencodexError {
    pub(crate) fn mismatch(expected: ValueType, actual: ValueType) -> Self {
        BencodexError::TypeMismatch { expected, actual }
    }
}
