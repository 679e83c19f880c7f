//! # Bencodex Core
//!
//! Pure primitives for Bencodex: the value model, the canonical codec, and
//! fingerprints.
//!
//! This crate contains no storage and no networking. Values are immutable,
//! `Send + Sync`, and cheap to clone; every structural update returns a new
//! value.
//!
//! ## Key Types
//!
//! - [`Value`] - Any Bencodex value (null, boolean, integer, binary, text, list, dictionary)
//! - [`Key`] - Binary or text, the only values allowed as dictionary keys
//! - [`Fingerprint`] - Compact digest standing in for a value's encoding
//! - [`ValueType`] - Discriminant tag shared by values and fingerprints
//!
//! ## Canonicalization
//!
//! Every value has exactly one encoding. See the [`canonical`] module for
//! the wire format and [`decode`](mod@decode) for the checks applied when
//! reading it back.

pub mod canonical;
pub mod decode;
pub mod dictionary;
pub mod error;
pub mod fingerprint;
mod inspect;
pub mod key;
pub mod list;
pub mod scalar;
pub mod types;
pub mod value;

pub use canonical::{encode, encode_into_chunks, encode_to, Chunks};
pub use decode::{decode, decode_bytes, decode_reader, Decoder, DecoderConfig, DEFAULT_MAX_DEPTH};
pub use dictionary::Dictionary;
pub use error::{BencodexError, DecodingError};
pub use fingerprint::{Fingerprint, MAX_INLINE_DIGEST};
pub use key::Key;
pub use list::List;
pub use scalar::{Binary, Integer, Text};
pub use types::{Null, ValueType};
pub use value::Value;
