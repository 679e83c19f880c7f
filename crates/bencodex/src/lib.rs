//! # Bencodex
//!
//! A canonical binary encoding for a small tree data model: null,
//! booleans, arbitrary-precision integers, byte strings, text, lists and
//! dictionaries keyed by byte strings or text.
//!
//! ## Overview
//!
//! - **Values**: Immutable, cheap to clone, updated by returning new values
//! - **Canonical form**: Every value has exactly one encoding; the decoder
//!   rejects anything else
//! - **Fingerprints**: Compact digests, cached on containers, that let large
//!   trees be compared and identified without re-encoding
//! - **Typed conversion**: `ToValue` / `FromValue` traits for Rust types
//!
//! ## Usage
//!
//! ```rust
//! use bencodex::{decode, encode, Dictionary, List, Value};
//!
//! let dict = Dictionary::empty()
//!     .set_item("name", "bencodex")
//!     .set_item(b"raw", &b"\x00\x01"[..])
//!     .set_item("tags", List::from_iter(["a", "b"]));
//! let value = Value::from(dict);
//!
//! let bytes = encode(&value);
//! assert_eq!(bytes.len() as u64, value.encoding_length());
//! assert_eq!(decode(&bytes).unwrap(), value);
//! ```
//!
//! ## Re-exports
//!
//! - `bencodex::core` - Value model, codec and fingerprints
//! - `bencodex::serialization` - Typed conversion

pub mod codec;
pub mod error;

// Re-export component crates
pub use bencodex_core as core;
pub use bencodex_serialization as serialization;

// Re-export main types for convenience
pub use codec::{Codec, CodecConfig};
pub use error::{CodecError, Result};

pub use bencodex_core::{
    decode, decode_reader, encode, encode_into_chunks, encode_to, BencodexError, Binary,
    Decoder, DecoderConfig, DecodingError, Dictionary, Fingerprint, Integer, Key, List, Null,
    Text, Value, ValueType,
};
pub use bencodex_serialization::{
    from_bytes, to_bytes, FromValue, KeyConvention, RecordReader, RecordWriter,
    SerializationError, SerializerSettings, ToValue,
};
