//! # Bencodex Testkit
//!
//! Testing utilities for Bencodex.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known values with their expected encodings and fingerprints
//! - **Generators**: Proptest strategies for arbitrary value trees
//! - **Fixtures**: Ready-made sample values for tests
//!
//! ## Golden Vectors
//!
//! Golden vectors pin the encoding and fingerprint construction down to the
//! byte:
//!
//! ```rust
//! use bencodex_testkit::vectors::all_vectors;
//!
//! for vector in all_vectors() {
//!     let value = vector.build();
//!     assert_eq!(hex::encode(bencodex_core::encode(&value)), vector.encoded_hex);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use bencodex_testkit::generators::value;
//!
//! proptest! {
//!     #[test]
//!     fn decode_inverts_encode(v in value()) {
//!         let bytes = bencodex_core::encode(&v);
//!         prop_assert_eq!(bencodex_core::decode(&bytes).unwrap(), v);
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{deep_list, sample_account, sample_dictionary, Account};
pub use generators::{key, value, ArbitraryValue};
pub use vectors::{all_vectors, export_json, verify_all_vectors, GoldenVector, VectorReport};
