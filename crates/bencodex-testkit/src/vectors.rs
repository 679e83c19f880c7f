//! Golden test vectors.
//!
//! Each vector fixes a value's canonical bytes, its encoding length and its
//! fingerprint digest. Any implementation of the format must reproduce them
//! exactly.

use bencodex_core::{encode, Binary, Dictionary, List, Value, ValueType};
use serde::Serialize;

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Builds the value under test.
    pub build: fn() -> Value,
    /// Expected canonical encoding (hex).
    pub encoded_hex: &'static str,
    /// Expected fingerprint type.
    pub value_type: ValueType,
    /// Expected encoding length.
    pub encoding_length: u64,
    /// Expected fingerprint digest (hex).
    pub fingerprint_hex: &'static str,
}

impl GoldenVector {
    pub fn build(&self) -> Value {
        (self.build)()
    }
}

fn empty_list() -> Value {
    List::empty().into()
}

fn list_of_null() -> Value {
    List::empty().add(Value::Null).into()
}

fn hello_world() -> Value {
    List::from_iter(["hello", "world"]).into()
}

fn nested_lists() -> Value {
    List::empty()
        .add(Value::Null)
        .add(List::empty())
        .add(List::empty().add(Value::Null))
        .add(List::from_iter(["hello", "world"]))
        .into()
}

fn empty_dictionary() -> Value {
    Dictionary::empty().into()
}

fn text_keyed() -> Value {
    Dictionary::empty().set_item("foo", "bar").into()
}

fn binary_keyed() -> Value {
    Dictionary::empty().set_item(b"foo", "bar").into()
}

fn mixed_keys() -> Value {
    Dictionary::empty()
        .set_item("stringKey", "string")
        .set_item(b"\x00", "byte")
        .into()
}

fn small_integer() -> Value {
    Value::from(123)
}

fn negative_one() -> Value {
    Value::from(-1)
}

fn short_text() -> Value {
    Value::from("hello")
}

fn long_binary() -> Value {
    Binary::from([0u8; 32]).into()
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "empty list",
            build: empty_list,
            encoded_hex: "6c65",
            value_type: ValueType::List,
            encoding_length: 2,
            fingerprint_hex: "",
        },
        GoldenVector {
            name: "list of null",
            build: list_of_null,
            encoded_hex: "6c6e65",
            value_type: ValueType::List,
            encoding_length: 3,
            fingerprint_hex: "ae7fca60943c2ef2f6cf5420477da41acf29b01d",
        },
        GoldenVector {
            name: "hello world",
            build: hello_world,
            encoded_hex: "6c75353a68656c6c6f75353a776f726c6465",
            value_type: ValueType::List,
            encoding_length: 18,
            fingerprint_hex: "22852139f287a01cdb803fd86ed70e4c4d121254",
        },
        GoldenVector {
            name: "nested lists",
            build: nested_lists,
            encoded_hex: "6c6e6c656c6e656c75353a68656c6c6f75353a776f726c646565",
            value_type: ValueType::List,
            encoding_length: 26,
            fingerprint_hex: "24caa983a5225522ca798be3b31a1abecdb36fe5",
        },
        GoldenVector {
            name: "empty dictionary",
            build: empty_dictionary,
            encoded_hex: "6465",
            value_type: ValueType::Dictionary,
            encoding_length: 2,
            fingerprint_hex: "",
        },
        GoldenVector {
            name: "text key",
            build: text_keyed,
            encoded_hex: "6475333a666f6f75333a62617265",
            value_type: ValueType::Dictionary,
            encoding_length: 14,
            fingerprint_hex: "c2f36fbae8a22c841eec717a6e0cec3975b0ee44",
        },
        GoldenVector {
            name: "binary key",
            build: binary_keyed,
            encoded_hex: "64333a666f6f75333a62617265",
            value_type: ValueType::Dictionary,
            encoding_length: 13,
            fingerprint_hex: "4f7a9b59a6b76a46d48eb3d7d60babe31eb5a901",
        },
        GoldenVector {
            name: "mixed keys",
            build: mixed_keys,
            encoded_hex: "64313a0075343a6279746575393a737472696e674b657975363a737472696e6765",
            value_type: ValueType::Dictionary,
            encoding_length: 33,
            fingerprint_hex: "d7c803acb064e64d4022d2e10895c9410b909e1b",
        },
        GoldenVector {
            name: "small integer",
            build: small_integer,
            encoded_hex: "6931323365",
            value_type: ValueType::Integer,
            encoding_length: 5,
            fingerprint_hex: "7b",
        },
        GoldenVector {
            name: "negative one",
            build: negative_one,
            encoded_hex: "692d3165",
            value_type: ValueType::Integer,
            encoding_length: 4,
            fingerprint_hex: "ff",
        },
        GoldenVector {
            name: "short text",
            build: short_text,
            encoded_hex: "75353a68656c6c6f",
            value_type: ValueType::Text,
            encoding_length: 8,
            fingerprint_hex: "68656c6c6f",
        },
        GoldenVector {
            name: "long binary",
            build: long_binary,
            encoded_hex: "33323a0000000000000000000000000000000000000000000000000000000000000000",
            value_type: ValueType::Binary,
            encoding_length: 35,
            fingerprint_hex: "de8a847bff8c343d69b853a215e6ee775ef2ef96",
        },
    ]
}

/// What a vector actually produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VectorReport {
    pub name: String,
    pub matches: bool,
    pub encoded_hex: String,
    pub value_type: ValueType,
    pub encoding_length: u64,
    pub fingerprint_hex: String,
}

fn report(vector: &GoldenVector) -> VectorReport {
    let value = vector.build();
    let encoded_hex = hex::encode(encode(&value));
    let fingerprint = value.fingerprint();
    let fingerprint_hex = fingerprint.to_hex();

    let matches = encoded_hex == vector.encoded_hex
        && fingerprint.value_type() == vector.value_type
        && fingerprint.encoding_length() == vector.encoding_length
        && value.encoding_length() == vector.encoding_length
        && fingerprint_hex == vector.fingerprint_hex;

    VectorReport {
        name: vector.name.to_string(),
        matches,
        encoded_hex,
        value_type: fingerprint.value_type(),
        encoding_length: fingerprint.encoding_length(),
        fingerprint_hex,
    }
}

/// Run every vector and report what this implementation produced.
pub fn verify_all_vectors() -> Vec<VectorReport> {
    all_vectors().iter().map(report).collect()
}

/// The reports as pretty JSON, for comparing against other implementations.
pub fn export_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&verify_all_vectors())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bencodex_core::decode;

    #[test]
    fn test_all_vectors_match() {
        for report in verify_all_vectors() {
            assert!(
                report.matches,
                "vector '{}' diverged: {:?}",
                report.name,
                report
            );
        }
    }

    #[test]
    fn test_vectors_decode_back() {
        for vector in all_vectors() {
            let bytes = hex::decode(vector.encoded_hex).unwrap();
            assert_eq!(
                decode(&bytes).unwrap(),
                vector.build(),
                "vector '{}' did not round-trip",
                vector.name
            );
        }
    }

    #[test]
    fn test_export_json() {
        let json = export_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let first = &parsed[0];
        assert_eq!(first["name"], "empty list");
        assert_eq!(first["value_type"], "List");
        assert_eq!(first["encoding_length"], 2);
    }
}
