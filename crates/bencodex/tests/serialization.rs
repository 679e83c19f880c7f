//! Typed conversion through the facade.

use std::collections::BTreeMap;

use bencodex::{
    decode, from_bytes, to_bytes, Codec, CodecConfig, Dictionary, FromValue, Key, KeyConvention,
    RecordReader, RecordWriter, SerializationError, SerializerSettings, ToValue, Value,
};
use bencodex_testkit::fixtures::{sample_account, Account};
use bytes::Bytes;
use proptest::prelude::*;

#[test]
fn test_account_round_trips_through_bytes() {
    let account = sample_account();
    let bytes = to_bytes(&account);
    assert_eq!(from_bytes::<Account>(&bytes).unwrap(), account);
}

#[test]
fn test_absent_memo_is_omitted() {
    let value = sample_account().to_value();
    let dict = value.as_dictionary().unwrap();
    assert!(!dict.contains_key("memo"));
    assert_eq!(dict.len(), 3);
}

#[test]
fn test_present_memo_is_written() {
    let account = Account {
        memo: Some("hi".to_string()),
        ..sample_account()
    };
    let value = account.to_value();
    assert_eq!(value.get("memo"), Some(&Value::from("hi")));
    assert_eq!(Account::from_value(&value).unwrap(), account);
}

#[test]
fn test_missing_required_field() {
    let value = Value::from(Dictionary::empty().set_item("name", "bob"));
    let err = Account::from_value(&value).unwrap_err();
    assert!(matches!(err, SerializationError::MissingField(ref f) if f == "balance"));
}

#[test]
fn test_wrong_field_type_names_the_field() {
    let value = sample_account()
        .to_value()
        .as_dictionary()
        .unwrap()
        .set_item("balance", "lots");
    let err = Account::from_value(&value.into()).unwrap_err();
    assert!(matches!(err, SerializationError::Field { ref field, .. } if field == "balance"));
}

#[test]
fn test_canonical_bytes_ignore_field_order() {
    let a = RecordWriter::new().field("b", &1u8).field("a", &2u8).finish();
    let b = RecordWriter::new().field("a", &2u8).field("b", &1u8).finish();
    assert_eq!(to_bytes(&a), to_bytes(&b));
}

fn prefixed(name: &str) -> Key {
    Key::from(format!("x-{name}"))
}

#[test]
fn test_key_conventions() {
    for (convention, expected) in [
        (KeyConvention::Text, Key::from("id")),
        (KeyConvention::Binary, Key::from(&b"id"[..])),
        (KeyConvention::Custom(prefixed), Key::from("x-id")),
    ] {
        let settings = SerializerSettings::with_key_convention(convention);
        let value = RecordWriter::with_settings(settings).field("id", &9u32).finish();
        let dict = value.as_dictionary().unwrap();
        assert_eq!(dict.keys().next(), Some(&expected));

        let reader = RecordReader::with_settings(&value, settings).unwrap();
        assert_eq!(reader.field::<u32>("id").unwrap(), 9);
    }
}

#[test]
fn test_codec_uses_configured_limits() {
    let codec = Codec::new(CodecConfig {
        max_encoded_len: Some(8),
        ..CodecConfig::default()
    });
    assert!(codec.to_bytes(&sample_account()).is_err());
    assert_eq!(codec.from_bytes::<u32>(b"i7e").unwrap(), 7);
}

#[test]
fn test_maps_keep_key_kinds_apart() {
    let mut text = BTreeMap::new();
    text.insert("k".to_string(), 1u8);
    let mut binary = BTreeMap::new();
    binary.insert(Bytes::from_static(b"k"), 1u8);

    assert_eq!(to_bytes(&text), b"du1:ki1ee");
    assert_eq!(to_bytes(&binary), b"d1:ki1ee");
    assert!(from_bytes::<BTreeMap<Bytes, u8>>(&to_bytes(&text)).is_err());
}

proptest! {
    #[test]
    fn test_accounts_round_trip(
        name in "[a-z]{1,12}",
        balance in any::<u64>(),
        tags in proptest::collection::vec("[a-z]{0,6}", 0..4),
        memo in proptest::option::of(".{0,16}"),
    ) {
        let account = Account { name, balance, tags, memo };
        let decoded = decode(&to_bytes(&account)).unwrap();
        prop_assert_eq!(Account::from_value(&decoded).unwrap(), account);
    }
}
