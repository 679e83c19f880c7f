//! Round-trip and canonical-form properties.

use bencodex::{
    decode, decode_reader, encode, encode_to, Binary, DecodingError, Dictionary, Key, List, Value,
};
use bencodex_testkit::generators::{key, value};
use bencodex_testkit::{deep_list, sample_dictionary};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_decode_inverts_encode(v in value()) {
        let bytes = encode(&v);
        let decoded = decode(&bytes).unwrap();
        prop_assert_eq!(&decoded, &v);
        prop_assert_eq!(encode(&decoded), bytes);
    }

    #[test]
    fn test_encoding_length_is_exact(v in value()) {
        prop_assert_eq!(encode(&v).len() as u64, v.encoding_length());
    }

    #[test]
    fn test_fingerprint_is_deterministic(v in value()) {
        let copy = decode(&encode(&v)).unwrap();
        prop_assert_eq!(v.fingerprint(), copy.fingerprint());
        prop_assert!(v.fingerprint_eq(&copy));
    }

    #[test]
    fn test_insertion_order_is_irrelevant(
        k1 in key(),
        k2 in key(),
        v1 in value(),
        v2 in value(),
    ) {
        prop_assume!(k1 != k2);
        let a = Dictionary::empty()
            .add(k1.clone(), v1.clone())
            .unwrap()
            .add(k2.clone(), v2.clone())
            .unwrap();
        let b = Dictionary::empty().add(k2, v2).unwrap().add(k1, v1).unwrap();
        prop_assert_eq!(encode(&a.clone().into()), encode(&b.clone().into()));
        prop_assert_eq!(a.fingerprint(), b.fingerprint());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn test_set_item_is_idempotent(k in key(), v in value()) {
        let once = Dictionary::empty().set_item(k.clone(), v.clone());
        let twice = once.set_item(k, v);
        prop_assert_eq!(once, twice);
    }
}

#[test]
fn test_booleans_encode_to_distinct_bytes() {
    let t = encode(&Value::from(true));
    let f = encode(&Value::from(false));
    assert_eq!(t, b"t");
    assert_eq!(f, b"f");
    assert_eq!(decode(&t).unwrap(), Value::from(true));
    assert_eq!(decode(&f).unwrap(), Value::from(false));
}

#[test]
fn test_out_of_order_keys_are_rejected() {
    assert!(matches!(
        decode(b"du1:bi1eu1:ai2ee"),
        Err(DecodingError::KeyOrderViolation { .. })
    ));
    // text key before binary key
    assert!(matches!(
        decode(b"du1:ai1e1:ai2ee"),
        Err(DecodingError::KeyOrderViolation { .. })
    ));
}

#[test]
fn test_duplicate_keys_are_rejected() {
    assert!(matches!(
        decode(b"du1:ai1eu1:ai2ee"),
        Err(DecodingError::DuplicateKey { .. })
    ));
}

#[test]
fn test_non_canonical_integers_are_rejected() {
    for input in [&b"i-0e"[..], b"i01e", b"ie", b"i+1e"] {
        assert!(
            matches!(decode(input), Err(DecodingError::InvalidInteger { .. })),
            "accepted {:?}",
            String::from_utf8_lossy(input)
        );
    }
}

#[test]
fn test_writer_and_reader_agree() {
    let value = Value::from(sample_dictionary());
    let mut buf = Vec::new();
    encode_to(&value, &mut buf).unwrap();
    assert_eq!(decode_reader(buf.as_slice()).unwrap(), value);
}

#[test]
fn test_deep_nesting_within_default_limit() {
    let value = deep_list(256);
    assert_eq!(decode(&encode(&value)).unwrap(), value);
}

#[test]
fn test_binary_and_text_keys_are_distinct() {
    let dict = Dictionary::empty()
        .set_item("k", 1)
        .set_item(b"k", 2);
    assert_eq!(dict.len(), 2);
    assert_eq!(dict[&Key::from("k")], Value::from(1));
    assert_eq!(dict[&b"k"[..]], Value::from(2));
    assert_eq!(encode(&dict.into()), b"d1:ki2eu1:ki1ee");
}

#[test]
fn test_persistent_updates_leave_originals_untouched() {
    let base = List::from_iter([1, 2, 3]);
    let changed = base.set_item(1, Binary::from(b"x")).unwrap();
    assert_eq!(base[1], Value::from(2));
    assert_eq!(changed[1], Value::from(Binary::from(b"x")));
    assert_eq!(base.remove(0).unwrap().len(), 2);
    assert_eq!(base.len(), 3);
}

#[test]
fn test_typed_access_propagates_with_result_alias() -> bencodex::Result<()> {
    let bytes = encode(&Value::from(sample_dictionary()));
    let dict: Dictionary = decode(&bytes)?.try_into()?;
    let list: List = dict.get_value("list")?;
    assert_eq!(
        list.get_value::<bencodex::Integer>(2)?,
        bencodex::Integer::from(3)
    );
    assert!(dict.get_value::<List>("int").is_err());
    Ok(())
}
