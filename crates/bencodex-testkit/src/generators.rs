//! Proptest generators for property-based testing.

use bytes::Bytes;
use num_bigint::BigInt;
use proptest::prelude::*;

use bencodex_core::{Binary, Dictionary, Integer, Key, List, Text, Value};

/// Generate an integer, mostly small, sometimes far beyond 64 bits.
pub fn integer() -> impl Strategy<Value = Integer> {
    prop_oneof![
        4 => any::<i64>().prop_map(Integer::from),
        1 => (any::<bool>(), prop::collection::vec(any::<u32>(), 1..6)).prop_map(|(neg, digits)| {
            let sign = if neg {
                num_bigint::Sign::Minus
            } else {
                num_bigint::Sign::Plus
            };
            Integer::from(BigInt::new(sign, digits))
        }),
    ]
}

/// Generate binary payloads of up to `max_len` bytes.
pub fn binary(max_len: usize) -> impl Strategy<Value = Binary> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
        .prop_map(|b| Binary::from(Bytes::from(b)))
}

/// Generate text, including multi-byte characters.
pub fn text() -> impl Strategy<Value = Text> {
    ".{0,24}".prop_map(Text::from)
}

/// Generate a dictionary key of either kind.
pub fn key() -> impl Strategy<Value = Key> {
    prop_oneof![
        binary(12).prop_map(Key::Binary),
        text().prop_map(Key::Text),
    ]
}

/// Generate a scalar value.
pub fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Boolean),
        integer().prop_map(Value::Integer),
        binary(48).prop_map(Value::Binary),
        text().prop_map(Value::Text),
    ]
}

/// Generate an arbitrary value tree.
pub fn value() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8)
                .prop_map(|items| Value::List(List::new(items))),
            prop::collection::vec((key(), inner), 0..8).prop_map(|entries| {
                Value::Dictionary(entries.into_iter().collect::<Dictionary>())
            }),
        ]
    })
}

/// A value tree usable with `proptest!`'s `name: Type` syntax.
#[derive(Debug, Clone)]
pub struct ArbitraryValue(pub Value);

impl Arbitrary for ArbitraryValue {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        value().prop_map(ArbitraryValue).boxed()
    }
}
