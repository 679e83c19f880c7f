//! Compile-time conversion traits.
//!
//! Each Rust type states how it maps onto a [`Value`] by implementing
//! [`ToValue`] and [`FromValue`]. There is no runtime converter lookup.
//!
//! `Option<T>` maps `None` to null. `Vec<T>` is a list, so `Vec<u8>` is a
//! list of integers; use [`Bytes`] for binary payloads.

use bencodex_core::{
    BencodexError, Binary, Dictionary, Integer, Key, List, Null, Text, Value, ValueType,
};
use bytes::Bytes;
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use std::collections::BTreeMap;

use crate::error::{Result, SerializationError};

/// Conversion into a Bencodex value.
pub trait ToValue {
    fn to_value(&self) -> Value;
}

/// Conversion out of a Bencodex value.
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Result<Self>;
}

fn mismatch(expected: ValueType, value: &Value) -> SerializationError {
    BencodexError::TypeMismatch {
        expected,
        actual: value.value_type(),
    }
    .into()
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl FromValue for Value {
    fn from_value(value: &Value) -> Result<Self> {
        Ok(value.clone())
    }
}

macro_rules! variant_conversions {
    ($($t:ty),*) => {
        $(
            impl ToValue for $t {
                fn to_value(&self) -> Value {
                    Value::from(self.clone())
                }
            }

            impl FromValue for $t {
                fn from_value(value: &Value) -> Result<Self> {
                    Ok(<$t>::try_from(value)?)
                }
            }
        )*
    };
}

variant_conversions!(Null, bool, Integer, Binary, Text, List, Dictionary);

macro_rules! primitive_integers {
    ($($t:ty => $to:ident),*) => {
        $(
            impl ToValue for $t {
                fn to_value(&self) -> Value {
                    Value::from(*self)
                }
            }

            impl FromValue for $t {
                fn from_value(value: &Value) -> Result<Self> {
                    let integer = value
                        .as_integer()
                        .ok_or_else(|| mismatch(ValueType::Integer, value))?;
                    integer.value().$to().ok_or_else(|| SerializationError::OutOfRange {
                        value: integer.to_string(),
                        target: stringify!($t),
                    })
                }
            }
        )*
    };
}

primitive_integers!(
    i8 => to_i8,
    i16 => to_i16,
    i32 => to_i32,
    i64 => to_i64,
    i128 => to_i128,
    isize => to_isize,
    u8 => to_u8,
    u16 => to_u16,
    u32 => to_u32,
    u64 => to_u64,
    u128 => to_u128,
    usize => to_usize
);

impl ToValue for BigInt {
    fn to_value(&self) -> Value {
        Value::from(self.clone())
    }
}

impl FromValue for BigInt {
    fn from_value(value: &Value) -> Result<Self> {
        Ok(Integer::try_from(value)?.into_inner())
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::from(self)
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::from(self.as_str())
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| mismatch(ValueType::Text, value))
    }
}

impl ToValue for Bytes {
    fn to_value(&self) -> Value {
        Value::from(self.clone())
    }
}

impl FromValue for Bytes {
    fn from_value(value: &Value) -> Result<Self> {
        value
            .as_binary()
            .map(Binary::to_bytes)
            .ok_or_else(|| mismatch(ValueType::Binary, value))
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: &Value) -> Result<Self> {
        let list = value
            .as_list()
            .ok_or_else(|| mismatch(ValueType::List, value))?;
        list.iter()
            .enumerate()
            .map(|(i, item)| {
                T::from_value(item).map_err(|e| e.in_field(&i.to_string()))
            })
            .collect()
    }
}

impl<T: ToValue> ToValue for BTreeMap<String, T> {
    fn to_value(&self) -> Value {
        Value::Dictionary(
            self.iter()
                .map(|(k, v)| (Key::from(k.as_str()), v.to_value()))
                .collect(),
        )
    }
}

impl<T: FromValue> FromValue for BTreeMap<String, T> {
    fn from_value(value: &Value) -> Result<Self> {
        let dict = value
            .as_dictionary()
            .ok_or_else(|| mismatch(ValueType::Dictionary, value))?;
        dict.iter()
            .map(|(key, item)| match key {
                Key::Text(text) => T::from_value(item)
                    .map(|v| (text.as_str().to_string(), v))
                    .map_err(|e| e.in_field(text.as_str())),
                Key::Binary(_) => Err(mismatch(ValueType::Text, &Value::from(key.clone()))),
            })
            .collect()
    }
}

impl<T: ToValue> ToValue for BTreeMap<Bytes, T> {
    fn to_value(&self) -> Value {
        Value::Dictionary(
            self.iter()
                .map(|(k, v)| (Key::from(k.clone()), v.to_value()))
                .collect(),
        )
    }
}

impl<T: FromValue> FromValue for BTreeMap<Bytes, T> {
    fn from_value(value: &Value) -> Result<Self> {
        let dict = value
            .as_dictionary()
            .ok_or_else(|| mismatch(ValueType::Dictionary, value))?;
        dict.iter()
            .map(|(key, item)| match key {
                Key::Binary(binary) => T::from_value(item)
                    .map(|v| (binary.to_bytes(), v))
                    .map_err(|e| e.in_field(&key.inspection())),
                Key::Text(_) => Err(mismatch(ValueType::Binary, &Value::from(key.clone()))),
            })
            .collect()
    }
}
