//! Test fixtures and helpers.
//!
//! Sample values shared by integration tests.

use bencodex_core::{Dictionary, List, Value};
use bencodex_serialization::{FromValue, RecordReader, RecordWriter, Result, ToValue};

/// A dictionary exercising every value type and both key kinds.
pub fn sample_dictionary() -> Dictionary {
    Dictionary::empty()
        .set_item("null", Value::Null)
        .set_item("true", true)
        .set_item("false", false)
        .set_item("int", -42)
        .set_item("text", "한국어")
        .set_item(b"binary", &b"\x00\x01\x02"[..])
        .set_item("list", List::from_iter([1, 2, 3]))
        .set_item("dict", Dictionary::empty().set_item(b"k", "v"))
}

/// A list nested `depth` levels deep around a null.
pub fn deep_list(depth: usize) -> Value {
    (0..depth).fold(Value::Null, |inner, _| List::empty().add(inner).into())
}

/// A small record type for serialization tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub name: String,
    pub balance: u64,
    pub tags: Vec<String>,
    pub memo: Option<String>,
}

impl ToValue for Account {
    fn to_value(&self) -> Value {
        RecordWriter::new()
            .field("name", &self.name)
            .field("balance", &self.balance)
            .field("tags", &self.tags)
            .optional_field("memo", &self.memo)
            .finish()
    }
}

impl FromValue for Account {
    fn from_value(value: &Value) -> Result<Self> {
        let reader = RecordReader::new(value)?;
        Ok(Account {
            name: reader.field("name")?,
            balance: reader.field("balance")?,
            tags: reader.field("tags")?,
            memo: reader.optional_field("memo")?,
        })
    }
}

pub fn sample_account() -> Account {
    Account {
        name: "alice".to_string(),
        balance: 1_000,
        tags: vec!["admin".to_string()],
        memo: None,
    }
}
