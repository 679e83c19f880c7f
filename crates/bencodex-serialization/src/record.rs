//! Record-style conversion helpers.
//!
//! Structs that map to dictionaries implement [`ToValue`] with a
//! [`RecordWriter`] and [`FromValue`] with a [`RecordReader`]:
//!
//! ```
//! use bencodex_serialization::{FromValue, RecordReader, RecordWriter, Result, ToValue};
//! use bencodex_core::Value;
//!
//! #[derive(Debug, PartialEq)]
//! struct Account {
//!     name: String,
//!     balance: u64,
//!     memo: Option<String>,
//! }
//!
//! impl ToValue for Account {
//!     fn to_value(&self) -> Value {
//!         RecordWriter::new()
//!             .field("name", &self.name)
//!             .field("balance", &self.balance)
//!             .optional_field("memo", &self.memo)
//!             .finish()
//!     }
//! }
//!
//! impl FromValue for Account {
//!     fn from_value(value: &Value) -> Result<Self> {
//!         let reader = RecordReader::new(value)?;
//!         Ok(Account {
//!             name: reader.field("name")?,
//!             balance: reader.field("balance")?,
//!             memo: reader.optional_field("memo")?,
//!         })
//!     }
//! }
//!
//! let account = Account { name: "alice".into(), balance: 10, memo: None };
//! assert_eq!(Account::from_value(&account.to_value()).unwrap(), account);
//! ```

use bencodex_core::{BencodexError, Dictionary, Value, ValueType};

use crate::convert::{FromValue, ToValue};
use crate::error::{Result, SerializationError};
use crate::settings::SerializerSettings;

/// Builds a dictionary from named fields.
#[derive(Debug, Default)]
pub struct RecordWriter {
    settings: SerializerSettings,
    dict: Dictionary,
}

impl RecordWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: SerializerSettings) -> Self {
        Self {
            settings,
            dict: Dictionary::empty(),
        }
    }

    pub fn field<T: ToValue + ?Sized>(mut self, name: &str, value: &T) -> Self {
        let key = self.settings.key_convention.key(name);
        self.dict = self.dict.set_item(key, value.to_value());
        self
    }

    /// Like [`field`](Self::field), but `None` leaves the key out entirely.
    pub fn optional_field<T: ToValue>(self, name: &str, value: &Option<T>) -> Self {
        match value {
            Some(v) => self.field(name, v),
            None => self,
        }
    }

    pub fn finish(self) -> Value {
        Value::Dictionary(self.dict)
    }
}

/// Reads named fields out of a dictionary.
#[derive(Debug)]
pub struct RecordReader<'a> {
    settings: SerializerSettings,
    dict: &'a Dictionary,
}

impl<'a> RecordReader<'a> {
    pub fn new(value: &'a Value) -> Result<Self> {
        Self::with_settings(value, SerializerSettings::default())
    }

    pub fn with_settings(value: &'a Value, settings: SerializerSettings) -> Result<Self> {
        let dict = value.as_dictionary().ok_or(BencodexError::TypeMismatch {
            expected: ValueType::Dictionary,
            actual: value.value_type(),
        })?;
        Ok(Self { settings, dict })
    }

    fn lookup(&self, name: &str) -> Option<&'a Value> {
        self.dict.get(self.settings.key_convention.key(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    pub fn field<T: FromValue>(&self, name: &str) -> Result<T> {
        let value = self
            .lookup(name)
            .ok_or_else(|| SerializationError::MissingField(name.to_string()))?;
        T::from_value(value).map_err(|e| e.in_field(name))
    }

    /// A missing key and an explicit null both read as `None`.
    pub fn optional_field<T: FromValue>(&self, name: &str) -> Result<Option<T>> {
        match self.lookup(name) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => T::from_value(value).map(Some).map_err(|e| e.in_field(name)),
        }
    }
}
