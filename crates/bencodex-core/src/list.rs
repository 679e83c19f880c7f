//! Immutable ordered lists.

use std::hash::{Hash, Hasher};
use std::ops::Index;
use std::sync::{Arc, OnceLock};
use std::{fmt, slice};

use crate::error::BencodexError;
use crate::fingerprint::{ContainerDigest, Fingerprint};
use crate::inspect;
use crate::types::ValueType;
use crate::value::Value;

/// An ordered sequence of values, encoded as `l<items>e`.
///
/// Lists are immutable and cheap to clone: the elements live behind an
/// `Arc`. [`List::add`], [`List::set_item`] and [`List::remove`] return a
/// new list and leave `self` untouched. Encoding length and fingerprint are
/// computed once on first use and cached.
#[derive(Clone)]
pub struct List {
    inner: Arc<ListInner>,
}

struct ListInner {
    items: Vec<Value>,
    encoding_length: OnceLock<u64>,
    fingerprint: OnceLock<Fingerprint>,
}

impl List {
    /// The empty list (`le`).
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn new(items: Vec<Value>) -> Self {
        Self {
            inner: Arc::new(ListInner {
                items,
                encoding_length: OnceLock::new(),
                fingerprint: OnceLock::new(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.inner.items.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.inner.items.iter()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.inner.items
    }

    /// A new list with `value` appended.
    pub fn add(&self, value: impl Into<Value>) -> Self {
        let mut items = Vec::with_capacity(self.len() + 1);
        items.extend_from_slice(&self.inner.items);
        items.push(value.into());
        Self::new(items)
    }

    /// A new list with the element at `index` replaced.
    pub fn set_item(&self, index: usize, value: impl Into<Value>) -> Result<Self, BencodexError> {
        self.check_index(index)?;
        let mut items = self.inner.items.clone();
        items[index] = value.into();
        Ok(Self::new(items))
    }

    /// A new list without the element at `index`.
    pub fn remove(&self, index: usize) -> Result<Self, BencodexError> {
        self.check_index(index)?;
        let mut items = self.inner.items.clone();
        items.remove(index);
        Ok(Self::new(items))
    }

    /// Typed access to the element at `index`.
    pub fn get_value<'a, T>(&'a self, index: usize) -> Result<T, BencodexError>
    where
        T: TryFrom<&'a Value, Error = BencodexError>,
    {
        self.check_index(index)?;
        T::try_from(&self.inner.items[index])
    }

    fn check_index(&self, index: usize) -> Result<(), BencodexError> {
        if index >= self.len() {
            return Err(BencodexError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        Ok(())
    }

    pub fn encoding_length(&self) -> u64 {
        *self
            .inner
            .encoding_length
            .get_or_init(|| 2 + self.iter().map(Value::encoding_length).sum::<u64>())
    }

    pub fn fingerprint(&self) -> Fingerprint {
        self.inner
            .fingerprint
            .get_or_init(|| {
                let mut digest = ContainerDigest::new();
                for item in self.iter() {
                    digest.push(&item.fingerprint());
                }
                digest.finish(ValueType::List, self.encoding_length())
            })
            .clone()
    }

    pub(crate) fn cached_fingerprint(&self) -> Option<&Fingerprint> {
        self.inner.fingerprint.get()
    }

    pub fn inspection(&self) -> String {
        match self.as_slice() {
            [] => "[]".to_string(),
            [single] if !single.is_container() => format!("[{}]", single.inspection()),
            items => {
                let mut out = String::from("[\n");
                for item in items {
                    inspect::push_indented(&mut out, &item.inspection());
                    out.push_str(",\n");
                }
                out.push(']');
                out
            }
        }
    }
}

impl Default for List {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.inner, &other.inner) {
            return true;
        }
        if self.len() != other.len() || self.encoding_length() != other.encoding_length() {
            return false;
        }
        if let (Some(a), Some(b)) = (self.cached_fingerprint(), other.cached_fingerprint()) {
            if a != b {
                return false;
            }
        }
        self.inner.items == other.inner.items
    }
}

impl Eq for List {}

impl Hash for List {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.items.hash(state);
    }
}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inspection())
    }
}

impl Index<usize> for List {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.inner.items[index]
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Vec<Value>> for List {
    fn from(items: Vec<Value>) -> Self {
        Self::new(items)
    }
}

impl<V: Into<Value>> FromIterator<V> for List {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Binary, Dictionary, Integer, Text};

    fn two() -> List {
        List::from_iter(["hello", "world"])
    }

    fn one() -> List {
        List::new(vec![Value::Null])
    }

    fn nest() -> List {
        List::new(vec![
            Value::Null,
            List::empty().into(),
            one().into(),
            two().into(),
        ])
    }

    #[test]
    fn test_encoding_length() {
        assert_eq!(List::empty().encoding_length(), 2);
        assert_eq!(one().encoding_length(), 3);
        assert_eq!(two().encoding_length(), 18);
        assert_eq!(nest().encoding_length(), 26);
    }

    #[test]
    fn test_fingerprint_golden() {
        assert_eq!(
            List::empty().fingerprint(),
            Fingerprint::bare(ValueType::List, 2)
        );
        assert_eq!(
            one().fingerprint().to_hex(),
            "ae7fca60943c2ef2f6cf5420477da41acf29b01d"
        );
        assert_eq!(
            two().fingerprint().to_hex(),
            "22852139f287a01cdb803fd86ed70e4c4d121254"
        );
        let nested = nest().fingerprint();
        assert_eq!(nested.encoding_length(), 26);
        assert_eq!(nested.to_hex(), "24caa983a5225522ca798be3b31a1abecdb36fe5");
    }

    #[test]
    fn test_inspection() {
        assert_eq!(List::empty().inspection(), "[]");
        assert_eq!(one().inspection(), "[null]");
        assert_eq!(two().inspection(), "[\n  \"hello\",\n  \"world\",\n]");
        assert_eq!(
            nest().inspection(),
            "[\n  null,\n  [],\n  [null],\n  [\n    \"hello\",\n    \"world\",\n  ],\n]"
        );
        assert_eq!(
            List::new(vec![List::empty().into()]).inspection(),
            "[\n  [],\n]"
        );
        assert_eq!(
            List::new(vec![Dictionary::empty().into()]).inspection(),
            "[\n  {},\n]"
        );
    }

    #[test]
    fn test_add_is_persistent() {
        let list = List::empty()
            .add("foo")
            .add(Binary::from(b"bar"))
            .add(0xbeef)
            .add(true)
            .add(List::empty())
            .add(Dictionary::empty());

        assert_eq!(list.len(), 6);
        assert_eq!(list[0], Value::Text(Text::from("foo")));
        assert_eq!(list[1], Value::Binary(Binary::from(b"bar")));
        assert_eq!(list[2], Value::Integer(Integer::from(0xbeef)));
        assert_eq!(list[3], Value::Boolean(true));
        assert_eq!(list[4], Value::List(List::empty()));
        assert_eq!(list[5], Value::Dictionary(Dictionary::empty()));

        let base = List::empty().add(1);
        let extended = base.add(2);
        assert_eq!(base.len(), 1);
        assert_eq!(extended.len(), 2);
    }

    #[test]
    fn test_set_item_and_remove() {
        let list = two().set_item(1, "there").unwrap();
        assert_eq!(list.get_value::<Text>(1).unwrap().as_str(), "there");
        assert_eq!(two().get_value::<Text>(1).unwrap().as_str(), "world");

        let removed = list.remove(0).unwrap();
        assert_eq!(removed.len(), 1);

        assert!(matches!(
            two().set_item(2, 1),
            Err(BencodexError::IndexOutOfRange { index: 2, len: 2 })
        ));
        assert!(List::empty().remove(0).is_err());
    }

    #[test]
    fn test_get_value_type_mismatch() {
        let err = two().get_value::<Integer>(0).unwrap_err();
        assert!(matches!(
            err,
            BencodexError::TypeMismatch {
                expected: ValueType::Integer,
                actual: ValueType::Text
            }
        ));
    }

    #[test]
    fn test_equality_is_structural() {
        assert_eq!(two(), List::from_iter(["hello", "world"]));
        assert_ne!(two(), List::from_iter(["world", "hello"]));
        assert_ne!(one(), List::empty());

        // Cached fingerprints on one side must not change the answer.
        let a = two();
        let _ = a.fingerprint();
        assert_eq!(a, two());
    }
}
