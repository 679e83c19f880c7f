//! Immutable dictionaries kept in canonical key order.

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;
use std::sync::{Arc, OnceLock};

use crate::error::BencodexError;
use crate::fingerprint::{ContainerDigest, Fingerprint};
use crate::inspect;
use crate::key::Key;
use crate::scalar::{Binary, Text};
use crate::types::ValueType;
use crate::value::Value;

/// A mapping from [`Key`] to [`Value`], encoded as `d<key><value>...e`.
///
/// Entries are stored in a `BTreeMap` ordered by [`Key`]'s canonical order,
/// so iteration and encoding never depend on insertion order. Like
/// [`List`](crate::List), dictionaries are immutable and every update
/// returns a new dictionary.
#[derive(Clone)]
pub struct Dictionary {
    inner: Arc<DictionaryInner>,
}

struct DictionaryInner {
    entries: BTreeMap<Key, Value>,
    encoding_length: OnceLock<u64>,
    fingerprint: OnceLock<Fingerprint>,
}

impl Dictionary {
    /// The empty dictionary (`de`).
    pub fn empty() -> Self {
        Self::from_map(BTreeMap::new())
    }

    fn from_map(entries: BTreeMap<Key, Value>) -> Self {
        Self {
            inner: Arc::new(DictionaryInner {
                entries,
                encoding_length: OnceLock::new(),
                fingerprint: OnceLock::new(),
            }),
        }
    }

    /// Build from pairs, failing on the first repeated key.
    pub fn try_from_pairs<I, K, V>(pairs: I) -> Result<Self, BencodexError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Key>,
        V: Into<Value>,
    {
        let mut entries = BTreeMap::new();
        for (key, value) in pairs {
            match entries.entry(key.into()) {
                btree_map::Entry::Occupied(slot) => {
                    return Err(BencodexError::DuplicateKey(slot.key().inspection()));
                }
                btree_map::Entry::Vacant(slot) => {
                    slot.insert(value.into());
                }
            }
        }
        Ok(Self::from_map(entries))
    }

    /// Build from entries the decoder has already checked for order.
    pub(crate) fn from_sorted(entries: Vec<(Key, Value)>) -> Self {
        Self::from_map(entries.into_iter().collect())
    }

    pub fn len(&self) -> usize {
        self.inner.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.entries.is_empty()
    }

    pub fn get(&self, key: impl Into<Key>) -> Option<&Value> {
        self.inner.entries.get(&key.into())
    }

    pub fn contains_key(&self, key: impl Into<Key>) -> bool {
        self.inner.entries.contains_key(&key.into())
    }

    /// Entries in canonical key order.
    pub fn iter(&self) -> btree_map::Iter<'_, Key, Value> {
        self.inner.entries.iter()
    }

    pub fn keys(&self) -> btree_map::Keys<'_, Key, Value> {
        self.inner.entries.keys()
    }

    pub fn values(&self) -> btree_map::Values<'_, Key, Value> {
        self.inner.entries.values()
    }

    /// A new dictionary with `key` bound to `value`.
    ///
    /// Fails with [`BencodexError::DuplicateKey`] if `key` is present; use
    /// [`Dictionary::set_item`] to overwrite.
    pub fn add(&self, key: impl Into<Key>, value: impl Into<Value>) -> Result<Self, BencodexError> {
        let key = key.into();
        if self.inner.entries.contains_key(&key) {
            return Err(BencodexError::DuplicateKey(key.inspection()));
        }
        let mut entries = self.inner.entries.clone();
        entries.insert(key, value.into());
        Ok(Self::from_map(entries))
    }

    /// A new dictionary with `key` bound to `value`, replacing any old binding.
    pub fn set_item(&self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        let mut entries = self.inner.entries.clone();
        entries.insert(key.into(), value.into());
        Self::from_map(entries)
    }

    /// A new dictionary without `key`. Absent keys are not an error.
    pub fn remove(&self, key: impl Into<Key>) -> Self {
        let key = key.into();
        if !self.inner.entries.contains_key(&key) {
            return self.clone();
        }
        let mut entries = self.inner.entries.clone();
        entries.remove(&key);
        Self::from_map(entries)
    }

    /// Typed access to the value under `key`.
    pub fn get_value<'a, T>(&'a self, key: impl Into<Key>) -> Result<T, BencodexError>
    where
        T: TryFrom<&'a Value, Error = BencodexError>,
    {
        let key = key.into();
        match self.inner.entries.get(&key) {
            Some(value) => T::try_from(value),
            None => Err(BencodexError::KeyNotFound(key.inspection())),
        }
    }

    pub fn encoding_length(&self) -> u64 {
        *self.inner.encoding_length.get_or_init(|| {
            2 + self
                .iter()
                .map(|(k, v)| k.encoding_length() + v.encoding_length())
                .sum::<u64>()
        })
    }

    pub fn fingerprint(&self) -> Fingerprint {
        self.inner
            .fingerprint
            .get_or_init(|| {
                let mut digest = ContainerDigest::new();
                for (key, value) in self.iter() {
                    digest.push(&key.fingerprint());
                    digest.push(&value.fingerprint());
                }
                digest.finish(ValueType::Dictionary, self.encoding_length())
            })
            .clone()
    }

    pub(crate) fn cached_fingerprint(&self) -> Option<&Fingerprint> {
        self.inner.fingerprint.get()
    }

    pub fn inspection(&self) -> String {
        if self.is_empty() {
            return "{}".to_string();
        }
        let mut out = String::from("{\n");
        for (key, value) in self.iter() {
            let entry = format!("{}: {}", key.inspection(), value.inspection());
            inspect::push_indented(&mut out, &entry);
            out.push_str(",\n");
        }
        out.push('}');
        out
    }

    fn lookup(&self, key: &Key) -> &Value {
        match self.inner.entries.get(key) {
            Some(value) => value,
            None => panic!("key not found: {}", key),
        }
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for Dictionary {
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
        self.inner.entries == other.inner.entries
    }
}

impl Eq for Dictionary {}

impl Hash for Dictionary {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.entries.hash(state);
    }
}

impl fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inspection())
    }
}

impl Index<&Key> for Dictionary {
    type Output = Value;

    fn index(&self, key: &Key) -> &Value {
        self.lookup(key)
    }
}

impl Index<&str> for Dictionary {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        self.lookup(&Key::Text(Text::from(key)))
    }
}

impl Index<&[u8]> for Dictionary {
    type Output = Value;

    fn index(&self, key: &[u8]) -> &Value {
        self.lookup(&Key::Binary(Binary::from(key)))
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = (&'a Key, &'a Value);
    type IntoIter = btree_map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Later pairs overwrite earlier ones with the same key.
impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_map(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<BTreeMap<Key, Value>> for Dictionary {
    fn from(entries: BTreeMap<Key, Value>) -> Self {
        Self::from_map(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Integer, List, Null};

    fn text_key() -> Dictionary {
        Dictionary::empty().set_item("foo", "bar")
    }

    fn binary_key() -> Dictionary {
        Dictionary::empty().set_item(b"foo", "bar")
    }

    fn mixed_keys() -> Dictionary {
        Dictionary::empty()
            .add("stringKey", "string")
            .unwrap()
            .add(b"\x00", "byte")
            .unwrap()
    }

    #[test]
    fn test_encoding_length() {
        assert_eq!(Dictionary::empty().encoding_length(), 2);
        assert_eq!(text_key().encoding_length(), 14);
        assert_eq!(binary_key().encoding_length(), 13);
        assert_eq!(mixed_keys().encoding_length(), 33);
    }

    #[test]
    fn test_fingerprint_golden() {
        assert_eq!(
            Dictionary::empty().fingerprint(),
            Fingerprint::bare(ValueType::Dictionary, 2)
        );
        assert_eq!(
            text_key().fingerprint(),
            Fingerprint::new(
                ValueType::Dictionary,
                14,
                hex::decode("c2f36fbae8a22c841eec717a6e0cec3975b0ee44").unwrap()
            )
        );
        assert_eq!(
            binary_key().fingerprint().to_hex(),
            "4f7a9b59a6b76a46d48eb3d7d60babe31eb5a901"
        );
        assert_eq!(
            mixed_keys().fingerprint().to_hex(),
            "d7c803acb064e64d4022d2e10895c9410b909e1b"
        );
    }

    #[test]
    fn test_canonical_iteration_order() {
        let keys: Vec<Key> = mixed_keys().keys().cloned().collect();
        assert_eq!(keys, vec![Key::from(b"\x00"), Key::from("stringKey")]);
    }

    #[test]
    fn test_insertion_order_does_not_matter() {
        let a = Dictionary::try_from_pairs([(b"a", 1), (b"b", 2), (b"c", 3)]).unwrap();
        let b = Dictionary::try_from_pairs([(b"b", 2), (b"c", 3), (b"a", 1)]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.fingerprint(), b.fingerprint());

        let c = Dictionary::try_from_pairs([(b"a", 2), (b"b", 2), (b"c", 3)]).unwrap();
        assert_ne!(a, c);
        let d = Dictionary::try_from_pairs([(b"a", 1), (b"b", 2), (b"d", 3)]).unwrap();
        assert_ne!(a, d);
    }

    #[test]
    fn test_add_rejects_duplicate() {
        let dict = text_key();
        let err = dict.add("foo", "baz").unwrap_err();
        assert!(matches!(err, BencodexError::DuplicateKey(ref k) if k == "\"foo\""));
        // A binary key with the same bytes is a different key.
        assert!(dict.add(b"foo", "baz").is_ok());
    }

    #[test]
    fn test_try_from_pairs_rejects_duplicate() {
        let result = Dictionary::try_from_pairs([("a", 1), ("a", 2)]);
        assert!(matches!(result, Err(BencodexError::DuplicateKey(_))));
    }

    #[test]
    fn test_set_item_replaces_and_is_idempotent() {
        let once = Dictionary::empty().set_item("k", 1);
        let twice = once.set_item("k", 1);
        assert_eq!(once, twice);

        let replaced = once.set_item("k", 2);
        assert_eq!(
            replaced.get_value::<Integer>("k").unwrap(),
            Integer::from(2)
        );
        assert_eq!(once.get_value::<Integer>("k").unwrap(), Integer::from(1));
    }

    #[test]
    fn test_remove() {
        let dict = mixed_keys().remove("stringKey");
        assert_eq!(dict.len(), 1);
        assert!(!dict.contains_key("stringKey"));
        assert_eq!(dict.remove("absent"), dict);
    }

    #[test]
    fn test_contains_key() {
        let dict = mixed_keys();
        assert!(dict.contains_key("stringKey"));
        assert!(dict.contains_key(&Key::from("stringKey")));
        assert!(dict.contains_key(b"\x00"));
        assert!(!dict.contains_key("invalidKey"));
        assert!(!dict.contains_key(b"\x01"));
    }

    #[test]
    fn test_get_value_mismatch_for_every_pair() {
        let dict = Dictionary::empty()
            .set_item("text", "foo")
            .set_item("integer", 1337)
            .set_item("binary", Binary::from(vec![1u8, 2, 3, 4]))
            .set_item("boolean", true)
            .set_item(
                "list",
                List::from_iter(vec![Value::from("bar"), Value::from(1337)]),
            )
            .set_item("null", Null);

        assert_eq!(dict.get_value::<Text>("text").unwrap().as_str(), "foo");
        assert_eq!(
            dict.get_value::<Integer>("integer").unwrap(),
            Integer::from(1337)
        );
        assert_eq!(
            dict.get_value::<Binary>("binary").unwrap().as_bytes(),
            &[1, 2, 3, 4]
        );
        assert!(dict.get_value::<bool>("boolean").unwrap());
        assert_eq!(dict.get_value::<List>("list").unwrap().len(), 2);
        assert_eq!(dict.get_value::<Null>("null").unwrap(), Null);

        let keys = ["text", "integer", "binary", "boolean", "list", "null"];
        for key in keys {
            let actual = dict[key].value_type();
            let results = [
                (ValueType::Text, dict.get_value::<Text>(key).is_ok()),
                (ValueType::Integer, dict.get_value::<Integer>(key).is_ok()),
                (ValueType::Binary, dict.get_value::<Binary>(key).is_ok()),
                (ValueType::Boolean, dict.get_value::<bool>(key).is_ok()),
                (ValueType::List, dict.get_value::<List>(key).is_ok()),
                (ValueType::Dictionary, dict.get_value::<Dictionary>(key).is_ok()),
                (ValueType::Null, dict.get_value::<Null>(key).is_ok()),
            ];
            for (expected, ok) in results {
                assert_eq!(ok, expected == actual, "key {key} as {expected}");
            }
        }

        assert!(matches!(
            dict.get_value::<Integer>("text"),
            Err(BencodexError::TypeMismatch { .. })
        ));
        assert!(matches!(
            dict.get_value::<Integer>("missing"),
            Err(BencodexError::KeyNotFound(_))
        ));
    }

    #[test]
    fn test_index() {
        let dict = mixed_keys();
        assert_eq!(dict["stringKey"], Value::from("string"));
        assert_eq!(dict[&b"\x00"[..]], Value::from("byte"));
        assert_eq!(dict[&Key::from("stringKey")], Value::from("string"));
    }

    #[test]
    #[should_panic(expected = "key not found")]
    fn test_index_missing_panics() {
        let _ = &text_key()["nope"];
    }

    #[test]
    fn test_inspection() {
        assert_eq!(Dictionary::empty().inspection(), "{}");
        assert_eq!(text_key().inspection(), "{\n  \"foo\": \"bar\",\n}");
        assert_eq!(
            binary_key().inspection(),
            "{\n  b\"\\x66\\x6f\\x6f\": \"bar\",\n}"
        );
        assert_eq!(
            text_key().set_item("baz", text_key()).inspection(),
            "{\n  \"baz\": {\n    \"foo\": \"bar\",\n  },\n  \"foo\": \"bar\",\n}"
        );
        assert_eq!(text_key().to_string(), text_key().inspection());
    }
}
