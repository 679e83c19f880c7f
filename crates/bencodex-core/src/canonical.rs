//! Canonical Bencodex encoding.
//!
//! | Type | Format | Example |
//! |------|--------|---------|
//! | Null | `n` | `n` |
//! | Boolean | `t` / `f` | `t` |
//! | Integer | `i<decimal>e` | `i-42e` |
//! | Binary | `<len>:<bytes>` | `3:foo` |
//! | Text | `u<utf8 len>:<utf8>` | `u3:foo` |
//! | List | `l<items>e` | `lnte` |
//! | Dictionary | `d<key><value>...e` | `du3:foou3:bare` |
//!
//! Each value has exactly one encoding: integers carry no leading zeros or
//! `-0`, lengths carry no leading zeros, and dictionary keys are emitted in
//! canonical key order (binary keys first, then text keys, each sorted
//! byte-wise). The same value tree therefore always produces the same bytes.

use std::borrow::Cow;
use std::collections::btree_map;
use std::io::{self, Write};
use std::slice;

use crate::key::Key;
use crate::value::Value;

/// Tag bytes.
pub mod tags {
    pub const NULL: u8 = b'n';
    pub const TRUE: u8 = b't';
    pub const FALSE: u8 = b'f';
    pub const INTEGER: u8 = b'i';
    pub const TEXT: u8 = b'u';
    pub const LIST: u8 = b'l';
    pub const DICTIONARY: u8 = b'd';
    pub const END: u8 = b'e';
    pub const SEPARATOR: u8 = b':';
    pub const MINUS: u8 = b'-';
}

static NULL: [u8; 1] = [tags::NULL];
static TRUE: [u8; 1] = [tags::TRUE];
static FALSE: [u8; 1] = [tags::FALSE];
static LIST: [u8; 1] = [tags::LIST];
static DICTIONARY: [u8; 1] = [tags::DICTIONARY];
static END: [u8; 1] = [tags::END];

/// Encode a value to its canonical bytes.
///
/// # Examples
///
/// ```
/// use bencodex_core::{encode, List, Value};
///
/// assert_eq!(encode(&Value::Null), b"n");
/// assert_eq!(encode(&Value::from(-42)), b"i-42e");
/// assert_eq!(encode(&Value::from("foo")), b"u3:foo");
/// assert_eq!(encode(&Value::from(&b"foo"[..])), b"3:foo");
/// assert_eq!(encode(&List::empty().add(true).into()), b"lte");
/// ```
pub fn encode(value: &Value) -> Vec<u8> {
    let mut buf = Vec::with_capacity(value.encoding_length() as usize);
    for chunk in encode_into_chunks(value) {
        buf.extend_from_slice(&chunk);
    }
    buf
}

/// Stream the canonical encoding into a writer.
pub fn encode_to<W: Write>(value: &Value, writer: &mut W) -> io::Result<()> {
    for chunk in encode_into_chunks(value) {
        writer.write_all(&chunk)?;
    }
    Ok(())
}

/// Produce the canonical encoding incrementally.
///
/// Raw binary and text payloads are yielded as borrowed slices, so large
/// payloads are never copied. Concatenating the chunks gives exactly
/// [`encode`]'s output.
pub fn encode_into_chunks(value: &Value) -> Chunks<'_> {
    Chunks {
        stack: vec![Frame::Value(value)],
    }
}

/// Iterator returned by [`encode_into_chunks`].
pub struct Chunks<'a> {
    stack: Vec<Frame<'a>>,
}

enum Frame<'a> {
    Value(&'a Value),
    Key(&'a Key),
    Raw(&'a [u8]),
    List(slice::Iter<'a, Value>),
    Dictionary(btree_map::Iter<'a, Key, Value>),
}

impl<'a> Chunks<'a> {
    fn open(&mut self, value: &'a Value) -> Cow<'a, [u8]> {
        match value {
            Value::Null => Cow::Borrowed(&NULL),
            Value::Boolean(true) => Cow::Borrowed(&TRUE),
            Value::Boolean(false) => Cow::Borrowed(&FALSE),
            Value::Integer(i) => Cow::Owned(format!("i{}e", i.encoded_body()).into_bytes()),
            Value::Binary(b) => self.length_prefixed(None, b.as_bytes()),
            Value::Text(t) => self.length_prefixed(Some(tags::TEXT), t.as_str().as_bytes()),
            Value::List(l) => {
                self.stack.push(Frame::List(l.iter()));
                Cow::Borrowed(&LIST)
            }
            Value::Dictionary(d) => {
                self.stack.push(Frame::Dictionary(d.iter()));
                Cow::Borrowed(&DICTIONARY)
            }
        }
    }

    fn open_key(&mut self, key: &'a Key) -> Cow<'a, [u8]> {
        match key {
            Key::Binary(b) => self.length_prefixed(None, b.as_bytes()),
            Key::Text(t) => self.length_prefixed(Some(tags::TEXT), t.as_str().as_bytes()),
        }
    }

    fn length_prefixed(&mut self, tag: Option<u8>, payload: &'a [u8]) -> Cow<'a, [u8]> {
        if !payload.is_empty() {
            self.stack.push(Frame::Raw(payload));
        }
        let mut prefix = Vec::with_capacity(22);
        if let Some(tag) = tag {
            prefix.push(tag);
        }
        prefix.extend_from_slice(payload.len().to_string().as_bytes());
        prefix.push(tags::SEPARATOR);
        Cow::Owned(prefix)
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Cow<'a, [u8]>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.stack.pop()? {
                Frame::Value(value) => return Some(self.open(value)),
                Frame::Key(key) => return Some(self.open_key(key)),
                Frame::Raw(bytes) => return Some(Cow::Borrowed(bytes)),
                Frame::List(mut items) => match items.next() {
                    Some(item) => {
                        self.stack.push(Frame::List(items));
                        self.stack.push(Frame::Value(item));
                    }
                    None => return Some(Cow::Borrowed(&END)),
                },
                Frame::Dictionary(mut entries) => match entries.next() {
                    Some((key, value)) => {
                        self.stack.push(Frame::Dictionary(entries));
                        self.stack.push(Frame::Value(value));
                        self.stack.push(Frame::Key(key));
                    }
                    None => return Some(Cow::Borrowed(&END)),
                },
            }
        }
    }
}
