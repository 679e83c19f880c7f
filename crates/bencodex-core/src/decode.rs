//! Canonical Bencodex decoding.
//!
//! The decoder is a single forward pass driven by an explicit stack of open
//! containers, so nesting depth is bounded by [`DecoderConfig::max_depth`]
//! rather than by the call stack. Input that is not in canonical form is
//! rejected with a [`DecodingError`]; nothing is re-sorted or repaired, so
//! `encode(decode(bytes)?) == bytes` for every accepted input.

use bytes::Bytes;
use num_bigint::BigInt;
use std::io::Read;
use tracing::{debug, trace};

use crate::canonical::tags;
use crate::dictionary::Dictionary;
use crate::error::DecodingError;
use crate::key::Key;
use crate::list::List;
use crate::scalar::{Binary, Integer, Text};
use crate::value::Value;

/// Default bound on container nesting.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Decoder configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Maximum number of simultaneously open lists and dictionaries.
    pub max_depth: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Decode one complete value with the default configuration.
///
/// # Examples
///
/// ```
/// use bencodex_core::{decode, DecodingError, Value};
///
/// let value = decode(b"du3:foou3:bare").unwrap();
/// assert_eq!(value.get("foo"), Some(&Value::from("bar")));
///
/// // Keys out of canonical order are rejected.
/// assert!(matches!(
///     decode(b"du1:bi1eu1:ai2ee"),
///     Err(DecodingError::KeyOrderViolation { .. })
/// ));
/// ```
pub fn decode(data: &[u8]) -> Result<Value, DecodingError> {
    Decoder::default().decode(data)
}

/// Decode from a shared buffer; binary payloads reference `data` without copying.
pub fn decode_bytes(data: &Bytes) -> Result<Value, DecodingError> {
    Decoder::default().decode_bytes(data)
}

/// Read `reader` to the end and decode its contents.
pub fn decode_reader<R: Read>(reader: R) -> Result<Value, DecodingError> {
    Decoder::default().decode_reader(reader)
}

/// A configured decoder. Holds no state between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    pub fn decode(&self, data: &[u8]) -> Result<Value, DecodingError> {
        self.run(Parser::new(data, None))
    }

    pub fn decode_bytes(&self, data: &Bytes) -> Result<Value, DecodingError> {
        self.run(Parser::new(data, Some(data)))
    }

    pub fn decode_reader<R: Read>(&self, mut reader: R) -> Result<Value, DecodingError> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        self.decode_bytes(&Bytes::from(buf))
    }

    fn run(&self, mut parser: Parser<'_>) -> Result<Value, DecodingError> {
        match parser.parse(self.config.max_depth) {
            Ok(value) => {
                trace!(len = parser.data.len(), "decoded bencodex value");
                Ok(value)
            }
            Err(err) => {
                debug!(offset = ?err.offset(), error = %err, "rejected bencodex input");
                Err(err)
            }
        }
    }
}

/// An open container awaiting more children or its closing `e`.
enum Frame {
    List(Vec<Value>),
    Dictionary {
        entries: Vec<(Key, Value)>,
        pending_key: Option<Key>,
    },
}

impl Frame {
    fn expects_key(&self) -> bool {
        matches!(
            self,
            Frame::Dictionary {
                pending_key: None,
                ..
            }
        )
    }

    fn can_close(&self) -> bool {
        match self {
            Frame::List(_) => true,
            Frame::Dictionary { pending_key, .. } => pending_key.is_none(),
        }
    }

    fn close(self) -> Value {
        match self {
            Frame::List(items) => Value::List(List::new(items)),
            Frame::Dictionary { entries, .. } => {
                Value::Dictionary(Dictionary::from_sorted(entries))
            }
        }
    }
}

struct Parser<'a> {
    data: &'a [u8],
    shared: Option<&'a Bytes>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(data: &'a [u8], shared: Option<&'a Bytes>) -> Self {
        Self {
            data,
            shared,
            pos: 0,
        }
    }

    fn peek(&self) -> Result<u8, DecodingError> {
        self.data
            .get(self.pos)
            .copied()
            .ok_or(DecodingError::UnexpectedEof { offset: self.pos })
    }

    fn parse(&mut self, max_depth: usize) -> Result<Value, DecodingError> {
        let mut stack: Vec<Frame> = Vec::new();

        loop {
            let start = self.pos;
            let tag = self.peek()?;

            let expects_key = stack.last().map_or(false, Frame::expects_key);
            if expects_key && tag != tags::END && tag != tags::TEXT && !tag.is_ascii_digit() {
                return Err(DecodingError::InvalidKey { offset: start });
            }

            let value = match tag {
                tags::END if stack.last().map_or(false, Frame::can_close) => {
                    self.pos += 1;
                    match stack.pop() {
                        Some(frame) => frame.close(),
                        None => return Err(DecodingError::UnknownTag { offset: start, tag }),
                    }
                }
                tags::NULL => {
                    self.pos += 1;
                    Value::Null
                }
                tags::TRUE => {
                    self.pos += 1;
                    Value::Boolean(true)
                }
                tags::FALSE => {
                    self.pos += 1;
                    Value::Boolean(false)
                }
                tags::INTEGER => Value::Integer(self.integer()?),
                tags::TEXT => Value::Text(self.text()?),
                b'0'..=b'9' => Value::Binary(self.binary()?),
                tags::LIST | tags::DICTIONARY => {
                    if stack.len() >= max_depth {
                        return Err(DecodingError::NestingTooDeep {
                            offset: start,
                            max_depth,
                        });
                    }
                    self.pos += 1;
                    stack.push(if tag == tags::LIST {
                        Frame::List(Vec::new())
                    } else {
                        Frame::Dictionary {
                            entries: Vec::new(),
                            pending_key: None,
                        }
                    });
                    continue;
                }
                _ => return Err(DecodingError::UnknownTag { offset: start, tag }),
            };

            match stack.last_mut() {
                None => {
                    if self.pos != self.data.len() {
                        return Err(DecodingError::TrailingData { offset: self.pos });
                    }
                    return Ok(value);
                }
                Some(Frame::List(items)) => items.push(value),
                Some(Frame::Dictionary {
                    entries,
                    pending_key,
                }) => match pending_key.take() {
                    Some(key) => entries.push((key, value)),
                    None => {
                        let key = value
                            .as_key()
                            .ok_or(DecodingError::InvalidKey { offset: start })?;
                        if let Some((last, _)) = entries.last() {
                            if key == *last {
                                return Err(DecodingError::DuplicateKey { offset: start });
                            }
                            if key < *last {
                                return Err(DecodingError::KeyOrderViolation { offset: start });
                            }
                        }
                        *pending_key = Some(key);
                    }
                },
            }
        }
    }

    /// `i[-]<digits>e` with no leading zeros and no negative zero.
    fn integer(&mut self) -> Result<Integer, DecodingError> {
        let start = self.pos;
        self.pos += 1;
        let number_start = self.pos;

        if self.peek()? == tags::MINUS {
            self.pos += 1;
        }
        let digits_start = self.pos;

        loop {
            let b = self.peek()?;
            if b == tags::END {
                break;
            }
            if !b.is_ascii_digit() {
                return Err(DecodingError::InvalidInteger {
                    offset: self.pos,
                    reason: "non-digit character",
                });
            }
            self.pos += 1;
        }

        let digits = &self.data[digits_start..self.pos];
        let invalid = |reason| DecodingError::InvalidInteger {
            offset: start,
            reason,
        };
        if digits.is_empty() {
            return Err(invalid("no digits"));
        }
        if digits[0] == b'0' && digits.len() > 1 {
            return Err(invalid("leading zero"));
        }
        if digits == b"0" && digits_start != number_start {
            return Err(invalid("negative zero"));
        }

        let number = BigInt::parse_bytes(&self.data[number_start..self.pos], 10)
            .ok_or_else(|| invalid("unparseable"))?;
        self.pos += 1;
        Ok(Integer::from(number))
    }

    /// `<digits>:` with no leading zeros; returns the payload length.
    fn length_prefix(&mut self) -> Result<usize, DecodingError> {
        let start = self.pos;
        let mut len: usize = 0;

        loop {
            let b = self.peek()?;
            if !b.is_ascii_digit() {
                break;
            }
            len = len
                .checked_mul(10)
                .and_then(|n| n.checked_add(usize::from(b - b'0')))
                .ok_or(DecodingError::InvalidLengthPrefix { offset: start })?;
            self.pos += 1;
        }

        let digits = self.pos - start;
        if digits == 0 || (digits > 1 && self.data[start] == b'0') {
            return Err(DecodingError::InvalidLengthPrefix { offset: start });
        }
        if self.peek()? != tags::SEPARATOR {
            return Err(DecodingError::MissingSeparator { offset: self.pos });
        }
        self.pos += 1;

        if self.data.len() - self.pos < len {
            return Err(DecodingError::UnexpectedEof {
                offset: self.data.len(),
            });
        }
        Ok(len)
    }

    fn binary(&mut self) -> Result<Binary, DecodingError> {
        let len = self.length_prefix()?;
        let start = self.pos;
        self.pos += len;
        let bytes = match self.shared {
            Some(shared) => shared.slice(start..self.pos),
            None => Bytes::copy_from_slice(&self.data[start..self.pos]),
        };
        Ok(Binary::from(bytes))
    }

    fn text(&mut self) -> Result<Text, DecodingError> {
        self.pos += 1;
        let len = self.length_prefix()?;
        let start = self.pos;
        self.pos += len;
        let s = std::str::from_utf8(&self.data[start..self.pos])
            .map_err(|_| DecodingError::InvalidUtf8 { offset: start })?;
        Ok(Text::from(s))
    }
}
