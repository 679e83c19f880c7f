//! A configured codec combining decoding limits with typed conversion.

use bencodex_core::{encode, Decoder, DecoderConfig, Value};
use bencodex_serialization::{FromValue, SerializerSettings, ToValue};
use tracing::debug;

use crate::error::CodecError;

/// Configuration for a [`Codec`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CodecConfig {
    /// Decoder limits.
    pub decoder: DecoderConfig,
    /// Field-name conventions for record types.
    pub settings: SerializerSettings,
    /// Largest encoding accepted in either direction, if any.
    pub max_encoded_len: Option<u64>,
}

/// Encodes and decodes typed values under one configuration.
#[derive(Debug, Clone, Default)]
pub struct Codec {
    config: CodecConfig,
    decoder: Decoder,
}

impl Codec {
    pub fn new(config: CodecConfig) -> Self {
        Self {
            config,
            decoder: Decoder::new(config.decoder),
        }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn settings(&self) -> SerializerSettings {
        self.config.settings
    }

    fn check_len(&self, len: u64) -> Result<(), CodecError> {
        match self.config.max_encoded_len {
            Some(limit) if len > limit => {
                debug!(len, limit, "encoding exceeds configured limit");
                Err(CodecError::TooLarge { len, limit })
            }
            _ => Ok(()),
        }
    }

    /// Encode a raw value.
    pub fn encode_value(&self, value: &Value) -> Result<Vec<u8>, CodecError> {
        self.check_len(value.encoding_length())?;
        Ok(encode(value))
    }

    /// Decode a raw value.
    pub fn decode_value(&self, bytes: &[u8]) -> Result<Value, CodecError> {
        self.check_len(bytes.len() as u64)?;
        Ok(self.decoder.decode(bytes)?)
    }

    /// Convert and encode a typed value.
    pub fn to_bytes<T: ToValue + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        self.encode_value(&value.to_value())
    }

    /// Decode and convert into a typed value.
    pub fn from_bytes<T: FromValue>(&self, bytes: &[u8]) -> Result<T, CodecError> {
        let value = self.decode_value(bytes)?;
        Ok(T::from_value(&value)?)
    }
}
