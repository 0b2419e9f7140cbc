//! Codec port - the encode/decode boundary of the filesystem backend
//!
//! The store never inspects payloads; it only moves the bytes a codec
//! produces onto disk and hands them back to the same codec on read.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Encoding failures, with the underlying serde error preserved
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

/// Symmetric byte encoding for any serde type
pub trait Codec {
    /// Short name used in logs and config (`json`, `yaml`, ...)
    fn name(&self) -> &'static str;

    fn encode<T>(&self, value: &T) -> Result<Vec<u8>, CodecError>
    where
        T: Serialize + ?Sized;

    fn decode<T>(&self, bytes: &[u8]) -> Result<T, CodecError>
    where
        T: DeserializeOwned;
}
