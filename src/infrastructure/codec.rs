//! Serde Encodings
//!
//! Concrete implementations of the Codec port.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::domain::ports::{Codec, CodecError};

/// Byte encoding used by the filesystem backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Encoding {
    /// Compact JSON
    #[default]
    Json,
    /// Indented JSON, easier to read on disk
    JsonPretty,
    /// YAML
    Yaml,
}

impl Encoding {
    /// Config and environment spellings, in declaration order
    pub const NAMES: &'static [&'static str] = &["json", "json-pretty", "yaml"];

    /// Parse a config/env spelling (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Some(Encoding::Json),
            "json-pretty" | "pretty" => Some(Encoding::JsonPretty),
            "yaml" | "yml" => Some(Encoding::Yaml),
            _ => None,
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Codec for Encoding {
    fn name(&self) -> &'static str {
        match self {
            Encoding::Json => "json",
            Encoding::JsonPretty => "json-pretty",
            Encoding::Yaml => "yaml",
        }
    }

    fn encode<T>(&self, value: &T) -> Result<Vec<u8>, CodecError>
    where
        T: Serialize + ?Sized,
    {
        let bytes = match self {
            Encoding::Json => serde_json::to_vec(value)?,
            Encoding::JsonPretty => serde_json::to_vec_pretty(value)?,
            Encoding::Yaml => serde_yaml_ng::to_string(value)?.into_bytes(),
        };
        Ok(bytes)
    }

    fn decode<T>(&self, bytes: &[u8]) -> Result<T, CodecError>
    where
        T: DeserializeOwned,
    {
        let value = match self {
            Encoding::Json | Encoding::JsonPretty => serde_json::from_slice(bytes)?,
            Encoding::Yaml => serde_yaml_ng::from_slice(bytes)?,
        };
        Ok(value)
    }
}
