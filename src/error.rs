//! Errors surfaced by the serialization side of [`OrderedMap`](crate::OrderedMap).
//!
//! Every map operation other than serialization is total, so this is the
//! only error type the crate exposes.

use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    /// A key or value could not be encoded as JSON.
    #[error("failed to encode ordered map as JSON: {0}")]
    Encoding(#[source] serde_json::Error),

    /// The JSON-to-YAML converter rejected the JSON text, either while
    /// reading it back or while emitting YAML.
    #[error("failed to convert JSON to YAML: {0}")]
    Conversion(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    pub fn is_encoding_error(&self) -> bool {
        matches!(self, Error::Encoding(_))
    }

    pub fn is_conversion_error(&self) -> bool {
        matches!(self, Error::Conversion(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
