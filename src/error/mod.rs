//! Error types for tfgraph-viewer
//!
//! Only decoding and I/O failures cross the crate boundary as errors. Anything
//! structurally odd inside a decodable model is absorbed into a display value
//! or recorded as a [`crate::graph::GraphIssue`].

use thiserror::Error;

/// Main error type for model loading
#[derive(Error, Debug)]
pub enum ViewError {
    /// Protobuf decode error
    #[error("Failed to decode {record}: {source}")]
    Decode {
        /// Record kind that was being decoded
        record: &'static str,
        /// Underlying prost error
        #[source]
        source: prost::DecodeError,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Operator schema resource could not be parsed
    #[error("Schema parse error: {0}")]
    SchemaParse(#[from] serde_json::Error),

    /// Operator schema resource could not be fetched
    #[error("Schema fetch failed: {0}")]
    SchemaFetch(String),

    /// Invalid model
    #[error("Invalid model: {0}")]
    InvalidModel(String),
}

impl ViewError {
    /// Wrap a prost decode error with the record kind being decoded
    pub fn decode(record: &'static str, source: prost::DecodeError) -> Self {
        Self::Decode { record, source }
    }
}

/// Result type alias for model loading
pub type ViewResult<T> = Result<T, ViewError>;
