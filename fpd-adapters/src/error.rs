//! Error types for bidder adapters.

use thiserror::Error;

/// Result type for adapter operations.
pub type AdapterResult<T> = Result<T, AdapterError>;

/// Errors reported by adapters while building requests or parsing bids.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// The request or its parameters are unusable for this bidder.
    #[error("bad input: {message}")]
    BadInput { message: String },

    /// The bidder answered with something we cannot use.
    #[error("bad server response: {message}")]
    BadServerResponse { message: String },

    /// A bid declared a media type the adapter does not know.
    #[error("unknown media type: {0}")]
    UnknownMediaType(i64),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The adapter configuration is invalid.
    #[error("invalid adapter config: {0}")]
    Config(String),

    /// A request-building task did not complete.
    #[error("dispatch failed: {0}")]
    Dispatch(String),
}
