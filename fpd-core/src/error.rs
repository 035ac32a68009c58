//! Error types for FPD extraction and resolution.

use crate::EntityKey;
use thiserror::Error;

/// Result type for FPD operations.
pub type FpdResult<T> = Result<T, FpdError>;

/// Errors that can occur while extracting or resolving first-party data.
///
/// Every variant is fatal to the request being prepared: resolution never
/// returns a partially resolved set of bidders.
#[derive(Debug, Error)]
pub enum FpdError {
    /// The raw request is not valid JSON, or a path segment is not an object.
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    /// Merging FPD into an entity's `ext` failed because one side is not valid JSON.
    #[error("failed to merge {entity} first-party data: {source}")]
    FpdMerge {
        entity: EntityKey,
        #[source]
        source: serde_json::Error,
    },

    /// The request `ext` could not be decoded or re-encoded.
    #[error("invalid request extension: {0}")]
    Extension(#[source] serde_json::Error),

    /// The stripped request could not be parsed as a bid request.
    #[error("invalid bid request: {0}")]
    Request(#[source] serde_json::Error),
}

impl FpdError {
    /// Returns true for merge failures.
    #[must_use]
    pub fn is_merge_error(&self) -> bool {
        matches!(self, Self::FpdMerge { .. })
    }
}
