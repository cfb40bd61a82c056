//! Error types for dialog storage access.

use thiserror::Error;

/// Errors raised by a [`DialogStore`](super::store::DialogStore).
#[derive(Debug, Error)]
pub enum StoreError {
    /// Dialog does not exist in the store.
    #[error("Dialog not found: {0}")]
    NotFound(i64),

    /// Store query failed (backend-specific message).
    #[error("Query error: {0}")]
    Query(String),

    /// Stored data could not be decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
