//! Error types and result types for document store operations.
//!
//! Storage failures are a separate taxonomy from request validation failures:
//! by the time a record reaches this crate it is already known-valid, so every
//! error here describes the store itself, not the input.

use bson::error::Error as BsonError;
use serde_json::Error as SerdeJsonError;
use thiserror::Error;

/// Represents all possible errors raised by the document access layer.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Serialization/deserialization error when converting between record and document formats.
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Error during store initialization or connection setup.
    #[error("Initialization error: {0}")]
    Initialization(String),
    /// No store has been configured; the process is running in degraded mode.
    #[error("Document store not available: {0}")]
    Unavailable(String),
    /// The document has an invalid structure for the target collection.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
    /// An error occurred in the underlying storage backend.
    #[error("Backend error: {0}")]
    Backend(String),
}

/// A specialized `Result` type for document store operations.
pub type StoreResult<T> = Result<T, StoreError>;

impl From<BsonError> for StoreError {
    fn from(err: BsonError) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

impl From<SerdeJsonError> for StoreError {
    fn from(err: SerdeJsonError) -> Self {
        StoreError::Serialization(err.to_string())
    }
}
