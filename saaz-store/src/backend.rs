//! Storage backend abstraction for the document store.
//!
//! The [`StoreBackend`] trait is the seam between the generic document access
//! layer and a concrete store. Implementations must be thread-safe
//! (`Send + Sync`) and safe for concurrent use by multiple in-flight requests;
//! the application layer performs no locking of its own.
//!
//! Backends receive documents that are already validated and serialized. The
//! document identifier is generated by the access layer and passed alongside
//! the document so every backend stores it the same way (as the `_id` field).

use async_trait::async_trait;
use bson::{Document as BsonDocument, oid::ObjectId};
use std::fmt::Debug;

use crate::{error::StoreResult, filter::Filter};

/// Abstract interface for document storage backends.
///
/// # Error Handling
///
/// Operations return [`StoreResult<T>`](crate::error::StoreResult). A backend
/// that cannot reach its store must fail the individual operation rather than
/// panic; the process keeps running in degraded mode.
#[async_trait]
pub trait StoreBackend: Send + Sync + Debug {
    /// Inserts a single document into a collection.
    ///
    /// The collection is created automatically if it does not exist. The
    /// backend persists `id` as the document's `_id` field.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`](crate::error::StoreError) if the store
    /// is unreachable or rejects the write.
    async fn insert_document(
        &self,
        collection: &str,
        id: ObjectId,
        document: BsonDocument,
    ) -> StoreResult<()>;

    /// Finds documents in a collection matching an equality filter.
    ///
    /// Returns at most `limit` documents in store-native order. Callers must
    /// not rely on that order being stable. A missing collection yields an
    /// empty result, never an error.
    async fn find_documents(
        &self,
        collection: &str,
        filter: &Filter,
        limit: usize,
    ) -> StoreResult<Vec<BsonDocument>>;

    /// Lists the names of all collections in the store.
    ///
    /// Used by the diagnostic endpoint to probe whether the store is
    /// reachable and working.
    async fn list_collections(&self) -> StoreResult<Vec<String>>;
}
