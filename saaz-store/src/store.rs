//! Main document store facade used by the HTTP layer.
//!
//! [`DocumentStore`] wraps a backend behind dynamic dispatch so the
//! application can run against MongoDB in production and the in-memory
//! backend in tests, constructed once at startup and passed explicitly into
//! every route handler.

use bson::{Bson, Document as BsonDocument, oid::ObjectId};
use serde_json::Value;
use std::sync::Arc;

use crate::{
    backend::StoreBackend,
    document::{Document, DocumentExt},
    error::StoreResult,
    filter::Filter,
};

/// A document store bound to a runtime-selected backend.
///
/// Cloning is cheap; clones share the same backend.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    backend: Arc<dyn StoreBackend>,
}

impl DocumentStore {
    /// Creates a new document store with the given backend.
    pub fn new(backend: impl StoreBackend + 'static) -> Self {
        Self { backend: Arc::new(backend) }
    }

    /// Serializes a validated record and inserts it into its collection.
    ///
    /// The store generates the document identifier and returns it as a hex
    /// string, which is the representation the API hands back to clients.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`](crate::error::StoreError) if serialization
    /// fails or the backend rejects the write.
    pub async fn create_document<D: Document>(&self, record: &D) -> StoreResult<String> {
        let id = ObjectId::new();
        let document = record.to_document()?;

        self.backend
            .insert_document(D::collection_name(), id, document)
            .await?;

        Ok(id.to_hex())
    }

    /// Queries a collection with an equality filter, returning at most
    /// `limit` documents.
    ///
    /// Each returned JSON object carries its generated identifier as a plain
    /// string under `_id`, since the native identifier representation is not
    /// JSON-serializable as-is.
    pub async fn get_documents<D: Document>(
        &self,
        filter: &Filter,
        limit: usize,
    ) -> StoreResult<Vec<Value>> {
        self.backend
            .find_documents(D::collection_name(), filter, limit)
            .await?
            .into_iter()
            .map(render_document)
            .collect()
    }

    /// Lists all collections known to the backend.
    pub async fn list_collections(&self) -> StoreResult<Vec<String>> {
        self.backend.list_collections().await
    }
}

/// Converts a stored document into a JSON value with a stringified `_id`.
fn render_document(mut document: BsonDocument) -> StoreResult<Value> {
    let id = match document.remove("_id") {
        Some(Bson::ObjectId(oid)) => oid.to_hex(),
        Some(other) => other.to_string(),
        None => String::new(),
    };

    let mut value = serde_json::to_value(&document)?;
    if let Value::Object(map) = &mut value {
        map.insert("_id".to_string(), Value::String(id));
    }

    Ok(value)
}
