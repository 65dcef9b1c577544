//! Hash-map backed implementation of [`StoreBackend`].

use async_trait::async_trait;
use bson::{Document as BsonDocument, oid::ObjectId};
use mea::rwlock::RwLock;
use std::{collections::HashMap, sync::Arc};

use saaz_store::{
    backend::StoreBackend,
    error::{StoreError, StoreResult},
    filter::Filter,
};

type CollectionMap = HashMap<String, BsonDocument>;
type StoreMap = HashMap<String, CollectionMap>;

/// Thread-safe in-memory document storage backend.
///
/// Cloneable; clones share the same underlying data through an `Arc`. Result
/// order follows hash-map iteration and is deliberately unspecified, matching
/// the store-native-order contract of the access layer.
#[derive(Default, Clone, Debug)]
pub struct InMemoryStore {
    /// collection name -> (document id hex -> document)
    store: Arc<RwLock<StoreMap>>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory document store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StoreBackend for InMemoryStore {
    async fn insert_document(
        &self,
        collection: &str,
        id: ObjectId,
        mut document: BsonDocument,
    ) -> StoreResult<()> {
        let mut store = self.store.write().await;
        let collection_map = store
            .entry(collection.to_string())
            .or_default();

        let key = id.to_hex();
        if collection_map.contains_key(&key) {
            return Err(StoreError::Backend(format!(
                "document {key} already exists in collection {collection}"
            )));
        }

        document.insert("_id", id);
        collection_map.insert(key, document);

        Ok(())
    }

    async fn find_documents(
        &self,
        collection: &str,
        filter: &Filter,
        limit: usize,
    ) -> StoreResult<Vec<BsonDocument>> {
        let store = self.store.read().await;
        let collection_map = match store.get(collection) {
            Some(col) => col,
            None => return Ok(vec![]),
        };

        Ok(collection_map
            .values()
            .filter(|document| filter.matches(document))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn list_collections(&self) -> StoreResult<Vec<String>> {
        let store = self.store.read().await;
        Ok(store.keys().cloned().collect())
    }
}
