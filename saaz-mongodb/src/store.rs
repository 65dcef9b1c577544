use async_trait::async_trait;
use bson::{Bson, Document as BsonDocument, oid::ObjectId};
use futures::TryStreamExt;
use mongodb::{
    Client, Collection as MongoCollection,
    options::{ClientOptions, FindOptions},
};

use saaz_store::{
    backend::StoreBackend,
    error::{StoreError, StoreResult},
    filter::Filter,
};

/// MongoDB implementation of [`StoreBackend`].
#[derive(Debug)]
pub struct MongoDbStore {
    client: Client,
    database: String,
}

impl MongoDbStore {
    pub fn new(client: Client, database: String) -> Self {
        Self { client, database }
    }

    pub fn builder(dsn: &str, database: &str) -> MongoDbStoreBuilder {
        MongoDbStoreBuilder::new(dsn, database)
    }

    fn get_collection(&self, collection_name: &str) -> MongoCollection<BsonDocument> {
        self.client
            .database(&self.database)
            .collection(collection_name)
    }

    fn render_filter(filter: &Filter) -> BsonDocument {
        BsonDocument::from_iter(
            filter
                .clauses()
                .iter()
                .map(|(field, value)| (field.clone(), value.clone())),
        )
    }
}

#[async_trait]
impl StoreBackend for MongoDbStore {
    async fn insert_document(
        &self,
        collection: &str,
        id: ObjectId,
        document: BsonDocument,
    ) -> StoreResult<()> {
        self.get_collection(collection)
            .insert_one(BsonDocument::from_iter(
                document
                    .into_iter()
                    .chain([("_id".to_string(), Bson::ObjectId(id))]),
            ))
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        Ok(())
    }

    async fn find_documents(
        &self,
        collection: &str,
        filter: &Filter,
        limit: usize,
    ) -> StoreResult<Vec<BsonDocument>> {
        let mut options = FindOptions::default();
        options.limit = Some(limit as i64);

        Ok(self
            .get_collection(collection)
            .find(Self::render_filter(filter))
            .with_options(options)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?
            .try_collect::<Vec<BsonDocument>>()
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?)
    }

    async fn list_collections(&self) -> StoreResult<Vec<String>> {
        self.client
            .database(&self.database)
            .list_collection_names()
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))
    }
}

/// Builder that parses the connection string into a lazy client.
pub struct MongoDbStoreBuilder {
    dsn: String,
    database: String,
}

impl MongoDbStoreBuilder {
    pub fn new(dsn: &str, database: &str) -> Self {
        Self {
            dsn: dsn.to_string(),
            database: database.to_string(),
        }
    }

    /// Builds the backend.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Initialization`] if the connection string cannot
    /// be parsed. Network reachability is not checked here.
    pub async fn build(self) -> StoreResult<MongoDbStore> {
        Ok(MongoDbStore::new(
            Client::with_options(
                ClientOptions::parse(&self.dsn)
                    .await
                    .map_err(|e| StoreError::Initialization(e.to_string()))?,
            )
            .map_err(|e| StoreError::Initialization(e.to_string()))?,
            self.database,
        ))
    }
}
