//! Core trait binding record types to their collections.
//!
//! Only types implementing [`Document`] can cross the storage boundary, which
//! keeps the set of persistable record kinds closed at compile time instead of
//! passing loose key-value maps into the store.

use bson::{Document as BsonDocument, ser::serialize_to_document};
use serde::Serialize;

use crate::error::StoreResult;

/// Trait that every persistable record kind must implement.
///
/// A document names the collection it lives in; the store generates the
/// document identifier at insert time, so records themselves carry no id field.
///
/// # Example
///
/// ```ignore
/// use saaz_store::document::Document;
/// use serde::Serialize;
///
/// #[derive(Debug, Clone, Serialize)]
/// pub struct Wishlist {
///     pub user_id: String,
///     pub product_id: String,
/// }
///
/// impl Document for Wishlist {
///     fn collection_name() -> &'static str {
///         "wishlist"
///     }
/// }
/// ```
pub trait Document: Serialize + Send + Sync + 'static {
    /// Returns the name of the collection this document belongs to.
    ///
    /// This should be a static, lowercase identifier (e.g., "product", "order").
    fn collection_name() -> &'static str;
}

/// Extension trait providing serialization utilities for documents.
///
/// Automatically implemented for all types that implement [`Document`].
pub trait DocumentExt: Document {
    /// Converts this record to a BSON document for storage.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the record does not
    /// serialize to a map at the top level.
    fn to_document(&self) -> StoreResult<BsonDocument>;
}

impl<D: Document> DocumentExt for D {
    fn to_document(&self) -> StoreResult<BsonDocument> {
        Ok(serialize_to_document(self)?)
    }
}
