//! Storage-agnostic document access layer for the Saaz shopping backend.
//!
//! This crate defines the boundary between validated records and the document
//! database that persists them:
//!
//! - **Document trait** ([`document`]) - Binds a record type to its collection and handles serialization
//! - **Store backend abstraction** ([`backend`]) - Trait implemented by concrete storage backends
//! - **Equality filters** ([`filter`]) - Structured field = value predicates for reads
//! - **Document store** ([`store`]) - The `create_document` / `get_documents` facade used by the API layer
//! - **Error handling** ([`error`]) - Storage error taxonomy and result type
//!
//! # Example
//!
//! ```ignore
//! use saaz_store::{document::Document, store::DocumentStore};
//! use serde::Serialize;
//!
//! #[derive(Debug, Clone, Serialize)]
//! pub struct Category {
//!     pub name: String,
//! }
//!
//! impl Document for Category {
//!     fn collection_name() -> &'static str {
//!         "category"
//!     }
//! }
//!
//! # async fn example(store: DocumentStore) -> saaz_store::error::StoreResult<()> {
//! let id = store.create_document(&Category { name: "Shoes".into() }).await?;
//! assert!(!id.is_empty());
//! # Ok(()) }
//! ```

pub mod backend;
pub mod document;
pub mod error;
pub mod filter;
pub mod store;

pub use backend::StoreBackend;
pub use document::Document;
pub use error::{StoreError, StoreResult};
pub use filter::Filter;
pub use store::DocumentStore;
