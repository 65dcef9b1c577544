//! MongoDB storage backend for the Saaz document store.
//!
//! Thin adapter over the official async `mongodb` driver. Equality filters
//! are pushed down to the server as find criteria; the driver's connection
//! pool makes the backend safe for concurrent use by in-flight requests.
//!
//! Constructing the backend parses the connection string but does not reach
//! the server, so an unreachable database fails individual operations rather
//! than process startup.
//!
//! # Example
//!
//! ```ignore
//! use saaz_mongodb::MongoDbStore;
//!
//! # async fn example() -> saaz_store::error::StoreResult<()> {
//! let backend = MongoDbStore::builder("mongodb://localhost:27017", "saaz")
//!     .build()
//!     .await?;
//! # Ok(()) }
//! ```

pub mod store;

pub use store::{MongoDbStore, MongoDbStoreBuilder};
