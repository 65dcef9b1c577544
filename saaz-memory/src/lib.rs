//! In-memory storage backend for the Saaz document store.
//!
//! Documents live in plain hash maps behind an async read-write lock. There is
//! no persistence and no indexing; queries scan the collection. That is more
//! than enough for the test suite and for running the API without a database.

pub mod store;

pub use store::InMemoryStore;
