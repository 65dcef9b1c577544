//! HTTP application for the Saaz International online shopping backend.
//!
//! Request flow: route handler parses the JSON body against the matching
//! schema, validates it, and delegates to the document access layer. Handlers
//! receive shared state explicitly through axum's `State` extractor; there is
//! no global store handle.

pub mod config;
pub mod error;
pub mod routes;
pub mod schemas;

use saaz_store::{error::StoreError, store::DocumentStore};

use crate::config::Config;

pub const APP_NAME: &str = "Saaz International – Online Shopping API";

/// Shared per-process state, constructed once in `main` (or by tests).
pub struct AppState {
    pub config: Config,
    /// `None` when the database is not configured; the process still serves
    /// requests in degraded mode and storage endpoints fail individually.
    pub store: Option<DocumentStore>,
    /// Captured store initialization failure, reported by `GET /test`.
    pub init_error: Option<String>,
}

impl AppState {
    pub fn new(config: Config, store: Option<DocumentStore>, init_error: Option<String>) -> Self {
        Self { config, store, init_error }
    }

    /// Returns the document store, or an `Unavailable` error in degraded mode.
    pub fn store(&self) -> Result<&DocumentStore, StoreError> {
        self.store
            .as_ref()
            .ok_or_else(|| StoreError::Unavailable("document store is not configured".to_string()))
    }
}
