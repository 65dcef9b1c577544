//! `GET /test` - storage diagnostics.
//!
//! This endpoint never fails: every storage failure mode is caught and
//! rendered as a descriptive string field in a 200 response, so it stays
//! usable when the database is fully down.

use axum::{Json, extract::State};
use serde::Serialize;
use std::sync::Arc;

use crate::AppState;

/// Exception messages embedded in the report are cut to this length.
const MESSAGE_LIMIT: usize = 80;
const COLLECTION_LIMIT: usize = 10;

#[derive(Debug, Serialize)]
pub struct DiagnosticsReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

pub async fn test_database(State(state): State<Arc<AppState>>) -> Json<DiagnosticsReport> {
    let mut report = DiagnosticsReport {
        backend: "running".to_string(),
        database: "not available".to_string(),
        database_url: set_or_not(state.config.database_url.is_some()),
        database_name: set_or_not(state.config.database_name.is_some()),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    match (&state.store, &state.init_error) {
        (Some(store), _) => {
            report.connection_status = "Connected".to_string();
            match store.list_collections().await {
                Ok(mut names) => {
                    names.truncate(COLLECTION_LIMIT);
                    report.collections = names;
                    report.database = "connected and working".to_string();
                }
                Err(err) => {
                    report.database =
                        format!("connected but error: {}", truncate(&err.to_string()));
                }
            }
        }
        (None, Some(err)) => {
            report.database = format!("error: {}", truncate(err));
        }
        (None, None) => {
            report.database = "available but not initialized".to_string();
        }
    }

    Json(report)
}

fn set_or_not(set: bool) -> String {
    if set { "set" } else { "not set" }.to_string()
}

fn truncate(message: &str) -> String {
    message.chars().take(MESSAGE_LIMIT).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_messages_are_truncated() {
        let long = "x".repeat(200);
        assert_eq!(truncate(&long).len(), MESSAGE_LIMIT);
        assert_eq!(truncate("short"), "short");
    }
}
