//! API error taxonomy and its mapping to HTTP responses.
//!
//! Validation failures are client errors carrying a field-level detail map and
//! are never logged as system faults. Storage failures are server errors and
//! are logged; they can only occur after validation has already passed.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

use saaz_store::error::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation failed")]
    Validation(#[from] ValidationErrors),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "detail": errors })),
            )
                .into_response(),
            ApiError::Store(err) => {
                let status = match &err {
                    StoreError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };
                error!("storage error: {err}");
                (status, Json(json!({ "error": err.to_string() }))).into_response()
            }
        }
    }
}
