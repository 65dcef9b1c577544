use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use validator::Validate;

use saaz_store::filter::Filter;

use crate::{AppState, error::ApiError, routes::Created, schemas::Wishlist};

const DEFAULT_LIMIT: usize = 50;

#[derive(Debug, Deserialize)]
pub struct WishlistQuery {
    /// Required; a wishlist is always read per user.
    pub user_id: String,
}

pub async fn add_to_wishlist(
    State(state): State<Arc<AppState>>,
    Json(entry): Json<Wishlist>,
) -> Result<Json<Created>, ApiError> {
    entry.validate()?;
    let id = state.store()?.create_document(&entry).await?;
    Ok(Json(Created { id }))
}

pub async fn get_wishlist(
    State(state): State<Arc<AppState>>,
    Query(query): Query<WishlistQuery>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let filter = Filter::new().eq("user_id", query.user_id);
    let entries = state
        .store()?
        .get_documents::<Wishlist>(&filter, DEFAULT_LIMIT)
        .await?;
    Ok(Json(entries))
}
