use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use validator::Validate;

use saaz_store::filter::Filter;

use crate::{AppState, error::ApiError, routes::Created, schemas::Category};

const DEFAULT_LIMIT: usize = 50;

#[derive(Debug, Deserialize)]
pub struct ListCategoriesQuery {
    pub limit: Option<usize>,
}

pub async fn create_category(
    State(state): State<Arc<AppState>>,
    Json(category): Json<Category>,
) -> Result<Json<Created>, ApiError> {
    category.validate()?;
    let id = state.store()?.create_document(&category).await?;
    Ok(Json(Created { id }))
}

pub async fn list_categories(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListCategoriesQuery>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let categories = state
        .store()?
        .get_documents::<Category>(&Filter::new(), query.limit.unwrap_or(DEFAULT_LIMIT))
        .await?;
    Ok(Json(categories))
}
