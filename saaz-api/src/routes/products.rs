use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use validator::Validate;

use saaz_store::filter::Filter;

use crate::{AppState, error::ApiError, routes::Created, schemas::Product};

const DEFAULT_LIMIT: usize = 100;

#[derive(Debug, Deserialize)]
pub struct ListProductsQuery {
    pub category: Option<String>,
    pub limit: Option<usize>,
}

pub async fn create_product(
    State(state): State<Arc<AppState>>,
    Json(product): Json<Product>,
) -> Result<Json<Created>, ApiError> {
    product.validate()?;
    let id = state.store()?.create_document(&product).await?;
    Ok(Json(Created { id }))
}

pub async fn list_products(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListProductsQuery>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let mut filter = Filter::new();
    if let Some(category) = query.category {
        filter = filter.eq("category", category);
    }

    let products = state
        .store()?
        .get_documents::<Product>(&filter, query.limit.unwrap_or(DEFAULT_LIMIT))
        .await?;
    Ok(Json(products))
}
