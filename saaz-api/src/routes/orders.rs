use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use validator::Validate;

use saaz_store::filter::Filter;

use crate::{AppState, error::ApiError, routes::Created, schemas::Order};

const DEFAULT_LIMIT: usize = 50;

#[derive(Debug, Deserialize)]
pub struct ListOrdersQuery {
    pub user_id: Option<String>,
    pub limit: Option<usize>,
}

pub async fn create_order(
    State(state): State<Arc<AppState>>,
    Json(order): Json<Order>,
) -> Result<Json<Created>, ApiError> {
    order.validate()?;
    let id = state.store()?.create_document(&order).await?;
    Ok(Json(Created { id }))
}

pub async fn list_orders(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListOrdersQuery>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let mut filter = Filter::new();
    if let Some(user_id) = query.user_id {
        filter = filter.eq("user_id", user_id);
    }

    let orders = state
        .store()?
        .get_documents::<Order>(&filter, query.limit.unwrap_or(DEFAULT_LIMIT))
        .await?;
    Ok(Json(orders))
}
