//! HTTP routing layer: binds verbs and paths to schema validation plus
//! document access calls.

pub mod categories;
pub mod diagnostics;
pub mod orders;
pub mod products;
pub mod wishlist;

use axum::{
    Json, Router,
    routing::get,
};
use serde::Serialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::{APP_NAME, AppState};

/// Response body for every successful create endpoint.
#[derive(Debug, Serialize)]
pub struct Created {
    pub id: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    // Demo frontend is served from arbitrary origins.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/test", get(diagnostics::test_database))
        .route(
            "/api/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/api/products",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/api/orders",
            get(orders::list_orders).post(orders::create_order),
        )
        .route(
            "/api/wishlist",
            get(wishlist::get_wishlist).post(wishlist::add_to_wishlist),
        )
        .layer(cors)
        .with_state(state)
}

async fn root() -> Json<Value> {
    Json(json!({ "app": APP_NAME, "status": "ok" }))
}
