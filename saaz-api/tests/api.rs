//! End-to-end router tests over the in-memory backend.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use saaz_api::{AppState, config::Config, routes};
use saaz_memory::InMemoryStore;
use saaz_store::store::DocumentStore;

fn test_app() -> Router {
    let state = Arc::new(AppState::new(
        Config::default(),
        Some(DocumentStore::new(InMemoryStore::new())),
        None,
    ));
    routes::router(state)
}

fn degraded_app() -> Router {
    let state = Arc::new(AppState::new(Config::default(), None, None));
    routes::router(state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

#[tokio::test]
async fn root_reports_status_ok() {
    let app = test_app();
    let (status, body) = get(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["app"], saaz_api::APP_NAME);
}

#[tokio::test]
async fn create_then_list_categories_round_trips() {
    let app = test_app();

    let (status, created) =
        post_json(&app, "/api/categories", json!({ "name": "Shoes", "icon": "boot" })).await;
    assert_eq!(status, StatusCode::OK);
    let first_id = created["id"].as_str().unwrap().to_string();
    assert!(!first_id.is_empty());

    let (_, second) = post_json(&app, "/api/categories", json!({ "name": "Bags" })).await;
    let second_id = second["id"].as_str().unwrap();
    assert_ne!(first_id, second_id);

    let (status, body) = get(&app, "/api/categories").await;
    assert_eq!(status, StatusCode::OK);
    let listed = body.as_array().unwrap();
    assert_eq!(listed.len(), 2);

    let shoes = listed
        .iter()
        .find(|c| c["name"] == "Shoes")
        .expect("created category is listed");
    assert_eq!(shoes["icon"], "boot");
    assert_eq!(shoes["_id"], Value::String(first_id));
}

#[tokio::test]
async fn category_list_limit_is_applied() {
    let app = test_app();
    for name in ["a", "b", "c"] {
        post_json(&app, "/api/categories", json!({ "name": name })).await;
    }

    let (status, body) = get(&app, "/api/categories?limit=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn product_category_filter_excludes_other_categories() {
    let app = test_app();
    post_json(
        &app,
        "/api/products",
        json!({ "name": "Headphones", "category": "Electronics", "price": 49.9 }),
    )
    .await;
    post_json(
        &app,
        "/api/products",
        json!({ "name": "Mug", "category": "Kitchen", "price": 9.5 }),
    )
    .await;
    post_json(
        &app,
        "/api/products",
        json!({ "name": "Charger", "category": "Electronics", "price": 19.0 }),
    )
    .await;

    let (status, body) = get(&app, "/api/products?category=Electronics").await;
    assert_eq!(status, StatusCode::OK);
    let listed = body.as_array().unwrap();
    assert_eq!(listed.len(), 2);
    assert!(listed.iter().all(|p| p["category"] == "Electronics"));
}

#[tokio::test]
async fn product_defaults_are_visible_in_listing() {
    let app = test_app();
    post_json(
        &app,
        "/api/products",
        json!({ "name": "Mug", "category": "Kitchen", "price": 9.5 }),
    )
    .await;

    let (_, body) = get(&app, "/api/products").await;
    let product = &body.as_array().unwrap()[0];

    assert_eq!(product["images"], json!([]));
    assert_eq!(product["stock"], json!(0));
    assert_eq!(product["description"], Value::Null);
    assert_eq!(product["ratings"], json!(0.0));
    assert_eq!(product["discount_percent"], json!(0.0));
}

#[tokio::test]
async fn invalid_product_is_rejected_with_field_detail() {
    let app = test_app();
    let (status, body) = post_json(
        &app,
        "/api/products",
        json!({ "name": "Mug", "category": "Kitchen", "price": -1.0, "ratings": 6.0 }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"]["price"].is_array());
    assert!(body["detail"]["ratings"].is_array());

    // Nothing was persisted.
    let (_, listed) = get(&app, "/api/products").await;
    assert!(listed.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn order_round_trips_by_user_filter() {
    let app = test_app();
    let order = json!({
        "user_id": "U1",
        "items": [{ "product_id": "P1", "name": "Mug", "price": 9.5, "quantity": 2 }],
        "payment_method": "cod",
        "total_amount": 19.0,
        "shipping_address": { "line1": "1 Market Road", "city": "Mumbai", "country": "IN" }
    });

    let (status, created) = post_json(&app, "/api/orders", order).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!created["id"].as_str().unwrap().is_empty());

    let (status, body) = get(&app, "/api/orders?user_id=U1").await;
    assert_eq!(status, StatusCode::OK);
    let listed = body.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["order_status"], "pending");
    assert_eq!(listed[0]["items"][0]["quantity"], json!(2));

    let (_, other_user) = get(&app, "/api/orders?user_id=U2").await;
    assert!(other_user.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn negative_order_total_is_rejected() {
    let app = test_app();
    let (status, body) = post_json(
        &app,
        "/api/orders",
        json!({
            "user_id": "U1",
            "items": [],
            "payment_method": "cod",
            "total_amount": -5.0,
            "shipping_address": { "line1": "1 Market Road", "city": "Mumbai", "country": "IN" }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"]["total_amount"].is_array());
}

#[tokio::test]
async fn empty_wishlist_is_a_success() {
    let app = test_app();
    let (status, body) = get(&app, "/api/wishlist?user_id=U1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn wishlist_requires_user_id() {
    let app = test_app();
    let (status, _) = get(&app, "/api/wishlist").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn wishlist_is_scoped_to_the_requested_user() {
    let app = test_app();
    post_json(&app, "/api/wishlist", json!({ "user_id": "U1", "product_id": "P1" })).await;
    post_json(&app, "/api/wishlist", json!({ "user_id": "U2", "product_id": "P2" })).await;

    let (status, body) = get(&app, "/api/wishlist?user_id=U1").await;
    assert_eq!(status, StatusCode::OK);
    let listed = body.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["product_id"], "P1");
}

#[tokio::test]
async fn storage_endpoints_fail_individually_in_degraded_mode() {
    let app = degraded_app();

    let (status, body) = post_json(&app, "/api/categories", json!({ "name": "Shoes" })).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["error"].as_str().unwrap().contains("not available"));

    let (status, _) = get(&app, "/api/products").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn diagnostics_succeed_without_a_store() {
    let app = degraded_app();
    let (status, body) = get(&app, "/test").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["backend"], "running");
    assert_eq!(body["database"], "available but not initialized");
    assert_eq!(body["database_url"], "not set");
    assert_eq!(body["database_name"], "not set");
    assert_eq!(body["connection_status"], "Not Connected");
    assert_eq!(body["collections"], json!([]));
}

#[tokio::test]
async fn diagnostics_report_a_working_store() {
    let app = test_app();
    post_json(&app, "/api/categories", json!({ "name": "Shoes" })).await;

    let (status, body) = get(&app, "/test").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "connected and working");
    assert_eq!(body["connection_status"], "Connected");
    assert!(
        body["collections"]
            .as_array()
            .unwrap()
            .contains(&json!("category"))
    );
}

#[tokio::test]
async fn diagnostics_report_an_initialization_error() {
    let state = Arc::new(AppState::new(
        Config::default(),
        None,
        Some("connection string is malformed".to_string()),
    ));
    let app = routes::router(state);

    let (status, body) = get(&app, "/test").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "error: connection string is malformed");
    assert_eq!(body["connection_status"], "Not Connected");
}
