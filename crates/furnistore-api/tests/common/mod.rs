//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use furnistore_core::storage::SharedStorage;
use furnistore_session::domain::aggregates::StoreSettings;
use furnistore_test_support::{FixedClock, SequenceIdGenerator};
use http_body_util::BodyExt;
use tower::ServiceExt;

use furnistore_api::routes;
use furnistore_api::state::AppState;

/// Build the full app router over `storage` with a fixed clock and
/// sequential ids. Uses the same route structure as `main.rs`.
pub fn build_test_app(storage: SharedStorage) -> Router {
    routes::app(AppState::new(
        storage,
        Arc::new(FixedClock::standard()),
        Arc::new(SequenceIdGenerator::new()),
        StoreSettings::default(),
    ))
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<&serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body_bytes).unwrap_or(serde_json::Value::Null);

    (status, json)
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: &Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    send(app, "POST", uri, Some(body)).await
}

/// Send a PUT request with a JSON body and return the response.
pub async fn put_json(
    app: &Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    send(app, "PUT", uri, Some(body)).await
}

/// Send a bodyless POST request and return the response.
pub async fn post_empty(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send(app, "POST", uri, None).await
}

/// Send a GET request and return the response.
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send(app, "GET", uri, None).await
}

/// Send a DELETE request and return the response.
pub async fn delete(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send(app, "DELETE", uri, None).await
}

/// JSON body for adding `quantity` units of a product to the cart.
pub fn add_item_body(id: &str, price: &str, quantity: u32) -> serde_json::Value {
    serde_json::json!({
        "product": { "id": id, "name": format!("Product {id}"), "price": price },
        "quantity": quantity
    })
}

/// JSON body for checking out to a fixed address.
pub fn checkout_body(email: &str) -> serde_json::Value {
    serde_json::json!({
        "customerEmail": email,
        "shippingAddress": {
            "name": "Jane Doe",
            "line1": "1 Main St",
            "city": "Springfield",
            "postalCode": "12345",
            "country": "US"
        }
    })
}
