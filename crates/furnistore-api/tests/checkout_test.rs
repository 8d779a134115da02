//! Integration tests for the shopper flow: cart, wishlist and checkout.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use furnistore_cart::application::store::CART_SLOT;
use furnistore_orders::application::store::ORDERS_SLOT;
use furnistore_test_support::RecordingStorage;
use serde_json::json;

#[tokio::test]
async fn test_cart_merges_variants_and_checkout_empties_it() {
    // Arrange
    let storage = Arc::new(RecordingStorage::new());
    let app = common::build_test_app(storage.clone());

    // Act
    common::post_json(&app, "/api/v1/cart/items", &common::add_item_body("lamp", "35.50", 1)).await;
    common::post_json(&app, "/api/v1/cart/items", &common::add_item_body("lamp", "35.50", 2)).await;
    let (_, cart) = common::post_json(
        &app,
        "/api/v1/cart/items",
        &common::add_item_body("rug", "120.00", 1),
    )
    .await;
    let (status, order) = common::post_json(
        &app,
        "/api/v1/orders/checkout",
        &common::checkout_body("jane@example.com"),
    )
    .await;
    let (_, cart_after) = common::get_json(&app, "/api/v1/cart").await;

    // Assert
    assert_eq!(cart["items"].as_array().unwrap().len(), 2);
    assert_eq!(cart["itemCount"], 4);
    assert_eq!(cart["total"], "226.50");
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(order["total"], "226.50");
    assert_eq!(order["items"][0]["quantity"], 3);
    assert_eq!(cart_after["itemCount"], 0);
    assert!(!storage.contains(CART_SLOT));
    assert!(storage.contains(ORDERS_SLOT));
}

#[tokio::test]
async fn test_rejected_checkout_keeps_cart() {
    let storage = Arc::new(RecordingStorage::new());
    let app = common::build_test_app(storage.clone());
    common::post_json(&app, "/api/v1/cart/items", &common::add_item_body("lamp", "35.50", 1)).await;

    let (status, json) =
        common::post_json(&app, "/api/v1/orders/checkout", &common::checkout_body("   ")).await;
    let (_, cart) = common::get_json(&app, "/api/v1/cart").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "validation_error");
    assert_eq!(cart["itemCount"], 1);
    assert!(storage.contains(CART_SLOT));
}

#[tokio::test]
async fn test_wishlist_round_trip_through_api() {
    let app = common::build_test_app(Arc::new(RecordingStorage::new()));
    let product = json!({ "id": "desk", "name": "Walnut Desk", "price": "640.00" });

    let (created, _) = common::post_json(&app, "/api/v1/wishlist/items", &product).await;
    let (duplicate, _) = common::post_json(&app, "/api/v1/wishlist/items", &product).await;
    let (_, membership) = common::get_json(&app, "/api/v1/wishlist/items/desk").await;
    let (_, cleared) = common::delete(&app, "/api/v1/wishlist").await;

    assert_eq!(created, StatusCode::CREATED);
    assert_eq!(duplicate, StatusCode::CONFLICT);
    assert_eq!(membership["inWishlist"], true);
    assert_eq!(cleared["items"].as_array().unwrap().len(), 0);
}
