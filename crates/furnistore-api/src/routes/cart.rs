//! Routes for the shopping cart.

use axum::extract::{Path, State};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use furnistore_cart::domain::aggregates::{Cart, LineItemId};
use furnistore_cart::domain::commands::{AddItem, RemoveItem, UpdateQuantity};
use furnistore_core::command::Command;
use furnistore_core::error::DomainError;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::state::{AppState, lock};

/// Request body for PUT /items/{id}.
#[derive(Debug, Deserialize)]
pub struct UpdateQuantityRequest {
    /// New absolute quantity; zero or less removes the line.
    pub quantity: i64,
}

/// GET /
#[instrument(skip(state))]
async fn get_cart(State(state): State<AppState>) -> Result<Json<Cart>, ApiError> {
    let store = lock(&state.cart)?;
    Ok(Json(store.cart().clone()))
}

/// POST /items
#[instrument(skip(state, command), fields(product_id = %command.product.id))]
async fn add_item(
    State(state): State<AppState>,
    Json(command): Json<AddItem>,
) -> Result<Json<Cart>, ApiError> {
    if command.product.price < Decimal::ZERO {
        return Err(DomainError::Validation("product price must not be negative".into()).into());
    }
    info!(
        command = command.command_type(),
        quantity = command.quantity,
        "handling add_item command"
    );

    let mut store = lock(&state.cart)?;
    store.add_item(&command);
    Ok(Json(store.cart().clone()))
}

/// PUT /items/{id}
#[instrument(skip(state, request))]
async fn update_quantity(
    State(state): State<AppState>,
    Path(line_item_id): Path<String>,
    Json(request): Json<UpdateQuantityRequest>,
) -> Result<Json<Cart>, ApiError> {
    let command = UpdateQuantity {
        line_item_id: LineItemId(line_item_id),
        quantity: request.quantity,
    };
    info!(
        command = command.command_type(),
        quantity = command.quantity,
        "handling update_quantity command"
    );

    let mut store = lock(&state.cart)?;
    store.update_quantity(&command);
    Ok(Json(store.cart().clone()))
}

/// DELETE /items/{id}
#[instrument(skip(state))]
async fn remove_item(
    State(state): State<AppState>,
    Path(line_item_id): Path<String>,
) -> Result<Json<Cart>, ApiError> {
    let command = RemoveItem {
        line_item_id: LineItemId(line_item_id),
    };
    info!(command = command.command_type(), "handling remove_item command");

    let mut store = lock(&state.cart)?;
    store.remove_item(&command);
    Ok(Json(store.cart().clone()))
}

/// DELETE /
#[instrument(skip(state))]
async fn clear_cart(State(state): State<AppState>) -> Result<Json<Cart>, ApiError> {
    info!("clearing cart");
    let mut store = lock(&state.cart)?;
    store.clear();
    Ok(Json(store.cart().clone()))
}

/// POST /toggle
#[instrument(skip(state))]
async fn toggle_cart(State(state): State<AppState>) -> Result<Json<Cart>, ApiError> {
    let mut store = lock(&state.cart)?;
    store.toggle_open();
    Ok(Json(store.cart().clone()))
}

/// Returns the router for the cart.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_cart).delete(clear_cart))
        .route("/items", post(add_item))
        .route("/items/{id}", put(update_quantity).delete(remove_item))
        .route("/toggle", post(toggle_cart))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    use super::*;
    use crate::routes::test_helpers::{send, test_app_state};

    fn chair(quantity: u32) -> Value {
        json!({
            "product": { "id": "chair", "name": "Lounge Chair", "price": "49.99" },
            "quantity": quantity,
            "selectedColor": "oak"
        })
    }

    #[tokio::test]
    async fn test_add_item_returns_cart_with_totals() {
        // Arrange
        let state = test_app_state();

        // Act
        let (status, json) = send(
            router().with_state(state.clone()),
            "POST",
            "/items",
            Some(chair(2)),
        )
        .await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["itemCount"], 2);
        assert_eq!(json["total"], "99.98");
        assert_eq!(json["items"][0]["id"], "chair-default-oak");
        assert_eq!(json["items"][0]["selectedColor"], "oak");
    }

    #[tokio::test]
    async fn test_update_quantity_to_zero_removes_line() {
        // Arrange
        let state = test_app_state();
        send(router().with_state(state.clone()), "POST", "/items", Some(chair(1))).await;

        // Act
        let (status, json) = send(
            router().with_state(state),
            "PUT",
            "/items/chair-default-oak",
            Some(json!({ "quantity": 0 })),
        )
        .await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["items"].as_array().unwrap().len(), 0);
        assert_eq!(json["total"], "0");
    }

    #[tokio::test]
    async fn test_remove_unknown_line_is_a_no_op() {
        let state = test_app_state();
        send(router().with_state(state.clone()), "POST", "/items", Some(chair(3))).await;

        let (status, json) =
            send(router().with_state(state), "DELETE", "/items/missing", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["itemCount"], 3);
    }

    #[tokio::test]
    async fn test_toggle_and_clear() {
        let state = test_app_state();
        send(router().with_state(state.clone()), "POST", "/items", Some(chair(1))).await;

        let (_, toggled) = send(router().with_state(state.clone()), "POST", "/toggle", None).await;
        let (_, cleared) = send(router().with_state(state), "DELETE", "/", None).await;

        assert_eq!(toggled["isOpen"], true);
        assert_eq!(cleared["itemCount"], 0);
        assert_eq!(cleared["isOpen"], true);
    }

    #[tokio::test]
    async fn test_negative_price_is_rejected() {
        let body = json!({
            "product": { "id": "chair", "name": "Lounge Chair", "price": "-1.00" }
        });

        let (status, json) =
            send(router().with_state(test_app_state()), "POST", "/items", Some(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "validation_error");
    }

    #[tokio::test]
    async fn test_add_item_returns_422_for_missing_product() {
        let (status, _) = send(
            router().with_state(test_app_state()),
            "POST",
            "/items",
            Some(json!({ "quantity": 1 })),
        )
        .await;

        // Axum returns 422 for deserialization failures.
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
