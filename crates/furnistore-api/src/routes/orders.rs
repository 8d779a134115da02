//! Routes for checkout and order management.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use furnistore_core::command::Command;
use furnistore_core::error::DomainError;
use furnistore_orders::domain::aggregates::{Order, OrderStatus};
use furnistore_orders::domain::commands::{PlaceOrder, UpdateOrderStatus};
use furnistore_session::domain::permissions::MANAGE_ORDERS;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::{AppState, lock};

/// Query string for GET /.
#[derive(Debug, Deserialize)]
pub struct OrdersQuery {
    /// Only return orders in this status.
    pub status: Option<OrderStatus>,
}

/// Response body listing orders.
#[derive(Debug, Serialize)]
pub struct OrdersResponse {
    /// Orders, newest first.
    pub orders: Vec<Order>,
    /// Sum of totals over orders that were not cancelled.
    pub revenue: Decimal,
}

/// Request body for PUT /{id}/status.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    /// Status to move to.
    pub status: OrderStatus,
}

/// GET /
#[instrument(skip(state))]
async fn list(
    State(state): State<AppState>,
    Query(query): Query<OrdersQuery>,
) -> Result<Json<OrdersResponse>, ApiError> {
    let store = lock(&state.orders)?;
    let orders = match query.status {
        Some(status) => store.orders_by_status(status).into_iter().cloned().collect(),
        None => store.orders().to_vec(),
    };
    Ok(Json(OrdersResponse {
        orders,
        revenue: store.revenue(),
    }))
}

/// POST /checkout
///
/// Places an order for the current cart and empties the cart. The cart is
/// left untouched if the order is rejected.
#[instrument(skip(state, command))]
async fn checkout(
    State(state): State<AppState>,
    Json(command): Json<PlaceOrder>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    info!(command = command.command_type(), "handling checkout");

    let mut cart = lock(&state.cart)?;
    let order = lock(&state.orders)?.place_order(&command, &cart.cart().snapshot())?;
    cart.clear();
    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /{id}
#[instrument(skip(state))]
async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Order>, ApiError> {
    let store = lock(&state.orders)?;
    store
        .get(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| DomainError::NotFound(format!("order {id}")).into())
}

/// PUT /{id}/status
#[instrument(skip(state, request), fields(status = ?request.status))]
async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<Order>, ApiError> {
    if !lock(&state.session)?.has_permission(MANAGE_ORDERS) {
        warn!("order status change without permission");
        return Err(DomainError::PermissionDenied(MANAGE_ORDERS.to_owned()).into());
    }
    let command = UpdateOrderStatus {
        order_id: id,
        status: request.status,
    };
    info!(command = command.command_type(), "handling update_order_status command");

    let order = lock(&state.orders)?.update_status(&command)?;
    Ok(Json(order))
}

/// Returns the router for orders.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list))
        .route("/checkout", post(checkout))
        .route("/{id}", get(get_order))
        .route("/{id}/status", put(update_status))
}
