//! Routes for the wishlist.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use furnistore_core::error::DomainError;
use furnistore_core::product::{Product, ProductId};
use furnistore_wishlist::domain::aggregates::Wishlist;
use serde::Serialize;
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::state::{AppState, lock};

/// Response body for GET /items/{product_id}.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipResponse {
    /// The product asked about.
    pub product_id: ProductId,
    /// Whether it is saved.
    pub in_wishlist: bool,
}

/// GET /
#[instrument(skip(state))]
async fn get_wishlist(State(state): State<AppState>) -> Result<Json<Wishlist>, ApiError> {
    let store = lock(&state.wishlist)?;
    Ok(Json(store.wishlist().clone()))
}

/// POST /items
#[instrument(skip(state, product), fields(product_id = %product.id))]
async fn add_item(
    State(state): State<AppState>,
    Json(product): Json<Product>,
) -> Result<(StatusCode, Json<Wishlist>), ApiError> {
    let mut store = lock(&state.wishlist)?;
    if !store.add_item(&product) {
        return Err(DomainError::Conflict(format!(
            "product {} is already in the wishlist",
            product.id
        ))
        .into());
    }
    info!("saved product to wishlist");
    Ok((StatusCode::CREATED, Json(store.wishlist().clone())))
}

/// GET /items/{product_id}
#[instrument(skip(state))]
async fn membership(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<MembershipResponse>, ApiError> {
    let product_id = ProductId::new(product_id);
    let store = lock(&state.wishlist)?;
    Ok(Json(MembershipResponse {
        in_wishlist: store.is_in_wishlist(&product_id),
        product_id,
    }))
}

/// DELETE /items/{product_id}
#[instrument(skip(state))]
async fn remove_item(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<Wishlist>, ApiError> {
    info!("removing product from wishlist");
    let mut store = lock(&state.wishlist)?;
    store.remove_item(&ProductId::new(product_id));
    Ok(Json(store.wishlist().clone()))
}

/// DELETE /
#[instrument(skip(state))]
async fn clear_wishlist(State(state): State<AppState>) -> Result<Json<Wishlist>, ApiError> {
    info!("clearing wishlist");
    let mut store = lock(&state.wishlist)?;
    store.clear();
    Ok(Json(store.wishlist().clone()))
}

/// Returns the router for the wishlist.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_wishlist).delete(clear_wishlist))
        .route("/items", post(add_item))
        .route("/items/{product_id}", get(membership).delete(remove_item))
}
