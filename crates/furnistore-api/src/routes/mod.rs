//! Route modules, one per store.

use axum::Router;

use crate::state::AppState;

pub mod cart;
pub mod health;
pub mod notifications;
pub mod orders;
pub mod session;
pub mod wishlist;

/// Assembles every router under its public prefix.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .nest("/api/v1/cart", cart::router())
        .nest("/api/v1/wishlist", wishlist::router())
        .nest("/api/v1/session", session::router())
        .nest("/api/v1/notifications", notifications::router())
        .nest("/api/v1/orders", orders::router())
        .with_state(state)
}
