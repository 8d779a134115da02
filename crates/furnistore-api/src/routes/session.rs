//! Routes for the admin session.

use axum::extract::{Path, State};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use furnistore_core::command::Command;
use furnistore_core::error::DomainError;
use furnistore_session::domain::aggregates::{Session, StoreSettings};
use furnistore_session::domain::commands::Login;
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::config::is_currency_code;
use crate::error::ApiError;
use crate::state::{AppState, lock};

/// Response body for GET /permissions/{id}.
#[derive(Debug, Serialize)]
pub struct PermissionResponse {
    /// The permission asked about.
    pub permission: String,
    /// Whether the signed-in admin holds it.
    pub granted: bool,
}

/// GET /
#[instrument(skip(state))]
async fn get_session(State(state): State<AppState>) -> Result<Json<Session>, ApiError> {
    let store = lock(&state.session)?;
    Ok(Json(store.session().clone()))
}

/// POST /login
#[instrument(skip(state, command), fields(email = %command.email))]
async fn login(
    State(state): State<AppState>,
    Json(command): Json<Login>,
) -> Result<Json<Session>, ApiError> {
    info!(command = command.command_type(), "handling login command");

    let mut store = lock(&state.session)?;
    if !store.login(&command) {
        warn!("login rejected");
        return Err(DomainError::InvalidCredentials.into());
    }
    Ok(Json(store.session().clone()))
}

/// POST /logout
#[instrument(skip(state))]
async fn logout(State(state): State<AppState>) -> Result<Json<Session>, ApiError> {
    let mut store = lock(&state.session)?;
    store.logout();
    Ok(Json(store.session().clone()))
}

/// PUT /settings
#[instrument(skip(state, settings), fields(currency = %settings.currency))]
async fn update_settings(
    State(state): State<AppState>,
    Json(settings): Json<StoreSettings>,
) -> Result<Json<Session>, ApiError> {
    if !is_currency_code(&settings.currency) {
        return Err(DomainError::Validation(format!(
            "currency must be a three-letter code, got '{}'",
            settings.currency
        ))
        .into());
    }
    info!("updating store settings");

    let mut store = lock(&state.session)?;
    store.update_settings(settings);
    Ok(Json(store.session().clone()))
}

/// GET /permissions/{id}
#[instrument(skip(state))]
async fn check_permission(
    State(state): State<AppState>,
    Path(permission): Path<String>,
) -> Result<Json<PermissionResponse>, ApiError> {
    let store = lock(&state.session)?;
    Ok(Json(PermissionResponse {
        granted: store.has_permission(&permission),
        permission,
    }))
}

/// Returns the router for the admin session.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_session))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/settings", put(update_settings))
        .route("/permissions/{id}", get(check_permission))
}
