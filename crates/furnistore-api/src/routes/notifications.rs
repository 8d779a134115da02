//! Routes for the admin notification feed.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use furnistore_core::command::Command;
use furnistore_core::error::DomainError;
use furnistore_notifications::application::store::NotificationStore;
use furnistore_notifications::domain::aggregates::{Category, Notification};
use furnistore_notifications::domain::commands::AddNotification;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::{AppState, lock};

/// Query string for GET /.
#[derive(Debug, Deserialize)]
pub struct FeedQuery {
    /// Only return entries of this type.
    #[serde(rename = "type")]
    pub category: Option<Category>,
}

/// Response body listing the feed.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedResponse {
    /// Entries, newest first.
    pub notifications: Vec<Notification>,
    /// Unread entries across the whole feed.
    pub unread_count: usize,
}

impl FeedResponse {
    fn from_store(store: &NotificationStore, category: Option<Category>) -> Self {
        let feed = store.feed();
        let notifications = match category {
            Some(category) => feed.by_category(category).cloned().collect(),
            None => feed.notifications().to_vec(),
        };
        Self {
            notifications,
            unread_count: store.unread_count(),
        }
    }
}

/// GET /
#[instrument(skip(state))]
async fn list(
    State(state): State<AppState>,
    Query(query): Query<FeedQuery>,
) -> Result<Json<FeedResponse>, ApiError> {
    let store = lock(&state.notifications)?;
    Ok(Json(FeedResponse::from_store(&store, query.category)))
}

/// POST /
#[instrument(skip(state, command), fields(category = ?command.category))]
async fn publish(
    State(state): State<AppState>,
    Json(command): Json<AddNotification>,
) -> Result<(StatusCode, Json<Notification>), ApiError> {
    if command.title.trim().is_empty() {
        return Err(DomainError::Validation("notification title is required".into()).into());
    }
    info!(command = command.command_type(), "handling add_notification command");

    let mut store = lock(&state.notifications)?;
    let notification = store.add_notification(&command);
    Ok((StatusCode::CREATED, Json(notification)))
}

/// POST /{id}/read
#[instrument(skip(state))]
async fn mark_as_read(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FeedResponse>, ApiError> {
    let mut store = lock(&state.notifications)?;
    store.mark_as_read(id);
    Ok(Json(FeedResponse::from_store(&store, None)))
}

/// POST /read-all
#[instrument(skip(state))]
async fn mark_all_as_read(State(state): State<AppState>) -> Result<Json<FeedResponse>, ApiError> {
    info!("marking all notifications read");
    let mut store = lock(&state.notifications)?;
    store.mark_all_as_read();
    Ok(Json(FeedResponse::from_store(&store, None)))
}

/// DELETE /{id}
#[instrument(skip(state))]
async fn remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FeedResponse>, ApiError> {
    let mut store = lock(&state.notifications)?;
    store.delete_notification(id);
    Ok(Json(FeedResponse::from_store(&store, None)))
}

/// Returns the router for the notification feed.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(publish))
        .route("/read-all", post(mark_all_as_read))
        .route("/{id}", delete(remove))
        .route("/{id}/read", post(mark_as_read))
}

#[cfg(test)]
mod tests {
    use furnistore_test_support::SequenceIdGenerator;
    use serde_json::json;

    use super::*;
    use crate::routes::test_helpers::{send, test_app_state};

    #[tokio::test]
    async fn test_fresh_feed_is_seeded_with_two_unread() {
        let (status, json) = send(router().with_state(test_app_state()), "GET", "/", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["notifications"].as_array().unwrap().len(), 4);
        assert_eq!(json["unreadCount"], 2);
    }

    #[tokio::test]
    async fn test_publish_prepends_unread_entry() {
        // Arrange
        let state = test_app_state();
        let body = json!({
            "title": "Refund requested",
            "description": "Order #1240 asked for a refund.",
            "type": "order",
            "priority": "high"
        });

        // Act
        let (status, created) =
            send(router().with_state(state.clone()), "POST", "/", Some(body)).await;
        let (_, feed) = send(router().with_state(state), "GET", "/", None).await;

        // Assert
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["id"], SequenceIdGenerator::nth(5).to_string());
        assert_eq!(created["type"], "order");
        assert_eq!(created["read"], false);
        assert_eq!(feed["notifications"][0]["title"], "Refund requested");
        assert_eq!(feed["unreadCount"], 3);
    }

    #[tokio::test]
    async fn test_publish_rejects_blank_title() {
        let body = json!({ "title": "  ", "description": "x", "category": "system" });

        let (status, json) =
            send(router().with_state(test_app_state()), "POST", "/", Some(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "validation_error");
    }

    #[tokio::test]
    async fn test_mark_read_mark_all_and_delete() {
        let state = test_app_state();
        let first = SequenceIdGenerator::nth(1);

        let (_, after_one) =
            send(router().with_state(state.clone()), "POST", &format!("/{first}/read"), None).await;
        let (_, after_all) =
            send(router().with_state(state.clone()), "POST", "/read-all", None).await;
        let (_, after_delete) =
            send(router().with_state(state), "DELETE", &format!("/{first}"), None).await;

        assert_eq!(after_one["unreadCount"], 1);
        assert_eq!(after_all["unreadCount"], 0);
        assert_eq!(after_delete["notifications"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_unknown_id_is_ignored() {
        let unknown = Uuid::from_u128(999);

        let (status, json) = send(
            router().with_state(test_app_state()),
            "POST",
            &format!("/{unknown}/read"),
            None,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["unreadCount"], 2);
    }

    #[tokio::test]
    async fn test_list_filters_by_type() {
        let (_, json) =
            send(router().with_state(test_app_state()), "GET", "/?type=order", None).await;

        let entries = json["notifications"].as_array().unwrap();
        assert!(!entries.is_empty());
        assert!(entries.iter().all(|entry| entry["type"] == "order"));
    }
}
