//! FurniStore API server entry point.

use std::sync::Arc;

use furnistore_api::config::Config;
use furnistore_api::error::AppError;
use furnistore_api::routes;
use furnistore_api::state::AppState;
use furnistore_core::clock::SystemClock;
use furnistore_core::id::RandomIdGenerator;
use furnistore_local_storage::file_storage::FileStorage;
use furnistore_session::domain::aggregates::StoreSettings;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting FurniStore API server");

    let config = Config::from_env()?;
    let addr = config.socket_addr()?;

    let storage = Arc::new(FileStorage::open(&config.storage_path)?);
    tracing::info!(path = %config.storage_path.display(), "opened storage");

    let settings = StoreSettings {
        currency: config.currency.clone(),
        ..StoreSettings::default()
    };
    let app_state = AppState::new(
        storage,
        Arc::new(SystemClock),
        Arc::new(RandomIdGenerator),
        settings,
    );

    // TODO: Replace CorsLayer::permissive() with the storefront origin once it is configurable.
    let app = routes::app(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
