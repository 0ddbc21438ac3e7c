//! HTTP API server for the mountain catalog.

pub mod api_error;
mod handlers;
mod response_types;

use std::sync::Arc;

use axum::{
    Json, Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use peak_catalog_storage::CatalogStore;

pub use response_types::HealthResponse;

/// Shared application state for all HTTP handlers.
///
/// Holds the single injected catalog store, opened once at startup and
/// shared across concurrent handler invocations.
pub struct AppState {
    pub catalog: Arc<dyn CatalogStore>,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/mountains", get(handlers::mountains::list_mountains))
        .route("/mountains", post(handlers::mountains::add_mountain))
        .route("/mountains/{id}", get(handlers::mountains::get_mountain))
        .route("/height/{h}", get(handlers::mountains::mountains_by_height))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
