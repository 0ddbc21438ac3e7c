//! Catalog handlers: list, get by id, filter by height, create.
//!
//! Each handler is a thin adapter around one `CatalogStore` operation with
//! a single exit point; an error signal can never be overwritten by a later
//! success write.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use peak_catalog_core::{Mountain, NewMountain};
use peak_catalog_storage::DegradedCause;

use crate::AppState;
use crate::api_error::ApiError;

/// GET /mountains
///
/// The payload is always the rows accumulated so far; a degraded listing
/// keeps the partial payload and signals the failure through the status
/// code alone.
pub async fn list_mountains(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<Vec<Mountain>>) {
    let outcome = state.catalog.list_all().await;
    let status = match outcome.degraded {
        None => StatusCode::OK,
        Some(DegradedCause::Query) => StatusCode::NO_CONTENT,
        Some(DegradedCause::RowDecode) => StatusCode::INTERNAL_SERVER_ERROR,
        Some(DegradedCause::Iteration) => StatusCode::GATEWAY_TIMEOUT,
    };
    (status, Json(outcome.mountains))
}

/// GET /mountains/{id}
pub async fn get_mountain(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Mountain>, ApiError> {
    match state.catalog.get_by_id(&id).await? {
        Some(mountain) => Ok(Json(mountain)),
        None => {
            tracing::info!(id, "mountain not found");
            Err(ApiError::NotFound(format!("mountain '{id}' not found")))
        },
    }
}

/// GET /height/{h}
///
/// Zero matches is a successful empty sequence, not an error.
pub async fn mountains_by_height(
    State(state): State<Arc<AppState>>,
    Path(height): Path<String>,
) -> Result<Json<Vec<Mountain>>, ApiError> {
    let mountains = state.catalog.filter_by_height(&height).await?;
    Ok(Json(mountains))
}

/// POST /mountains
pub async fn add_mountain(
    State(state): State<Arc<AppState>>,
    Json(input): Json<NewMountain>,
) -> Result<(StatusCode, Json<Mountain>), ApiError> {
    input.validate().map_err(ApiError::BadRequest)?;
    let created = state.catalog.insert(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
