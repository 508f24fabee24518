use crate::error::HttpAppError;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use mediadrop_core::{AppError, Category};
use std::sync::Arc;

/// `GET /files/{category}`: names in the category directory, unsorted.
#[tracing::instrument(skip(state), fields(operation = "list_files"))]
pub async fn list_files(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<Vec<String>>, HttpAppError> {
    let category = Category::from_listing_slug(&slug)
        .ok_or_else(|| AppError::NotFound(format!("Unknown file listing '{}'", slug)))?;

    let names = state
        .storage
        .list(category)
        .await
        .map_err(|e| AppError::ListFailed {
            message: category.list_error_message().to_string(),
            reason: e.to_string(),
        })?;

    Ok(Json(names))
}
