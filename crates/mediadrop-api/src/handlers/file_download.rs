use crate::error::HttpAppError;
use crate::state::AppState;
use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, Response, StatusCode},
};
use futures::TryStreamExt;
use mediadrop_core::{AppError, Category};
use std::sync::Arc;

/// `GET /videos/{filename}`
pub async fn download_video(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<Response<Body>, HttpAppError> {
    serve_stored_file(&state, Category::Video, &filename).await
}

/// `GET /docs/{filename}`
pub async fn download_document(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<Response<Body>, HttpAppError> {
    serve_stored_file(&state, Category::Document, &filename).await
}

/// Stream a stored file back with a content type inferred from its name.
#[tracing::instrument(skip(state), fields(operation = "download_file"))]
async fn serve_stored_file(
    state: &AppState,
    category: Category,
    filename: &str,
) -> Result<Response<Body>, HttpAppError> {
    let content = state.storage.download_stream(category, filename).await?;

    let content_type = mime_guess::from_path(&content.filename)
        .first_or_octet_stream()
        .to_string();

    tracing::debug!(
        category = %category,
        filename = %content.filename,
        size_bytes = content.size_bytes,
        content_type = %content_type,
        "Streaming stored file"
    );

    let body_stream = content.stream.map_err(std::io::Error::other);

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_LENGTH, content.size_bytes)
        .body(Body::from_stream(body_stream))
        .map_err(|e| AppError::Internal(format!("Failed to build response: {}", e)))?;

    Ok(response)
}
