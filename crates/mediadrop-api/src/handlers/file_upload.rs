use crate::error::HttpAppError;
use crate::state::AppState;
use crate::utils::upload::store_multipart_file;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, Path, State},
    Json,
};
use mediadrop_core::{AppError, Category, UploadResponse};
use std::sync::Arc;

/// `POST /upload/{category}`
///
/// The category comes from the route table, never from form fields, and is
/// resolved before any byte of the body is read.
#[tracing::instrument(skip(state, multipart), fields(operation = "upload_file"))]
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, HttpAppError> {
    let category =
        Category::from_upload_slug(&slug).ok_or_else(|| AppError::UnknownCategory(slug.clone()))?;
    let multipart = multipart?;

    let (stored, original_filename) =
        store_multipart_file(multipart, state.storage.as_ref(), category).await?;

    tracing::info!(
        category = %category,
        original_filename = %original_filename,
        filename = %stored.filename,
        size_bytes = stored.size_bytes,
        "File uploaded"
    );

    Ok(Json(UploadResponse::new(category, stored.filename)))
}
