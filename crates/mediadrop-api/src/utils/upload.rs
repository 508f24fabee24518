//! Common utilities for file upload handlers

use crate::error::HttpAppError;
use axum::extract::Multipart;
use futures::TryStreamExt;
use mediadrop_core::{AppError, Category, StoredFilename};
use mediadrop_storage::{Storage, StoredObject};
use tokio_util::io::StreamReader;

/// Multipart field carrying the uploaded file.
pub const FILE_FIELD: &str = "file";

/// Stream the first `file` field of the form straight into the category directory.
///
/// Only a field named `file` that carries a non-empty filename counts as a file
/// payload. A bare `file` text field, or the empty part a browser sends when no
/// file was chosen, is skipped. Fields after the stored file are not read.
pub async fn store_multipart_file(
    mut multipart: Multipart,
    storage: &dyn Storage,
    category: Category,
) -> Result<(StoredObject, String), HttpAppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart: {}", e)))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let Some(original_filename) = field
            .file_name()
            .filter(|name| !name.is_empty())
            .map(str::to_string)
        else {
            tracing::debug!("Skipping 'file' field without a filename");
            continue;
        };

        let filename = StoredFilename::generate(&original_filename).as_string();
        tracing::debug!(
            category = %category,
            original_filename = %original_filename,
            filename = %filename,
            "Streaming upload to storage"
        );

        let body = field.map_err(std::io::Error::other);
        let mut reader = std::pin::pin!(StreamReader::new(body));
        let stored = storage
            .upload_stream(category, &filename, &mut reader)
            .await?;

        return Ok((stored, original_filename));
    }

    Err(AppError::NoFileProvided.into())
}
