//! HTTP error response conversion
//!
//! This module renders [`AppError`] as an HTTP response.
//!
//! **Preferred handler pattern:** Return `Result<impl IntoResponse, HttpAppError>` and let
//! `?` convert `AppError` / `StorageError` so every failure renders the same way
//! (status, JSON body, logging).
//!
//! The rendered body never carries internal details. The detailed [`ErrorResponse`]
//! rides along in the response extensions and
//! [`error_details_middleware`](crate::middleware::error_details_middleware) swaps it
//! in when the configuration is not production.

use axum::{
    extract::multipart::MultipartRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mediadrop_core::{AppError, ErrorMetadata, LogLevel};
use mediadrop_storage::StorageError;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    /// Machine-readable error code for programmatic handling
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
}

/// Wrapper type for AppError to implement IntoResponse
/// This is necessary because of Rust's orphan rules - we can't implement
/// IntoResponse (external trait) for AppError (external type from mediadrop-core)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

/// A request that is not `multipart/form-data` carries no file payload.
impl From<MultipartRejection> for HttpAppError {
    fn from(rejection: MultipartRejection) -> Self {
        tracing::debug!(rejection = %rejection.body_text(), "Upload request is not multipart");
        HttpAppError(AppError::NoFileProvided)
    }
}

fn log_error(error: &AppError) {
    let error_type = error.error_type();
    let details = error.detailed_message();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %details, error_type = error_type, "Error occurred");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %details, error_type = error_type, "Error occurred");
        }
        LogLevel::Error => {
            tracing::error!(error = %details, error_type = error_type, "Error occurred");
        }
    }
}

impl HttpAppError {
    fn to_error_response(&self, hide_details: bool) -> ErrorResponse {
        let app_error = &self.0;
        if hide_details || app_error.is_sensitive() {
            ErrorResponse {
                error: app_error.client_message(),
                code: app_error.error_code().to_string(),
                details: None,
                error_type: None,
            }
        } else {
            ErrorResponse {
                error: app_error.client_message(),
                code: app_error.error_code().to_string(),
                details: Some(app_error.detailed_message()),
                error_type: Some(app_error.error_type().to_string()),
            }
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(&self.0);

        let mut response = (status, Json(self.to_error_response(true))).into_response();
        let detailed = self.to_error_response(false);
        if detailed.details.is_some() {
            response.extensions_mut().insert(detailed);
        }
        response
    }
}

// Convert storage errors to HttpAppError (avoids orphan rule: we impl for local HttpAppError)

impl From<StorageError> for HttpAppError {
    fn from(err: StorageError) -> Self {
        let app = match err {
            StorageError::NotFound(_) | StorageError::InvalidKey(_) => {
                AppError::NotFound("File not found".to_string())
            }
            StorageError::UploadFailed(msg) => AppError::Storage(msg),
            StorageError::DownloadFailed(msg) => AppError::Storage(msg),
            StorageError::ListFailed(msg) => AppError::Storage(msg),
            StorageError::IoError(err) => AppError::Internal(format!("IO error: {}", err)),
            StorageError::ConfigError(msg) => AppError::Internal(msg),
        };
        HttpAppError(app)
    }
}
