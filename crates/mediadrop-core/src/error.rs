//! Error types module
//!
//! All request-level failures are unified under [`AppError`]. Each variant
//! describes its own HTTP presentation through [`ErrorMetadata`], so the API
//! crate only has to render it.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like a missing upload field
    Debug,
    /// Warning level - for client mistakes worth noticing
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "NO_FILE_PROVIDED")
    fn error_code(&self) -> &'static str;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Whether details should be hidden from clients
    fn is_sensitive(&self) -> bool;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No file received")]
    NoFileProvided,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unknown upload category: {0}")]
    UnknownCategory(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("{message}")]
    ListFailed { message: String, reason: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Variant name, used as a structured logging field
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::NoFileProvided => "NoFileProvided",
            AppError::NotFound(_) => "NotFound",
            AppError::UnknownCategory(_) => "UnknownCategory",
            AppError::Storage(_) => "Storage",
            AppError::ListFailed { .. } => "ListFailed",
            AppError::Internal(_) => "Internal",
        }
    }

    /// Full message including internal context, for logs and non-production responses
    pub fn detailed_message(&self) -> String {
        match self {
            AppError::ListFailed { message, reason } => format!("{}: {}", message, reason),
            other => other.to_string(),
        }
    }
}

/// Static metadata for each variant: (http_status, error_code, sensitive, log_level).
fn app_error_static_metadata(err: &AppError) -> (u16, &'static str, bool, LogLevel) {
    match err {
        AppError::InvalidInput(_) => (400, "INVALID_INPUT", false, LogLevel::Debug),
        AppError::NoFileProvided => (400, "NO_FILE_PROVIDED", false, LogLevel::Debug),
        AppError::NotFound(_) => (404, "NOT_FOUND", false, LogLevel::Debug),
        // Upload routing failures surface as a write failure, not as a missing route.
        AppError::UnknownCategory(_) => (500, "UPLOAD_ROUTE_INVALID", false, LogLevel::Warn),
        AppError::Storage(_) => (500, "STORAGE_ERROR", true, LogLevel::Error),
        AppError::ListFailed { .. } => (500, "LIST_FAILED", true, LogLevel::Error),
        AppError::Internal(_) => (500, "INTERNAL_ERROR", true, LogLevel::Error),
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn client_message(&self) -> String {
        match self {
            AppError::InvalidInput(msg) => msg.clone(),
            AppError::NoFileProvided => "No file received".to_string(),
            AppError::NotFound(msg) => msg.clone(),
            AppError::UnknownCategory(_) => "Invalid upload route".to_string(),
            AppError::Storage(_) => "Failed to store file".to_string(),
            AppError::ListFailed { message, .. } => message.clone(),
            AppError::Internal(_) => "Internal server error".to_string(),
        }
    }

    fn is_sensitive(&self) -> bool {
        app_error_static_metadata(self).2
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).3
    }
}
