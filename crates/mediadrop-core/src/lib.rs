//! Mediadrop Core Library
//!
//! This crate provides the category table, stored filename generation, error types
//! and configuration shared by the storage and API crates.

pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{Category, StoredFilename, UploadResponse};
