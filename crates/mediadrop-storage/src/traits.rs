//! Storage abstraction trait
//!
//! This module defines the Storage trait implemented by storage backends.

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;
use mediadrop_core::Category;
use std::path::PathBuf;
use std::pin::Pin;
use thiserror::Error;
use tokio::io::AsyncRead;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("Listing failed: {0}")]
    ListFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid file name: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Byte stream returned by downloads
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, StorageError>> + Send>>;

/// A file written by [`Storage::upload_stream`].
#[derive(Debug, Clone)]
pub struct StoredObject {
    pub category: Category,
    pub filename: String,
    pub path: PathBuf,
    pub size_bytes: u64,
}

/// An opened file ready to be streamed back to a client.
pub struct StoredContent {
    pub filename: String,
    pub size_bytes: u64,
    pub stream: ByteStream,
}

/// Storage abstraction trait
///
/// Handlers only talk to this trait, so tests can run the router against a
/// temporary root without touching the working directory.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Create every category directory (and missing parents). Idempotent; existing
    /// files are never touched.
    async fn ensure_directories(&self) -> StorageResult<()>;

    /// Write `reader` to `filename` inside the category directory.
    ///
    /// A stream that fails mid-transfer leaves the partial file in place.
    async fn upload_stream(
        &self,
        category: Category,
        filename: &str,
        reader: &mut (dyn AsyncRead + Send + Unpin),
    ) -> StorageResult<StoredObject>;

    /// Names currently present in the category directory, in enumeration order.
    async fn list(&self, category: Category) -> StorageResult<Vec<String>>;

    /// Open a stored file for streaming.
    async fn download_stream(&self, category: Category, filename: &str)
        -> StorageResult<StoredContent>;

    /// Verify every category directory is present and is a directory.
    async fn check_ready(&self) -> StorageResult<()>;

    /// Directory backing a category
    fn category_dir(&self, category: Category) -> PathBuf;
}
