//! Data models for the application
//!
//! Stored files live on disk only; these types describe how they are named,
//! where they go and what the API answers after an upload.

mod category;
mod stored_file;

pub use category::Category;
pub use stored_file::{StoredFilename, UploadResponse};
