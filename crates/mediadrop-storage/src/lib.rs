//! Mediadrop Storage Library
//!
//! This crate provides the storage abstraction and the local filesystem backend.
//!
//! # Layout
//!
//! Every [`Category`](mediadrop_core::Category) owns one flat directory under the
//! upload root (`<root>/videos`, `<root>/docs`). Stored names are single path
//! components: they must not be empty and must not contain `..`, `/`, `\` or NUL.

pub mod local;
pub mod traits;

// Re-export commonly used types
pub use local::LocalStorage;
pub use traits::{Storage, StorageError, StorageResult, StoredContent, StoredObject};
