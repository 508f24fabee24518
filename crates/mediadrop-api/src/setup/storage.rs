//! Storage setup and initialization

use anyhow::{Context, Result};
use mediadrop_core::{Category, Config};
use mediadrop_storage::{LocalStorage, Storage};
use std::sync::Arc;

/// Create the local storage and make sure every category directory exists.
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    tracing::info!(root = %config.upload_dir().display(), "Initializing upload storage...");

    let storage = LocalStorage::new(config.upload_dir());
    storage
        .ensure_directories()
        .await
        .context("Failed to create upload directories")?;

    for category in Category::ALL {
        tracing::info!(
            category = %category,
            path = %storage.category_dir(category).display(),
            "Upload directory ready"
        );
    }

    Ok(Arc::new(storage))
}
