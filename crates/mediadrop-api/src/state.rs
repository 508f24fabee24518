//! Application state shared by every handler.

use mediadrop_core::Config;
use mediadrop_storage::Storage;
use std::sync::Arc;

/// Built once at startup and handed to handlers as `State<Arc<AppState>>`.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub storage: Arc<dyn Storage>,
}

impl AppState {
    pub fn new(config: Config, storage: Arc<dyn Storage>) -> Self {
        AppState { config, storage }
    }
}
