//! Route configuration and setup.
//!
//! Upload, listing and retrieval routes resolve their category through the
//! [`Category`](mediadrop_core::Category) table; health checks live in [health](health).

mod health;

use crate::handlers::{file_download, file_list, file_upload};
use crate::middleware::error_details_middleware;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::Method,
    routing::{get, post},
    Router,
};
use mediadrop_core::Config;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router<()>, anyhow::Error> {
    let cors = setup_cors();

    tracing::info!(
        public_dir = %config.public_dir().display(),
        "Serving static frontend for unmatched paths"
    );

    let app = api_routes()
        .route("/health", get(health::health_check))
        .fallback_service(ServeDir::new(config.public_dir()))
        // Uploads are streamed to disk and have no size limit.
        .layer(DefaultBodyLimit::disable())
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            error_details_middleware,
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/upload/{category}", post(file_upload::upload_file))
        .route("/files/{category}", get(file_list::list_files))
        .route("/videos/{filename}", get(file_download::download_video))
        .route("/docs/{filename}", get(file_download::download_document))
}

fn setup_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}
