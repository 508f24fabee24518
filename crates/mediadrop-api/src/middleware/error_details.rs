use crate::error::ErrorResponse;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

/// Replace error bodies with their detailed form unless running in production.
pub async fn error_details_middleware(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;

    let Some(detailed) = response.extensions_mut().remove::<ErrorResponse>() else {
        return response;
    };
    if state.config.is_production() {
        return response;
    }

    (response.status(), Json(detailed)).into_response()
}
