pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::resume::handlers::handle_upload;
use crate::state::AppState;
use crate::summary::handlers::handle_improve;

pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Resume upload + parse
        .route(
            "/api/upload",
            post(handle_upload).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        // Summary rewrite
        .route("/api/ai/ai-improve", post(handle_improve))
        .with_state(state)
}
