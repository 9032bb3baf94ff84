pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::builder::handlers as builder_handlers;
use crate::critique::handlers as critique_handlers;
use crate::state::AppState;

/// PDF uploads and base64 profile photos outgrow axum's 2MB default.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Builder API
        .route(
            "/api/v1/resumes",
            post(builder_handlers::handle_build_resume),
        )
        // Critique API
        .route("/api/v1/critique", post(critique_handlers::handle_critique))
        .route(
            "/api/v1/critique/score",
            post(critique_handlers::handle_score_text),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}
