pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::share;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Scan API
        .route("/api/v1/documents", post(handlers::handle_normalize_upload))
        .route("/api/v1/scan", post(handlers::handle_scan))
        .route("/api/v1/share", get(share::handle_share))
        .with_state(state)
}
