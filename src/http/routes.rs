use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::AppState;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Upload + pipeline
        .route("/api/upload", post(handlers::upload_audio))
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        // Browser clients upload from a different origin
        .layer(CorsLayer::permissive())
        .with_state(state)
}
