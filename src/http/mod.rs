//! HTTP API server for the voice round trip
//!
//! This module exposes the pipeline to clients:
//! - POST /api/upload - Upload a recorded artifact, get the generated reply
//! - GET /health - Health check

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
