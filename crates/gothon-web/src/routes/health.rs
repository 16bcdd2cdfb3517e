//! Liveness endpoint reporting what the server is playing.

use axum::extract::State;
use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::config::SessionBackend;
use crate::state::AppState;

/// Body of GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `ok` while the server answers.
    pub status: &'static str,
    /// Crate version of the running binary.
    pub version: &'static str,
    /// Number of rooms in the loaded story.
    pub rooms: usize,
    /// Tag of the room new games start in.
    pub start_room: String,
    /// Where session records are kept.
    pub session_backend: SessionBackend,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        rooms: state.graph.len(),
        start_room: state.graph.start_tag().to_owned(),
        session_backend: state.config.session_backend,
    })
}

/// Returns the health check router.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
