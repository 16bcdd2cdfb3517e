//! Gothon web adventure — HTTP server.
//!
//! Serves the game over HTTP: a session cookie identifies the player, the
//! story graph is shared read-only between requests, and every state change
//! answers with a redirect.

pub mod config;
pub mod error;
pub mod render;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Builds the full application router.
pub fn build_router(app_state: AppState) -> Router {
    let static_files = ServeDir::new(&app_state.config.static_dir);
    Router::new()
        .merge(routes::health::router())
        .merge(routes::game::router())
        .nest_service("/static", static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
