//! Gothon web adventure server entry point.

use std::sync::Arc;

use gothon_core::store::SessionStore;
use gothon_story::content;
use gothon_store::{FileSessionStore, MemorySessionStore};
use gothon_web::config::{AppConfig, SessionBackend};
use gothon_web::error::AppError;
use gothon_web::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Gothon web adventure server");

    // Read configuration from environment.
    let config = AppConfig::from_env()?;
    let addr = config.socket_addr()?;

    // Build the story graph once; it is read-only from here on.
    let graph = match &config.story_path {
        Some(path) => content::load_from_path(path)?,
        None => content::bundled()?,
    };
    tracing::info!(rooms = graph.len(), start = graph.start_tag(), "story loaded");

    // Open the session store.
    let store: Arc<dyn SessionStore> = match config.session_backend {
        SessionBackend::File => {
            let store = FileSessionStore::open(&config.sessions_dir).await?;
            tracing::info!(dir = %store.dir().display(), "using file session store");
            Arc::new(store)
        }
        SessionBackend::Memory => {
            tracing::warn!("using in-memory session store; sessions are lost on restart");
            Arc::new(MemorySessionStore::new())
        }
    };

    let app = gothon_web::build_router(AppState::new(graph, store, config));

    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
