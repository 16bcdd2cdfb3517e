//! Shared application state.

use std::sync::Arc;

use gothon_core::store::SessionStore;
use gothon_story::StoryGraph;

use crate::config::AppConfig;

/// Application state shared across all request handlers.
///
/// The story graph is built once at startup and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    /// The story every session plays through.
    pub graph: Arc<StoryGraph>,
    /// Session record store.
    pub store: Arc<dyn SessionStore>,
    /// Server configuration.
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(graph: StoryGraph, store: Arc<dyn SessionStore>, config: AppConfig) -> Self {
        Self {
            graph: Arc::new(graph),
            store,
            config: Arc::new(config),
        }
    }
}
