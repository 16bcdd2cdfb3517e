//! Application layer: command and query handlers.

pub mod command_handlers;
pub mod query_handlers;

use gothon_core::error::GameError;
use gothon_core::language::Language;
use gothon_core::session::SessionId;
use gothon_core::store::SessionStore;
use gothon_story::StoryGraph;
use tracing::warn;

use crate::domain::session::{InvalidSession, SessionState};

/// Loads the session behind `session_id` and classifies it for the `lang`
/// endpoints.
async fn load_state<'g>(
    session_id: Option<SessionId>,
    lang: Language,
    graph: &'g StoryGraph,
    store: &dyn SessionStore,
) -> Result<SessionState<'g>, GameError> {
    let Some(id) = session_id else {
        return Ok(SessionState::SelectingLanguage(InvalidSession::NoIdentifier));
    };
    let record = store.load(id).await?;
    let state = SessionState::resolve(id, record, lang, graph);
    if let SessionState::SelectingLanguage(reason) = &state {
        warn!(session_id = %id, %lang, %reason, "session cannot be resumed");
    }
    Ok(state)
}
