//! Command handlers for the game session context.
//!
//! Each handler loads the session record, runs the domain logic and
//! persists the result. Every handler ends in a redirect: state-changing
//! requests are never rendered directly.

use gothon_core::error::GameError;
use gothon_core::session::{SessionId, SessionRecord};
use gothon_core::store::SessionStore;
use gothon_story::StoryGraph;
use tracing::debug;

use super::load_state;
use crate::domain::commands::{StartGame, SubmitAction};
use crate::domain::session::ActionOutcome;

/// A freshly started game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartedGame {
    /// Identifier the client must present from now on.
    pub session_id: SessionId,
    /// `true` if `session_id` was minted by this command.
    pub issued_new_id: bool,
    /// The record that was saved.
    pub record: SessionRecord,
    /// Where to send the player next.
    pub redirect: String,
}

/// A processed action submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedAction {
    /// What happened to the session.
    pub outcome: ActionOutcome,
    /// Where to send the player next.
    pub redirect: String,
}

/// Handles the `StartGame` command: saves a record placing the player in
/// the start room of `graph`, in the requested language.
///
/// The client's identifier is kept when a record is stored under it, and
/// that record is overwritten. Otherwise a new identifier is issued.
///
/// # Errors
///
/// Returns `GameError::Storage` if the record cannot be loaded or saved.
pub async fn handle_start_game(
    command: &StartGame,
    graph: &StoryGraph,
    store: &dyn SessionStore,
) -> Result<StartedGame, GameError> {
    let existing = match command.session_id {
        Some(id) => store.load(id).await?.map(|_| id),
        None => None,
    };
    let (session_id, issued_new_id) = match existing {
        Some(id) => (id, false),
        None => (SessionId::generate(), true),
    };

    let record = SessionRecord::new(graph.start_tag(), command.lang);
    store.save(session_id, &record).await?;

    debug!(%session_id, issued_new_id, lang = %command.lang, "game started");

    Ok(StartedGame {
        session_id,
        issued_new_id,
        record,
        redirect: command.lang.game_path(),
    })
}

/// Handles the `SubmitAction` command: moves the player according to the
/// current room's transitions and saves the record.
///
/// The record is saved whenever the session is usable and an action was
/// given, even if no transition matched. A missing or empty action, or a
/// session that cannot be resumed on this language's endpoints, changes
/// nothing.
///
/// # Errors
///
/// Returns `GameError::Storage` if the record cannot be loaded or saved.
pub async fn handle_submit_action(
    command: &SubmitAction,
    graph: &StoryGraph,
    store: &dyn SessionStore,
) -> Result<SubmittedAction, GameError> {
    let redirect = command.lang.game_path();

    let Some(action) = command.action.as_deref().filter(|a| !a.is_empty()) else {
        return Ok(SubmittedAction {
            outcome: ActionOutcome::Ignored,
            redirect,
        });
    };

    let state = load_state(command.session_id, command.lang, graph, store).await?;
    let Some(mut session) = state.into_session() else {
        return Ok(SubmittedAction {
            outcome: ActionOutcome::Ignored,
            redirect,
        });
    };

    let outcome = session.apply(action);
    store.save(session.id(), session.record()).await?;

    Ok(SubmittedAction { outcome, redirect })
}
