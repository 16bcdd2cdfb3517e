//! Query handlers for the game session context.
//!
//! This module resolves the player's current room and returns a read-only
//! view DTO in the session's language.

use gothon_core::error::GameError;
use gothon_core::language::Language;
use gothon_core::session::{SessionId, SessionRecord};
use gothon_core::store::SessionStore;
use gothon_story::{Media, Room, StoryGraph};
use serde::Serialize;

use super::load_state;
use crate::domain::session::SessionState;

/// Read-only view of the player's current room, in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomView {
    /// Room tag.
    pub tag: String,
    /// Language the texts are in.
    pub lang: Language,
    /// Room title.
    pub name: String,
    /// Main narrative text.
    pub description: String,
    /// Closing text, empty unless the room is an epilogue.
    pub complement: String,
    /// Hint text listing what the player may enter.
    pub choices: String,
    /// Decorative images.
    pub media: Option<Media>,
    /// `true` when no action can leave this room.
    pub is_terminal: bool,
    /// The session record the view was built from.
    pub session: SessionRecord,
}

impl RoomView {
    /// Builds the view of `room` in `session.lang`.
    #[must_use]
    pub fn new(room: &Room, session: SessionRecord) -> Self {
        let lang = session.lang;
        Self {
            tag: room.tag().to_owned(),
            lang,
            name: room.name().get(lang).clone(),
            description: room.description().get(lang).clone(),
            complement: room.complement().get(lang).clone(),
            choices: room.choices().get(lang).clone(),
            media: room.media().cloned(),
            is_terminal: room.is_terminal(),
            session,
        }
    }
}

/// What the room-display endpoint should answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomViewOutcome {
    /// Render the current room.
    Render(RoomView),
    /// The session cannot be shown here; send the player to this path.
    Redirect(String),
}

/// Retrieves the view of the current room for the `lang` endpoints.
///
/// An absent, undecodable or mismatched session, or one naming a room the
/// story no longer has, yields a redirect to the language entry point,
/// which starts a new game.
///
/// # Errors
///
/// Returns `GameError::Storage` if the session record cannot be read.
pub async fn get_room_view(
    session_id: Option<SessionId>,
    lang: Language,
    graph: &StoryGraph,
    store: &dyn SessionStore,
) -> Result<RoomViewOutcome, GameError> {
    let state = load_state(session_id, lang, graph, store).await?;
    Ok(match state {
        SessionState::SelectingLanguage(_) => RoomViewOutcome::Redirect(lang.entry_path()),
        SessionState::InRoom(session) | SessionState::Terminal(session) => {
            RoomViewOutcome::Render(RoomView::new(session.room(), session.record().clone()))
        }
    })
}
