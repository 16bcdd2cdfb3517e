//! The game session state machine.
//!
//! A session is either waiting for a language selection, playing in a room,
//! or finished in a terminal room. Only an explicit language selection
//! enters play, and it always starts from the story's start room.

use gothon_core::language::Language;
use gothon_core::session::{SessionId, SessionRecord};
use gothon_story::{Room, StoryGraph};
use serde::Serialize;
use thiserror::Error;

/// Why a session cannot be resumed on an endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidSession {
    /// The request carried no usable session identifier.
    #[error("no session identifier")]
    NoIdentifier,
    /// Nothing (or nothing decodable) is stored for the identifier.
    #[error("no stored record")]
    NoRecord,
    /// The record belongs to the other language's endpoints.
    #[error("session was started in {stored}")]
    LanguageMismatch {
        /// Language stored in the record.
        stored: Language,
    },
    /// The record does not name a room.
    #[error("record has no room")]
    MissingRoom,
    /// The record names a room the story does not contain.
    #[error("record references unknown room {0}")]
    UnknownRoom(String),
}

/// Result of applying one player action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ActionOutcome {
    /// The player moved to another room.
    Moved {
        /// Room the player left.
        from: String,
        /// Room the player entered.
        to: String,
    },
    /// No transition matched; the player stays.
    Stayed {
        /// Room the player is still in.
        room: String,
    },
    /// The request was not a usable action on a usable session; nothing was
    /// read from or written to the session.
    Ignored,
}

/// A session that is in play: a stored record bound to its room.
#[derive(Debug, Clone)]
pub struct GameSession<'g> {
    id: SessionId,
    record: SessionRecord,
    room: &'g Room,
    graph: &'g StoryGraph,
}

impl<'g> GameSession<'g> {
    /// Identifier of the session.
    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// The (possibly updated) record to persist.
    #[must_use]
    pub fn record(&self) -> &SessionRecord {
        &self.record
    }

    /// The room the player is in.
    #[must_use]
    pub fn room(&self) -> &'g Room {
        self.room
    }

    /// Applies `action` to the current room. On a match the record's room
    /// is replaced by the target; otherwise the record is left unchanged.
    pub fn apply(&mut self, action: &str) -> ActionOutcome {
        match self.graph.go(self.room, action) {
            Some(next) => {
                let from = self.room.tag().to_owned();
                self.room = next;
                self.record.room_tag = next.tag().to_owned();
                ActionOutcome::Moved {
                    from,
                    to: next.tag().to_owned(),
                }
            }
            None => ActionOutcome::Stayed {
                room: self.room.tag().to_owned(),
            },
        }
    }
}

/// State of a session as seen from one language's endpoints.
#[derive(Debug, Clone)]
pub enum SessionState<'g> {
    /// No valid session; the player must pick a language first.
    SelectingLanguage(InvalidSession),
    /// Playing in a room that has exits.
    InRoom(GameSession<'g>),
    /// Playing, but the room is an epilogue with no exits.
    Terminal(GameSession<'g>),
}

impl<'g> SessionState<'g> {
    /// Classifies the record stored for `id` for the `lang` endpoints.
    ///
    /// A record naming a room that is not in `graph` is treated like any
    /// other invalid session, so the player is sent back to language
    /// selection rather than shown an error.
    #[must_use]
    pub fn resolve(
        id: SessionId,
        record: Option<SessionRecord>,
        lang: Language,
        graph: &'g StoryGraph,
    ) -> Self {
        let Some(record) = record else {
            return Self::SelectingLanguage(InvalidSession::NoRecord);
        };
        if record.lang != lang {
            return Self::SelectingLanguage(InvalidSession::LanguageMismatch {
                stored: record.lang,
            });
        }
        if record.room_tag.is_empty() {
            return Self::SelectingLanguage(InvalidSession::MissingRoom);
        }
        let Ok(room) = graph.lookup(&record.room_tag) else {
            return Self::SelectingLanguage(InvalidSession::UnknownRoom(record.room_tag));
        };

        let session = GameSession {
            id,
            record,
            room,
            graph,
        };
        if room.is_terminal() {
            Self::Terminal(session)
        } else {
            Self::InRoom(session)
        }
    }

    /// The session in play, if any.
    #[must_use]
    pub fn into_session(self) -> Option<GameSession<'g>> {
        match self {
            Self::SelectingLanguage(_) => None,
            Self::InRoom(session) | Self::Terminal(session) => Some(session),
        }
    }
}
