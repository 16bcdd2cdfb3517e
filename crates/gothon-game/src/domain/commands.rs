//! Commands for the game session context.

use gothon_core::command::Command;
use gothon_core::language::Language;
use gothon_core::session::SessionId;
use uuid::Uuid;

/// Command to start a new game, placing the player in the start room.
#[derive(Debug, Clone)]
pub struct StartGame {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Identifier from the session cookie, if any.
    pub session_id: Option<SessionId>,
    /// Language of the new game.
    pub lang: Language,
}

impl Command for StartGame {
    fn command_type(&self) -> &'static str {
        "game.start_game"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    fn session_id(&self) -> Option<SessionId> {
        self.session_id
    }

    fn lang(&self) -> Language {
        self.lang
    }
}

/// Command to submit a player action in the current room.
#[derive(Debug, Clone)]
pub struct SubmitAction {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Identifier from the session cookie, if any.
    pub session_id: Option<SessionId>,
    /// Language of the endpoint the action was posted to.
    pub lang: Language,
    /// Raw form input. `None` or an empty string means no action was given.
    pub action: Option<String>,
}

impl Command for SubmitAction {
    fn command_type(&self) -> &'static str {
        "game.submit_action"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    fn session_id(&self) -> Option<SessionId> {
        self.session_id
    }

    fn lang(&self) -> Language {
        self.lang
    }
}
