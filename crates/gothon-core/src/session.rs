//! Session identifiers and the persisted session record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::language::Language;

/// Opaque identifier of a player session, carried in the session cookie.
///
/// Always a UUID, so an identifier is safe to use as a storage key or
/// file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Generates a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses an identifier received from the client.
    ///
    /// Returns `None` for anything that is not a UUID, so that tampered
    /// cookies are handled exactly like a missing cookie.
    #[must_use]
    pub fn from_cookie(value: &str) -> Option<Self> {
        Uuid::from_str(value.trim()).ok().map(Self)
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for SessionId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The persisted unit of player progress: the current room and the language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Tag of the room the player is in. Records written by older
    /// deployments name this field `room`.
    #[serde(alias = "room")]
    pub room_tag: String,
    /// Language the session was started in.
    pub lang: Language,
}

impl SessionRecord {
    /// Creates a record placing the player in `room_tag`.
    #[must_use]
    pub fn new(room_tag: impl Into<String>, lang: Language) -> Self {
        Self {
            room_tag: room_tag.into(),
            lang,
        }
    }

    /// Returns `true` if the record can drive the `lang` endpoints: it names
    /// a room and was started in that same language.
    #[must_use]
    pub fn is_usable_for(&self, lang: Language) -> bool {
        !self.room_tag.is_empty() && self.lang == lang
    }
}
