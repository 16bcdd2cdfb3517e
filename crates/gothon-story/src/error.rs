//! Errors raised while building or loading a story graph.

use thiserror::Error;

/// A story graph could not be built.
#[derive(Debug, Error)]
pub enum StoryError {
    /// Two rooms were registered with the same tag.
    #[error("duplicate room tag: {0}")]
    DuplicateRoom(String),

    /// The designated start room does not exist.
    #[error("start room {0} is not part of the story")]
    UnknownStart(String),

    /// A transition was attached to a room that does not exist.
    #[error("cannot connect unknown room {0}")]
    UnknownSource(String),

    /// A transition points at a room that does not exist.
    #[error("room {from} action {action:?} leads to unknown room {to}")]
    UnknownTarget {
        /// Room owning the transition.
        from: String,
        /// Action key of the transition.
        action: String,
        /// Missing target tag.
        to: String,
    },

    /// A transition key is not trimmed and lowercase, so no input could match it.
    #[error("room {room} has unmatchable action key {action:?}")]
    UnnormalizedAction {
        /// Room owning the transition.
        room: String,
        /// Offending action key.
        action: String,
    },

    /// The story document is not valid YAML for the expected schema.
    #[error("story document is malformed: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The story file could not be read.
    #[error("story file could not be read: {0}")]
    Io(#[from] std::io::Error),
}
