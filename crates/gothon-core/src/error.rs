//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum GameError {
    /// A room tag does not name any room of the story graph.
    #[error("unknown room: {0}")]
    UnknownRoom(String),

    /// The session store could not read or write a record.
    #[error("storage error: {0}")]
    Storage(String),
}
