//! Session store abstraction.

use async_trait::async_trait;

use crate::error::GameError;
use crate::session::{SessionId, SessionRecord};

/// Repository trait for loading and saving session records.
///
/// Implementations fail soft on malformed stored data: an undecodable
/// record is reported as absent, never as an error.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the record stored for `id`, or `None` if there is none.
    async fn load(&self, id: SessionId) -> Result<Option<SessionRecord>, GameError>;

    /// Store `record` for `id`, replacing whatever was stored before.
    async fn save(&self, id: SessionId, record: &SessionRecord) -> Result<(), GameError>;
}
