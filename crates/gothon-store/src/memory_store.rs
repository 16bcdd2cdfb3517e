//! In-memory implementation of the `SessionStore` trait.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use gothon_core::error::GameError;
use gothon_core::session::{SessionId, SessionRecord};
use gothon_core::store::SessionStore;

/// Keeps session records in process memory.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    records: RwLock<HashMap<SessionId, SessionRecord>>,
}

impl MemorySessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self, id: SessionId) -> Result<Option<SessionRecord>, GameError> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn save(&self, id: SessionId, record: &SessionRecord) -> Result<(), GameError> {
        self.records.write().await.insert(id, record.clone());
        Ok(())
    }
}
