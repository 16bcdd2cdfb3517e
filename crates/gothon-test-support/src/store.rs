//! Test stores — mock `SessionStore` implementations for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use gothon_core::error::GameError;
use gothon_core::session::{SessionId, SessionRecord};
use gothon_core::store::SessionStore;

/// A session store that keeps records in memory and records every `save`
/// call, so tests can assert on what was persisted and how often.
#[derive(Debug, Default)]
pub struct RecordingSessionStore {
    records: Mutex<HashMap<SessionId, SessionRecord>>,
    saved: Mutex<Vec<(SessionId, SessionRecord)>>,
}

impl RecordingSessionStore {
    /// Create an empty recording store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `record` for `id`. The seeded
    /// record does not count as a save.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn with_record(id: SessionId, record: SessionRecord) -> Self {
        let store = Self::default();
        store.records.lock().unwrap().insert(id, record);
        store
    }

    /// Returns a snapshot of all `save` calls, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn saved_records(&self) -> Vec<(SessionId, SessionRecord)> {
        self.saved.lock().unwrap().clone()
    }

    /// Returns the record currently held for `id`.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn record(&self, id: SessionId) -> Option<SessionRecord> {
        self.records.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl SessionStore for RecordingSessionStore {
    async fn load(&self, id: SessionId) -> Result<Option<SessionRecord>, GameError> {
        Ok(self.records.lock().unwrap().get(&id).cloned())
    }

    async fn save(&self, id: SessionId, record: &SessionRecord) -> Result<(), GameError> {
        self.records.lock().unwrap().insert(id, record.clone());
        self.saved.lock().unwrap().push((id, record.clone()));
        Ok(())
    }
}

/// A session store that always returns a storage error. Useful for testing
/// error-handling paths.
#[derive(Debug)]
pub struct FailingSessionStore;

#[async_trait]
impl SessionStore for FailingSessionStore {
    async fn load(&self, _id: SessionId) -> Result<Option<SessionRecord>, GameError> {
        Err(GameError::Storage("disk unavailable".into()))
    }

    async fn save(&self, _id: SessionId, _record: &SessionRecord) -> Result<(), GameError> {
        Err(GameError::Storage("disk unavailable".into()))
    }
}
