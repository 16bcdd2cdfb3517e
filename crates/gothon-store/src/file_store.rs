//! File-backed implementation of the `SessionStore` trait.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, warn};
use uuid::Uuid;

use gothon_core::error::GameError;
use gothon_core::session::{SessionId, SessionRecord};
use gothon_core::store::SessionStore;

/// Stores each session record as `<session id>.json` in a directory.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Storage` if the directory cannot be created.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, GameError> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await.map_err(|e| {
            GameError::Storage(format!("cannot create {}: {e}", dir.display()))
        })?;
        Ok(Self { dir })
    }

    /// Directory holding the session files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: SessionId) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }
}

/// Removes a temporary file left by a failed save. A file that was never
/// created is not an error.
async fn discard_tmp(tmp: &Path) {
    match tokio::fs::remove_file(tmp).await {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => warn!(path = %tmp.display(), error = %e, "cannot remove temporary session file"),
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self, id: SessionId) -> Result<Option<SessionRecord>, GameError> {
        let path = self.path_for(id);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(GameError::Storage(format!(
                    "cannot read {}: {e}",
                    path.display()
                )));
            }
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        match serde_json::from_slice(&bytes) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                warn!(session_id = %id, error = %e, "discarding undecodable session record");
                Ok(None)
            }
        }
    }

    async fn save(&self, id: SessionId, record: &SessionRecord) -> Result<(), GameError> {
        let bytes = serde_json::to_vec(record)
            .map_err(|e| GameError::Storage(format!("cannot encode session record: {e}")))?;

        // Write to a private temporary file, then rename it over the record.
        let path = self.path_for(id);
        let tmp = self.dir.join(format!("{id}.{}.tmp", Uuid::new_v4()));
        if let Err(e) = tokio::fs::write(&tmp, &bytes).await {
            discard_tmp(&tmp).await;
            return Err(GameError::Storage(format!(
                "cannot write {}: {e}",
                tmp.display()
            )));
        }
        if let Err(e) = tokio::fs::rename(&tmp, &path).await {
            discard_tmp(&tmp).await;
            return Err(GameError::Storage(format!(
                "cannot replace {}: {e}",
                path.display()
            )));
        }

        debug!(session_id = %id, room_tag = %record.room_tag, "session record saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gothon_core::language::Language;

    async fn temp_store() -> (tempfile::TempDir, FileSessionStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::open(dir.path().join("sessions"))
            .await
            .unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn test_save_then_load_returns_equal_record() {
        // Arrange
        let (_dir, store) = temp_store().await;
        let id = SessionId::generate();
        let record = SessionRecord::new("the_armory", Language::Fr);

        // Act
        store.save(id, &record).await.unwrap();
        let loaded = store.load(id).await.unwrap();

        // Assert
        assert_eq!(loaded, Some(record));
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_record() {
        let (_dir, store) = temp_store().await;
        let id = SessionId::generate();

        store
            .save(id, &SessionRecord::new("the_armory", Language::En))
            .await
            .unwrap();
        store
            .save(id, &SessionRecord::new("the_bridge", Language::En))
            .await
            .unwrap();

        assert_eq!(
            store.load(id).await.unwrap(),
            Some(SessionRecord::new("the_bridge", Language::En))
        );
        // Only the record itself is left behind, no temporary files.
        let mut entries = std::fs::read_dir(store.dir()).unwrap();
        assert!(entries.next().is_some());
        assert!(entries.next().is_none());
    }

    #[tokio::test]
    async fn test_load_missing_record_returns_none() {
        let (_dir, store) = temp_store().await;

        assert_eq!(store.load(SessionId::generate()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_load_malformed_or_empty_record_returns_none() {
        // Arrange
        let (_dir, store) = temp_store().await;
        let garbled = SessionId::generate();
        let empty = SessionId::generate();
        let wrong_lang = SessionId::generate();
        std::fs::write(store.path_for(garbled), b"{\"room_tag\": ").unwrap();
        std::fs::write(store.path_for(empty), b"").unwrap();
        std::fs::write(
            store.path_for(wrong_lang),
            br#"{"room_tag": "the_bridge", "lang": "de"}"#,
        )
        .unwrap();

        // Act / Assert
        assert_eq!(store.load(garbled).await.unwrap(), None);
        assert_eq!(store.load(empty).await.unwrap(), None);
        assert_eq!(store.load(wrong_lang).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_load_reads_legacy_room_field() {
        let (_dir, store) = temp_store().await;
        let id = SessionId::generate();
        std::fs::write(
            store.path_for(id),
            br#"{"room": "escape_pod", "lang": "en"}"#,
        )
        .unwrap();

        assert_eq!(
            store.load(id).await.unwrap(),
            Some(SessionRecord::new("escape_pod", Language::En))
        );
    }

    #[tokio::test]
    async fn test_failed_save_leaves_no_temporary_file() {
        // Arrange
        let (_dir, store) = temp_store().await;
        let id = SessionId::generate();
        // A non-empty directory in place of the record makes the rename fail.
        std::fs::create_dir(store.path_for(id)).unwrap();
        std::fs::write(store.path_for(id).join("keep"), b"").unwrap();

        // Act
        let result = store
            .save(id, &SessionRecord::new("the_armory", Language::En))
            .await;

        // Assert
        assert!(matches!(result, Err(GameError::Storage(_))));
        let leftovers: Vec<_> = std::fs::read_dir(store.dir())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .filter(|name| name.to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty(), "left behind {leftovers:?}");
    }

    #[tokio::test]
    async fn test_discard_tmp_ignores_missing_file() {
        let (_dir, store) = temp_store().await;
        let tmp = store.dir().join("never-written.tmp");

        discard_tmp(&tmp).await;

        assert!(!tmp.exists());
    }

    #[tokio::test]
    async fn test_save_into_removed_directory_is_storage_error() {
        let (_dir, store) = temp_store().await;
        std::fs::remove_dir_all(store.dir()).unwrap();

        let result = store
            .save(
                SessionId::generate(),
                &SessionRecord::new("the_armory", Language::En),
            )
            .await;

        assert!(matches!(result, Err(GameError::Storage(_))));
    }
}
