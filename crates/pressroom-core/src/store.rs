//! Draft persistence port and its JSON-file implementation.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use tracing::debug;

use crate::draft::{Draft, DraftInput};
use crate::error::StoreError;

/// File name of the draft collection inside the data directory.
pub const DRAFTS_FILE: &str = "drafts.json";

/// Persistence port for drafts.
///
/// The publisher never touches this directly; it only consumes the list of
/// drafts a caller hands it.
#[async_trait]
pub trait DraftStore: Send + Sync {
    /// All drafts, in insertion order.
    async fn list(&self) -> Result<Vec<Draft>, StoreError>;

    /// Upsert a draft. An input with a known id updates that draft's title,
    /// body, and `updated_at`; an unknown id is an error; no id creates.
    async fn save(&self, input: DraftInput) -> Result<Draft, StoreError>;

    /// Remove one draft by id.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;

    /// Remove all drafts.
    async fn clear(&self) -> Result<(), StoreError>;
}

/// Drafts kept as a single JSON array in one file under a data directory.
#[derive(Debug)]
pub struct JsonDraftStore {
    path: PathBuf,
    // serializes the read-modify-write cycles
    lock: Mutex<()>,
}

impl JsonDraftStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(DRAFTS_FILE),
            lock: Mutex::new(()),
        }
    }

    async fn read_all(&self) -> Result<Vec<Draft>, StoreError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_all(&self, drafts: &[Draft]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let bytes = serde_json::to_vec_pretty(drafts)?;
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }
}

#[async_trait]
impl DraftStore for JsonDraftStore {
    async fn list(&self) -> Result<Vec<Draft>, StoreError> {
        let _guard = self.lock.lock().await;
        self.read_all().await
    }

    async fn save(&self, input: DraftInput) -> Result<Draft, StoreError> {
        let _guard = self.lock.lock().await;
        let mut drafts = self.read_all().await?;
        let draft = match input.id {
            Some(id) => {
                let existing = drafts
                    .iter_mut()
                    .find(|d| d.id == id)
                    .ok_or_else(|| StoreError::NotFound { id: id.clone() })?;
                existing.title = input.title;
                existing.body = input.body;
                existing.updated_at = Utc::now();
                existing.clone()
            }
            None => {
                let draft = Draft::new(input.title, input.body);
                drafts.push(draft.clone());
                draft
            }
        };
        self.write_all(&drafts).await?;
        debug!(id = %draft.id, "saved draft");
        Ok(draft)
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        let mut drafts = self.read_all().await?;
        let before = drafts.len();
        drafts.retain(|d| d.id != id);
        if drafts.len() == before {
            return Err(StoreError::NotFound { id: id.to_string() });
        }
        self.write_all(&drafts).await
    }

    async fn clear(&self) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (JsonDraftStore, tempfile::TempDir) {
        let dir = tempfile::tempdir().expect("tempdir");
        (JsonDraftStore::new(dir.path()), dir)
    }

    #[tokio::test]
    async fn missing_file_lists_empty() {
        let (store, _dir) = store();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let (store, _dir) = store();
        let saved = store
            .save(DraftInput { id: None, title: "Hello".into(), body: "World".into() })
            .await
            .unwrap();

        let listed = store.list().await.unwrap();
        assert_eq!(listed, vec![saved.clone()]);
        assert_eq!(listed[0].title, "Hello");
        assert_eq!(listed[0].body, "World");
        // timestamps survive the JSON round trip exactly
        assert_eq!(listed[0].created_at, saved.created_at);
        assert_eq!(listed[0].updated_at, saved.updated_at);
    }

    #[tokio::test]
    async fn update_keeps_id_and_created_at() {
        let (store, _dir) = store();
        let first = store
            .save(DraftInput { id: None, title: "a".into(), body: "b".into() })
            .await
            .unwrap();

        let second = store
            .save(DraftInput { id: Some(first.id.clone()), title: "a2".into(), body: "b2".into() })
            .await
            .unwrap();

        assert_eq!(second.id, first.id);
        assert_eq!(second.created_at, first.created_at);
        assert!(second.updated_at >= first.updated_at);

        let listed = store.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "a2");
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let (store, _dir) = store();
        let err = store
            .save(DraftInput { id: Some("nope".into()), title: "t".into(), body: "b".into() })
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { id } if id == "nope"));
    }

    #[tokio::test]
    async fn delete_removes_only_the_target() {
        let (store, _dir) = store();
        let a = store
            .save(DraftInput { id: None, title: "a".into(), body: String::new() })
            .await
            .unwrap();
        let b = store
            .save(DraftInput { id: None, title: "b".into(), body: String::new() })
            .await
            .unwrap();

        store.delete(&a.id).await.unwrap();
        let listed = store.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, b.id);

        let err = store.delete(&a.id).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn clear_is_idempotent() {
        let (store, _dir) = store();
        store
            .save(DraftInput { id: None, title: "a".into(), body: String::new() })
            .await
            .unwrap();

        store.clear().await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
        // clearing an already-empty store is fine
        store.clear().await.unwrap();
    }
}
