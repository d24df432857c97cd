//! Durable client-side key/value storage.
//!
//! The web client kept small flags (theme choice, dismissed announcements,
//! table selections) in the browser's local storage. The desktop client keeps
//! the same string keys in a single redb table so they survive restarts.
//!
//! Callers that only care about "flag present or not" should treat every
//! error as "absent" and carry on; see [`ClientStorage::get_or_absent`].

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use redb::{Database, TableDefinition};

use crate::error::UiError;

const CLIENT_STORAGE_TABLE: TableDefinition<&str, &str> = TableDefinition::new("client_storage");

/// Shared handle to whichever storage backend the app was started with.
pub type SharedStorage = Arc<dyn ClientStorage>;

/// String key/value storage that survives page reloads (or app restarts).
pub trait ClientStorage: Send + Sync {
    /// Read a value. `Ok(None)` means the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, UiError>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), UiError>;

    /// Remove a key. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), UiError>;

    /// Read a value, logging and swallowing any backend failure.
    fn get_or_absent(&self, key: &str) -> Option<String> {
        match self.get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, "storage read failed, treating as absent: {}", e);
                None
            }
        }
    }

    /// Write a value, logging and swallowing any backend failure.
    fn set_or_skip(&self, key: &str, value: &str) {
        if let Err(e) = self.set(key, value) {
            tracing::warn!(key, "storage write skipped: {}", e);
        }
    }
}

/// Storage layer using redb for ACID-compliant persistence
#[derive(Clone)]
pub struct RedbStorage {
    db: Arc<RwLock<Database>>,
}

impl RedbStorage {
    /// Open (or create) the storage file at `path`.
    ///
    /// Creates the parent directory and the key/value table if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, UiError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(CLIENT_STORAGE_TABLE)?;
        }
        write_txn.commit()?;

        tracing::debug!(path = %path.display(), "client storage opened");

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }
}

impl ClientStorage for RedbStorage {
    fn get(&self, key: &str) -> Result<Option<String>, UiError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(CLIENT_STORAGE_TABLE)?;
        let value = table.get(key)?.map(|v| v.value().to_string());
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), UiError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(CLIENT_STORAGE_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), UiError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(CLIENT_STORAGE_TABLE)?;
            table.remove(key)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

/// In-memory storage, used by tests and as a fallback when the storage file
/// cannot be opened.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl ClientStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, UiError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), UiError> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), UiError> {
        self.entries.write().remove(key);
        Ok(())
    }
}

/// Open the redb file, falling back to memory storage if that fails.
pub fn open_or_memory(path: impl AsRef<Path>) -> SharedStorage {
    match RedbStorage::open(path.as_ref()) {
        Ok(storage) => Arc::new(storage),
        Err(e) => {
            tracing::error!(
                path = %path.as_ref().display(),
                "failed to open client storage, falling back to memory: {}",
                e
            );
            Arc::new(MemoryStorage::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_storage() -> (RedbStorage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("client.redb");
        let storage = RedbStorage::open(&db_path).unwrap();
        (storage, temp_dir)
    }

    #[test]
    fn test_storage_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("nested").join("dirs").join("client.redb");
        let _storage = RedbStorage::open(&db_path).unwrap();
        assert!(db_path.exists());
    }

    #[test]
    fn test_set_and_get() {
        let (storage, _dir) = create_test_storage();
        storage.set("theme", "dark").unwrap();
        assert_eq!(storage.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_missing_key_is_none() {
        let (storage, _dir) = create_test_storage();
        assert!(storage.get("nope").unwrap().is_none());
    }

    #[test]
    fn test_remove() {
        let (storage, _dir) = create_test_storage();
        storage.set("k", "v").unwrap();
        storage.remove("k").unwrap();
        assert!(storage.get("k").unwrap().is_none());
        // Removing again is fine
        storage.remove("k").unwrap();
    }

    #[test]
    fn test_values_persist_across_instances() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("client.redb");
        {
            let storage = RedbStorage::open(&db_path).unwrap();
            storage.set("ml_announce_dismissed_welcome", "1").unwrap();
        }
        let storage = RedbStorage::open(&db_path).unwrap();
        assert_eq!(
            storage.get("ml_announce_dismissed_welcome").unwrap().as_deref(),
            Some("1")
        );
    }

    #[test]
    fn test_memory_storage() {
        let storage = MemoryStorage::new();
        assert!(storage.is_empty());
        storage.set("a", "1").unwrap();
        assert_eq!(storage.len(), 1);
        assert_eq!(storage.get_or_absent("a").as_deref(), Some("1"));
        storage.remove("a").unwrap();
        assert!(storage.get_or_absent("a").is_none());
    }
}
