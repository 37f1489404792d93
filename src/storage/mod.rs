//! Durable session storage
//!
//! Client-local key/value slot mirroring the in-memory session. Only the
//! session store writes it; views never touch it directly. Two backends:
//! in-memory for ephemeral processes and tests, file-backed for sessions
//! that survive a process restart.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

use crate::error::{PortalError, Result};

/// Key/value backend for the durable session slot.
pub trait SessionStorage: Send + Sync {
    /// Read a value.
    fn get(&self, key: &str) -> Option<String>;
    /// Write a value, overwriting any prior one.
    fn set(&self, key: &str, value: &str) -> Result<()>;
    /// Remove a value; removing an absent key is a no-op.
    fn remove(&self, key: &str) -> Result<()>;
}

/// In-memory backend.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().remove(key);
        Ok(())
    }
}

/// File-backed JSON storage.
///
/// The whole map is rewritten on every mutation through a temp file and
/// rename, so a reader never observes a half-written slot.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl FileStorage {
    /// Open or create the storage file.
    ///
    /// An unreadable or malformed file starts the store empty; the portal
    /// degrades to requiring re-authentication rather than failing.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<HashMap<String, String>>(&raw) {
                Ok(entries) => entries,
                Err(err) => {
                    warn!(%err, path = %path.display(), "session file is malformed, starting empty");
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    fn persist(&self, entries: &HashMap<String, String>) -> Result<()> {
        let raw = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, raw)
            .map_err(|e| PortalError::Storage(format!("failed to write session file: {e}")))?;
        fs::rename(&tmp, &self.path)
            .map_err(|e| PortalError::Storage(format!("failed to replace session file: {e}")))?;
        Ok(())
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.write();
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write();
        if entries.remove(key).is_some() {
            self.persist(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("token"), None);

        storage.set("token", "abc").unwrap();
        assert_eq!(storage.get("token"), Some("abc".to_string()));

        storage.set("token", "xyz").unwrap();
        assert_eq!(storage.get("token"), Some("xyz".to_string()));

        storage.remove("token").unwrap();
        assert_eq!(storage.get("token"), None);
        // removing again is a no-op
        storage.remove("token").unwrap();
    }

    #[test]
    fn test_file_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let storage = FileStorage::open(&path).unwrap();
        storage.set("token", "abc").unwrap();
        storage.set("user", "{\"id\":\"u1\"}").unwrap();

        // a fresh handle over the same file sees the persisted values
        let reopened = FileStorage::open(&path).unwrap();
        assert_eq!(reopened.get("token"), Some("abc".to_string()));
        assert_eq!(reopened.get("user"), Some("{\"id\":\"u1\"}".to_string()));
    }

    #[test]
    fn test_file_storage_remove_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let storage = FileStorage::open(&path).unwrap();
        storage.set("token", "abc").unwrap();
        storage.remove("token").unwrap();

        let reopened = FileStorage::open(&path).unwrap();
        assert_eq!(reopened.get("token"), None);
    }

    #[test]
    fn test_file_storage_malformed_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json at all").unwrap();

        let storage = FileStorage::open(&path).unwrap();
        assert_eq!(storage.get("token"), None);
    }
}
