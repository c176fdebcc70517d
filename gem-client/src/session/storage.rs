//! Key/value backends for persisted auth state
//!
//! Two locations exist: a durable one that survives restarts (the token and
//! remembered users) and a session-scoped one that does not.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::error::{ClientError, ClientResult};

/// String key/value store
pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> ClientResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> ClientResult<()>;
    fn remove(&self, key: &str) -> ClientResult<()>;
}

/// In-process storage, gone when the process exits
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> ClientResult<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> ClientResult<()> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> ClientResult<()> {
        self.entries.lock().remove(key);
        Ok(())
    }
}

/// Durable storage: one JSON object file holding every key
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(base_path: impl Into<PathBuf>, filename: &str) -> Self {
        Self {
            path: base_path.into().join(filename),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn ensure_dir(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    fn load(&self) -> ClientResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let json = fs::read_to_string(&self.path)?;
        serde_json::from_str(&json).map_err(|e| {
            ClientError::Storage(format!("{}: {}", self.path.display(), e))
        })
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> ClientResult<()> {
        if entries.is_empty() {
            if self.path.exists() {
                fs::remove_file(&self.path)?;
            }
            return Ok(());
        }
        self.ensure_dir()?;
        let json = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> ClientResult<Option<String>> {
        let _guard = self.lock.lock();
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> ClientResult<()> {
        let _guard = self.lock.lock();
        // A corrupt file is replaced rather than blocking every write
        let mut entries = self.load().unwrap_or_default();
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn remove(&self, key: &str) -> ClientResult<()> {
        let _guard = self.lock.lock();
        let mut entries = self.load().unwrap_or_default();
        entries.remove(key);
        self.save(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_storage() {
        let storage = MemoryStorage::new();
        storage.set("user", "{}").unwrap();
        assert_eq!(storage.get("user").unwrap().as_deref(), Some("{}"));
        storage.remove("user").unwrap();
        assert!(storage.get("user").unwrap().is_none());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_file_storage_persists_across_instances() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path().join("auth"), "storage.json");
        storage.set("token-gem", "abc").unwrap();
        storage.set("rememberMe", "true").unwrap();
        assert!(storage.exists());

        let reopened = FileStorage::new(dir.path().join("auth"), "storage.json");
        assert_eq!(reopened.get("token-gem").unwrap().as_deref(), Some("abc"));

        reopened.remove("token-gem").unwrap();
        reopened.remove("rememberMe").unwrap();
        assert!(!reopened.exists());
    }

    #[test]
    fn test_file_storage_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path(), "storage.json");
        fs::write(storage.path(), "not json").unwrap();

        assert!(matches!(storage.get("user"), Err(ClientError::Storage(_))));
        storage.set("user", "x").unwrap();
        assert_eq!(storage.get("user").unwrap().as_deref(), Some("x"));
    }
}
