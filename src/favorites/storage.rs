//! Key-value storage backends for locally persisted state
//!
//! The favorites store reads and writes through the [`Storage`] trait so
//! tests can substitute an in-memory fake for the real file-backed store.

use anyhow::{Context, Result};
use std::{
    collections::HashMap,
    fs,
    path::PathBuf,
    sync::Mutex,
};

/// A minimal persisted key-value store.
///
/// Values are opaque strings; callers decide on the encoding. Reads of an
/// absent key yield `Ok(None)` rather than an error.
pub trait Storage: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// File-backed storage: one file per key under a data directory.
///
/// Writes are plain synchronous file writes with no locking; concurrent
/// writers follow last-write-wins semantics.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let value = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Some(value))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create {}", self.dir.display()))?;
        let path = self.path_for(key);
        fs::write(&path, value)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}

/// In-memory storage used by tests.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().expect("storage lock poisoned");
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().expect("storage lock poisoned");
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        assert!(storage.read("missing").unwrap().is_none());

        storage.write("key", "value").unwrap();
        assert_eq!(storage.read("key").unwrap().as_deref(), Some("value"));

        storage.write("key", "updated").unwrap();
        assert_eq!(storage.read("key").unwrap().as_deref(), Some("updated"));
    }

    #[test]
    fn test_file_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        assert!(storage.read("missing").unwrap().is_none());

        storage.write("favorites", "[\"1\"]").unwrap();
        assert_eq!(
            storage.read("favorites").unwrap().as_deref(),
            Some("[\"1\"]")
        );
    }

    #[test]
    fn test_file_storage_creates_data_dir_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested").join("data");
        let storage = FileStorage::new(&nested);

        storage.write("key", "value").unwrap();
        assert!(nested.join("key.json").exists());
    }
}
