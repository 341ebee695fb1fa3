//! Key-value persistence backends
//!
//! The expense store only needs string values under a handful of keys. A
//! write replaces every given key in one step: the file backend rewrites the
//! whole file atomically, so either all keys change or none do.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{ExpenseError, ExpenseResult};

use super::file_io::{read_json, write_json_atomic};

/// Local persistent key-value storage
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> ExpenseResult<Option<String>>;

    /// Replace the values of all given keys in a single write
    fn set_all(&mut self, entries: &[(&str, String)]) -> ExpenseResult<()>;

    /// Replace a single value
    fn set(&mut self, key: &str, value: String) -> ExpenseResult<()> {
        self.set_all(&[(key, value)])
    }
}

/// Key-value store kept as one JSON object on disk
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`
    ///
    /// A missing file is an empty store. A file that can't be parsed is moved
    /// aside to `<name>.corrupt` and the store starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match read_json::<BTreeMap<String, String>, _>(&path) {
            Ok(values) => values,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "storage unreadable, starting empty");
                quarantine(&path);
                BTreeMap::new()
            }
        };

        debug!(path = %path.display(), keys = values.len(), "opened file store");
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn quarantine(path: &Path) {
    let target = path.with_extension("json.corrupt");
    if let Err(e) = std::fs::rename(path, &target) {
        warn!(path = %path.display(), error = %e, "could not move unreadable storage aside");
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> ExpenseResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set_all(&mut self, entries: &[(&str, String)]) -> ExpenseResult<()> {
        let mut next = self.values.clone();
        for (key, value) in entries {
            next.insert((*key).to_string(), value.clone());
        }

        write_json_atomic(&self.path, &next)?;
        self.values = next;
        Ok(())
    }
}

/// In-memory store with switchable failures, for tests and dry runs
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value without counting it as a write
    pub fn with_value(mut self, key: &str, value: impl Into<String>) -> Self {
        self.values.insert(key.to_string(), value.into());
        self
    }

    /// Make every subsequent read fail
    pub fn fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    /// Make every subsequent write fail, as a full quota would
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Number of successful writes so far
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Raw stored value, bypassing failure injection
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> ExpenseResult<Option<String>> {
        if self.fail_reads {
            return Err(ExpenseError::Storage(format!("read of '{}' failed", key)));
        }
        Ok(self.values.get(key).cloned())
    }

    fn set_all(&mut self, entries: &[(&str, String)]) -> ExpenseResult<()> {
        if self.fail_writes {
            return Err(ExpenseError::Storage("storage quota exceeded".into()));
        }
        for (key, value) in entries {
            self.values.insert((*key).to_string(), value.clone());
        }
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_persists_across_opens() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("storage.json");

        let mut store = FileStore::open(&path);
        assert_eq!(store.get("monthlyLimit").unwrap(), None);
        store
            .set_all(&[("monthlyLimit", "50.00".into()), ("expenses", "[]".into())])
            .unwrap();

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("monthlyLimit").unwrap().as_deref(), Some("50.00"));
        assert_eq!(reopened.get("expenses").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_store_quarantines_garbage() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");
        std::fs::write(&path, "{{{").unwrap();

        let store = FileStore::open(&path);
        assert_eq!(store.get("expenses").unwrap(), None);
        assert!(temp_dir.path().join("storage.json.corrupt").exists());
    }

    #[test]
    fn test_file_store_failed_write_keeps_previous_values() {
        let temp_dir = TempDir::new().unwrap();
        // A directory where the file should be makes the rename fail
        let path = temp_dir.path().join("storage.json");
        std::fs::create_dir_all(path.join("blocker")).unwrap();

        let mut store = FileStore::open(temp_dir.path().join("other.json"));
        store.set("theme", "dark".into()).unwrap();
        store.path = path;

        assert!(store.set("theme", "light".into()).is_err());
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_memory_store_failure_injection() {
        let mut store = MemoryStore::new().with_value("theme", "light");
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));

        store.fail_writes(true);
        assert!(store.set("theme", "dark".into()).unwrap_err().is_storage());
        assert_eq!(store.raw("theme"), Some("light"));
        assert_eq!(store.write_count(), 0);

        store.fail_reads(true);
        assert!(store.get("theme").is_err());
    }
}
