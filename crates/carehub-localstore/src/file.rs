//! JSON-file-backed key-value store
//!
//! Durable storage for hints and mock data: the whole map is one JSON
//! object on disk, loaded on open and written through on every mutation.

use crate::KeyValueStore;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Durable store backed by a single JSON file
///
/// Absent, unreadable, or malformed file content starts the store empty;
/// write failures are logged and swallowed. Callers never observe storage
/// errors, matching the local-storage semantics of [`KeyValueStore`].
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl JsonFileStore {
    /// Open a store at `path`, loading any existing well-formed content
    #[must_use]
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = load_entries(&path);
        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    /// Path of the backing file
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &BTreeMap<String, String>) {
        let serialized = match serde_json::to_string_pretty(entries) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!("failed to serialize local store: {e}");
                return;
            }
        };
        if let Err(e) = std::fs::write(&self.path, serialized) {
            tracing::warn!("failed to persist local store to {:?}: {e}", self.path);
        }
    }
}

fn load_entries(path: &Path) -> BTreeMap<String, String> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(_) => return BTreeMap::new(),
    };
    match serde_json::from_str(&raw) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("malformed local store at {path:?}, starting empty: {e}");
            BTreeMap::new()
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn put(&self, key: &str, value: &str) {
        let mut entries = self.entries.lock();
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.entries.lock();
        if entries.remove(key).is_some() {
            self.persist(&entries);
        }
    }

    fn keys(&self) -> Vec<String> {
        self.entries.lock().keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn temp_store_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("store.json")
    }

    #[test]
    fn open_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(temp_store_path(&dir));
        assert_eq!(store.get("k"), None);
        assert!(store.keys().is_empty());
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_store_path(&dir);

        let store = JsonFileStore::open(&path);
        store.put("viewer_role", "carer");
        drop(store);

        let reopened = JsonFileStore::open(&path);
        assert_eq!(reopened.get("viewer_role"), Some("carer".to_string()));
    }

    #[test]
    fn malformed_file_treated_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_store_path(&dir);
        std::fs::write(&path, "not json {{{").unwrap();

        let store = JsonFileStore::open(&path);
        assert_eq!(store.get("k"), None);

        // The store stays usable after the reset
        store.put("k", "v");
        assert_eq!(store.get("k"), Some("v".to_string()));
    }

    #[test]
    fn unexpected_shape_treated_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_store_path(&dir);
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let store = JsonFileStore::open(&path);
        assert!(store.keys().is_empty());
    }

    #[test]
    fn remove_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_store_path(&dir);

        let store = JsonFileStore::open(&path);
        store.put("a", "1");
        store.put("b", "2");
        store.remove("a");
        drop(store);

        let reopened = JsonFileStore::open(&path);
        assert_eq!(reopened.get("a"), None);
        assert_eq!(reopened.get("b"), Some("2".to_string()));
    }
}
