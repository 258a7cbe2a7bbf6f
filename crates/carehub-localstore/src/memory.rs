//! In-process key-value store
//!
//! Session-scoped storage: values live as long as the process and are
//! shared across clones.

use crate::KeyValueStore;
use dashmap::DashMap;
use std::sync::Arc;

/// Concurrent in-memory store
///
/// Clones share the same underlying map, so a clone handed to another
/// component observes the same session state.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<DashMap<String, String>>,
}

impl MemoryStore {
    /// Create new empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check whether the store is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key).map(|v| v.value().clone())
    }

    fn put(&self, key: &str, value: &str) {
        self.inner.insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.inner.remove(key);
    }

    fn keys(&self) -> Vec<String> {
        self.inner.iter().map(|e| e.key().clone()).collect()
    }
}
