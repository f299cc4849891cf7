//! In-process storage backend.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::{KeyValueStore, StorageError};

/// A cloneable in-memory key-value store.
///
/// Clones share the same map, so a cart and a wishlist built from clones of
/// one `MemoryStore` see each other's keys, like two slices of one browser
/// profile. Reads and writes can be made to fail to exercise the fail-open
/// policy.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a raw payload at `key`, bypassing serialization.
    pub fn insert_raw(&self, key: &str, value: &str) {
        if let Ok(mut inner) = self.lock() {
            inner.entries.insert(key.to_string(), value.to_string());
        }
    }

    /// The raw payload at `key`, if any.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.lock().ok()?.entries.get(key).cloned()
    }

    /// Make subsequent reads fail (or succeed again).
    pub fn set_fail_reads(&self, fail: bool) {
        if let Ok(mut inner) = self.lock() {
            inner.fail_reads = fail;
        }
    }

    /// Make subsequent writes fail (or succeed again), as with a full quota.
    pub fn set_fail_writes(&self, fail: bool) {
        if let Ok(mut inner) = self.lock() {
            inner.fail_writes = fail;
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, StorageError> {
        self.inner
            .lock()
            .map_err(|_| StorageError::Unavailable("memory store lock poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let inner = self.lock()?;
        if inner.fail_reads {
            return Err(StorageError::Unavailable(format!("reads disabled for {key}")));
        }
        Ok(inner.entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut inner = self.lock()?;
        if inner.fail_writes {
            return Err(StorageError::Unavailable(format!("quota exceeded writing {key}")));
        }
        inner.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_entries() {
        let a = MemoryStore::new();
        let b = a.clone();
        a.write("k", "v").unwrap();
        assert_eq!(b.read("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_missing_key_reads_none() {
        assert!(MemoryStore::new().read("k").unwrap().is_none());
    }

    #[test]
    fn test_failing_writes_leave_previous_value() {
        let store = MemoryStore::new();
        store.write("k", "old").unwrap();
        store.set_fail_writes(true);
        assert!(store.write("k", "new").is_err());
        store.set_fail_writes(false);
        assert_eq!(store.raw("k").as_deref(), Some("old"));
    }
}
