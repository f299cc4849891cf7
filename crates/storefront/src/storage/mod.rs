//! Durable key-value persistence for cart and wishlist snapshots.
//!
//! # Backends
//!
//! - [`FileStore`] - one JSON file per key under a data directory
//! - [`MemoryStore`] - shared in-process map, used in tests and for
//!   ephemeral sessions
//!
//! # Failure policy
//!
//! [`PersistentStore`] is fail-open. A missing, empty, or corrupt payload
//! loads as an empty collection, a record that no longer decodes is skipped
//! without losing its neighbours, and a failed write is logged and dropped.
//! Callers never see a [`StorageError`] from `load` or `save`; the in-memory
//! state stays authoritative for the rest of the session.

mod file;
mod memory;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading the raw payload failed.
    #[error("failed to read {key}: {source}")]
    Read {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing the raw payload failed.
    #[error("failed to write {key}: {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The payload is not a valid collection.
    #[error("corrupt payload at {key}: {source}")]
    Parse {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The collection could not be serialized.
    #[error("failed to encode {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The key cannot be mapped onto the backend.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    /// The backend refuses access (disabled, quota exceeded, poisoned).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// A named-key text store that survives process restarts.
///
/// Both methods take `&self`; backends that need mutation use interior
/// mutability so one store can be shared by the cart and the wishlist.
pub trait KeyValueStore {
    /// Read the raw payload at `key`. `Ok(None)` means the key was never written.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the payload at `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot be written.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}

/// JSON collection round-trip over a [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct PersistentStore<S> {
    store: S,
}

impl<S: KeyValueStore> PersistentStore<S> {
    /// Wrap a backend.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// The wrapped backend.
    pub const fn backend(&self) -> &S {
        &self.store
    }

    /// Load the collection at `key`, treating any failure as "no prior state".
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        match self.try_load(key) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(key, error = %e, "Discarding unreadable persisted state");
                Vec::new()
            }
        }
    }

    /// Save the collection at `key`. Failures are logged and swallowed.
    pub fn save<T: Serialize>(&self, key: &str, items: &[T]) {
        if let Err(e) = self.try_save(key, items) {
            tracing::warn!(key, error = %e, "Failed to persist state, keeping in-memory copy");
        }
    }

    /// Load the collection at `key`, surfacing backend and parse errors.
    ///
    /// Absent and blank payloads are an empty collection, not an error.
    /// Elements that do not decode as `T` are skipped and logged with their
    /// index; the remaining elements keep their order.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend fails or the payload is not
    /// a JSON array.
    pub fn try_load<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, StorageError> {
        let Some(raw) = self.store.read(key)? else {
            return Ok(Vec::new());
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        let records: Vec<Value> =
            serde_json::from_str(&raw).map_err(|source| StorageError::Parse {
                key: key.to_string(),
                source,
            })?;

        let items = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value(record) {
                Ok(item) => Some(item),
                Err(e) => {
                    tracing::warn!(key, index, error = %e, "Skipping unreadable persisted record");
                    None
                }
            })
            .collect();
        Ok(items)
    }

    /// Save the collection at `key`, surfacing backend and encoding errors.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if encoding or the backend write fails.
    pub fn try_save<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(items).map_err(|source| StorageError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.store.write(key, &raw)
    }
}
