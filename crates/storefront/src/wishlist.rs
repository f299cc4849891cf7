//! Wishlist state.
//!
//! A set of product snapshots keyed by product id, persisted after every
//! mutation.

use serde::Serialize;
use stylehub_core::{Identified, InvalidInputError, ProductId, WishlistEntry};

use crate::storage::{KeyValueStore, PersistentStore};

/// Default storage key for wishlist entries.
pub const DEFAULT_WISHLIST_KEY: &str = "wishlist";

/// Saved products, unique by id, in the order they were added.
#[derive(Debug)]
pub struct WishlistState<S> {
    storage: PersistentStore<S>,
    key: String,
    items: Vec<WishlistEntry>,
}

impl<S: KeyValueStore> WishlistState<S> {
    /// Hydrate the wishlist from `key` in `store`. Later duplicates of an id
    /// are dropped.
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let storage = PersistentStore::new(store);
        let key = key.into();
        let stored: Vec<WishlistEntry> = storage.load(&key);

        let mut items: Vec<WishlistEntry> = Vec::with_capacity(stored.len());
        for entry in stored {
            if !items.iter().any(|existing| existing.id() == entry.id()) {
                items.push(entry);
            }
        }
        tracing::debug!(key = %key, entries = items.len(), "Wishlist hydrated");

        Self {
            storage,
            key,
            items,
        }
    }

    /// Save a snapshot of `product`.
    ///
    /// Returns `true` if the product was added, `false` if its id was
    /// already present (the stored snapshot is left untouched).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError`] if the product has no usable id or is
    /// not an object record.
    pub fn add<P: Identified + Serialize>(&mut self, product: &P) -> Result<bool, InvalidInputError> {
        let entry = WishlistEntry::snapshot(product)?;
        let added = !self.contains(entry.id());
        if added {
            self.items.push(entry);
        }
        self.commit("add");
        Ok(added)
    }

    /// Remove the entry for `product_id`, if present.
    pub fn remove(&mut self, product_id: &ProductId) {
        self.items.retain(|entry| entry.id() != product_id);
        self.commit("remove");
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.items.clear();
        self.commit("clear");
    }

    fn commit(&self, op: &'static str) {
        self.storage.save(&self.key, &self.items);
        tracing::debug!(op, key = %self.key, entries = self.items.len(), "Wishlist updated");
    }
}

impl<S> WishlistState<S> {
    /// Entries in insertion order.
    #[must_use]
    pub fn items(&self) -> &[WishlistEntry] {
        &self.items
    }

    /// Number of saved products.
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Whether `product_id` is saved.
    #[must_use]
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.items.iter().any(|entry| entry.id() == product_id)
    }

    /// The storage key this wishlist persists under.
    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.key
    }
}
