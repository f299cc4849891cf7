//! Shopping cart state.
//!
//! The cart owns its line items and the sidebar visibility flag. Every item
//! mutation is written through to storage before returning; the visibility
//! flag is session-local and always starts closed.
//!
//! # Invariants
//!
//! - At most one line per [`LineKey`] (product, size, colour).
//! - Every stored line has `quantity >= 1`.
//! - Every line total `price * quantity` is representable. Increments that
//!   would overflow it are refused, and such lines are dropped on load.

use stylehub_core::{CartLineItem, LineKey, NewCartItem, Price};

use crate::storage::{KeyValueStore, PersistentStore};

/// Default storage key for cart lines.
pub const DEFAULT_CART_KEY: &str = "stylehub-cart";

/// Cart line items plus the open/closed UI flag.
#[derive(Debug)]
pub struct CartState<S> {
    storage: PersistentStore<S>,
    key: String,
    items: Vec<CartLineItem>,
    is_open: bool,
}

impl<S: KeyValueStore> CartState<S> {
    /// Hydrate the cart from `key` in `store`.
    ///
    /// Lines with a zero quantity or an overflowing line total are dropped
    /// and duplicate identities are merged, so a hand-edited or legacy
    /// payload cannot break the invariants.
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let storage = PersistentStore::new(store);
        let key = key.into();
        let stored: Vec<CartLineItem> = storage.load(&key);
        let stored_len = stored.len();
        let items = normalize(&key, stored);
        if items.len() != stored_len {
            tracing::debug!(
                key = %key,
                stored = stored_len,
                kept = items.len(),
                "Repaired persisted cart lines"
            );
        }
        tracing::debug!(key = %key, lines = items.len(), "Cart hydrated");

        Self {
            storage,
            key,
            items,
            is_open: false,
        }
    }

    /// Add one unit of `item`.
    ///
    /// Increments the quantity of an existing line with the same identity,
    /// otherwise appends a new line with quantity 1. An increment whose line
    /// total would overflow leaves the quantity unchanged.
    pub fn add_item(&mut self, item: NewCartItem) {
        let key = item.key();
        if let Some(existing) = self.find_mut(&key) {
            let quantity = existing.quantity.saturating_add(1);
            if existing.price.checked_times(quantity).is_some() {
                existing.quantity = quantity;
            } else {
                tracing::warn!(
                    product_id = %key.product_id,
                    quantity,
                    "Line total would overflow, quantity unchanged"
                );
            }
        } else {
            self.items.push(item.into_line());
        }
        self.commit("add_item");
    }

    /// Remove the line matching `key`, if any.
    pub fn remove_item(&mut self, key: &LineKey) {
        self.items.retain(|item| !key.matches(item));
        self.commit("remove_item");
    }

    /// Set the quantity of the line matching `key`.
    ///
    /// A quantity of zero or less removes the line. No line is created when
    /// nothing matches, and a quantity whose line total would overflow
    /// leaves the line unchanged.
    pub fn set_quantity(&mut self, key: &LineKey, quantity: i64) {
        if quantity <= 0 {
            self.items.retain(|item| !key.matches(item));
        } else if let Some(existing) = self.find_mut(key) {
            let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
            if existing.price.checked_times(quantity).is_some() {
                existing.quantity = quantity;
            } else {
                tracing::warn!(
                    product_id = %key.product_id,
                    quantity,
                    "Line total would overflow, quantity unchanged"
                );
            }
        }
        self.commit("set_quantity");
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
        self.commit("clear");
    }

    fn find_mut(&mut self, key: &LineKey) -> Option<&mut CartLineItem> {
        self.items.iter_mut().find(|item| key.matches(item))
    }

    fn commit(&self, op: &'static str) {
        self.storage.save(&self.key, &self.items);
        tracing::debug!(
            op,
            key = %self.key,
            lines = self.items.len(),
            units = self.item_count(),
            "Cart updated"
        );
    }
}

impl<S> CartState<S> {
    /// Show the cart sidebar.
    pub const fn open(&mut self) {
        self.is_open = true;
    }

    /// Hide the cart sidebar.
    pub const fn close(&mut self) {
        self.is_open = false;
    }

    /// Flip the sidebar visibility.
    pub const fn toggle_open(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Sum of `price * quantity` over all lines, saturating at [`Price::MAX`].
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Whether the cart sidebar is visible.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The line matching `key`, if any.
    #[must_use]
    pub fn get(&self, key: &LineKey) -> Option<&CartLineItem> {
        self.items.iter().find(|item| key.matches(item))
    }

    /// The storage key this cart persists under.
    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.key
    }
}

fn normalize(key: &str, stored: Vec<CartLineItem>) -> Vec<CartLineItem> {
    let mut items: Vec<CartLineItem> = Vec::with_capacity(stored.len());
    for line in stored.into_iter().filter(|line| line.quantity > 0) {
        if line.checked_line_total().is_none() {
            tracing::warn!(
                key,
                product_id = %line.product_id,
                "Dropping cart line with overflowing total"
            );
            continue;
        }
        let line_key = line.key();
        if let Some(existing) = items.iter_mut().find(|item| line_key.matches(item)) {
            let quantity = existing.quantity.saturating_add(line.quantity);
            if existing.price.checked_times(quantity).is_some() {
                existing.quantity = quantity;
            } else {
                tracing::warn!(
                    key,
                    product_id = %line.product_id,
                    "Merged quantity would overflow, keeping first line"
                );
            }
        } else {
            items.push(line);
        }
    }
    items
}
