//! Integration tests for wishlist persistence.

#![allow(clippy::unwrap_used)]

use serde_json::json;
use stylehub_core::{InvalidInputError, ProductId};
use stylehub_storefront::storage::{FileStore, MemoryStore};
use stylehub_storefront::wishlist::{DEFAULT_WISHLIST_KEY, WishlistState};

#[test]
fn test_snapshots_survive_reload_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    let scarf = json!({ "Id": 9, "name": "Scarf", "price": 12.5, "colors": [{ "name": "Red" }] });

    let mut wishlist = WishlistState::load(store.clone(), DEFAULT_WISHLIST_KEY);
    wishlist.add(&scarf).unwrap();
    wishlist.add(&json!({ "Id": 4, "name": "Gloves" })).unwrap();

    let reloaded = WishlistState::load(store, DEFAULT_WISHLIST_KEY);
    let ids: Vec<&str> = reloaded.items().iter().map(|e| e.id().as_str()).collect();
    assert_eq!(ids, ["9", "4"]);
    assert_eq!(serde_json::to_value(&reloaded.items()[0]).unwrap(), scarf);
}

#[test]
fn test_duplicate_add_writes_single_entry() {
    let store = MemoryStore::new();
    let mut wishlist = WishlistState::load(store.clone(), DEFAULT_WISHLIST_KEY);
    wishlist.add(&json!({ "Id": 1 })).unwrap();
    wishlist.add(&json!({ "id": "1" })).unwrap();

    let raw: Vec<serde_json::Value> =
        serde_json::from_str(&store.raw(DEFAULT_WISHLIST_KEY).unwrap()).unwrap();
    assert_eq!(raw.len(), 1);
}

#[test]
fn test_invalid_records_are_rejected() {
    let store = MemoryStore::new();
    let mut wishlist = WishlistState::load(store, DEFAULT_WISHLIST_KEY);

    assert_eq!(
        wishlist.add(&json!({ "name": "No id" })).unwrap_err(),
        InvalidInputError::MissingProductId
    );
    assert_eq!(
        wishlist.add(&json!({ "Id": "  " })).unwrap_err(),
        InvalidInputError::MissingProductId
    );
    assert_eq!(wishlist.count(), 0);
}

#[test]
fn test_remove_then_reload() {
    let store = MemoryStore::new();
    let mut wishlist = WishlistState::load(store.clone(), DEFAULT_WISHLIST_KEY);
    wishlist.add(&json!({ "Id": 1 })).unwrap();
    wishlist.add(&json!({ "Id": 2 })).unwrap();
    wishlist.remove(&ProductId::from(1));
    wishlist.remove(&ProductId::from(99));

    let reloaded = WishlistState::load(store, DEFAULT_WISHLIST_KEY);
    assert!(!reloaded.contains(&ProductId::from(1)));
    assert!(reloaded.contains(&ProductId::from(2)));
    assert_eq!(reloaded.count(), 1);
}

#[test]
fn test_unreadable_storage_starts_empty() {
    let store = MemoryStore::new();
    store.insert_raw(DEFAULT_WISHLIST_KEY, "not json at all");
    let wishlist = WishlistState::load(store.clone(), DEFAULT_WISHLIST_KEY);
    assert_eq!(wishlist.count(), 0);

    store.set_fail_reads(true);
    let wishlist = WishlistState::load(store, DEFAULT_WISHLIST_KEY);
    assert_eq!(wishlist.count(), 0);
}

#[test]
fn test_one_bad_record_on_disk_keeps_the_rest() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("wishlist.json"),
        r#"[{"Id": 1, "name": "Belt"}, "stray string", {"name": "No id"}, {"id": "7"}]"#,
    )
    .unwrap();
    let store = FileStore::new(dir.path());

    let wishlist = WishlistState::load(store, DEFAULT_WISHLIST_KEY);
    let ids: Vec<&str> = wishlist.items().iter().map(|e| e.id().as_str()).collect();
    assert_eq!(ids, ["1", "7"]);
}
