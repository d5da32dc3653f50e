//! End-to-end scenarios across core, bulk, JSON and TTL helpers.
//!
//! Run with:
//! ```bash
//! cargo test --test integration
//! ```

use kvstash::{ManualClock, MemoryBackend, Storage, StorageConfig};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tempfile::TempDir;

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_remove_keys_by_prefix_leaves_others() {
    let backend = MemoryBackend::from_iter([("a:1", "x"), ("a:2", "y"), ("b:1", "z")]);
    let storage = Storage::custom(backend.clone());

    storage.remove_keys(|k| k.starts_with("a:")).unwrap();

    let remaining = backend.snapshot();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining.get("b:1").map(String::as_str), Some("z"));
}

#[test]
fn test_update_items_increment() {
    let storage = Storage::custom(MemoryBackend::from_iter([("a", "1"), ("b", "2")]));

    storage
        .update_items(
            |_| true,
            |v| {
                let n: u64 = v.as_deref().unwrap_or("0").parse().unwrap();
                (n + 1).to_string()
            },
        )
        .unwrap();

    assert_eq!(storage.get("a").unwrap().as_deref(), Some("2"));
    assert_eq!(storage.get("b").unwrap().as_deref(), Some("3"));
}

#[test]
fn test_ttl_lifecycle() {
    let clock = Arc::new(ManualClock::new(1_700_000_000_000));
    let storage = Storage::memory().with_clock(Arc::clone(&clock));

    // absent
    assert!(storage.get_with_ttl("token").unwrap().is_none());

    // present-unexpired
    storage.set_with_ttl("token", "secret", 10).unwrap();
    assert_eq!(
        storage.get_with_ttl("token").unwrap().as_deref(),
        Some("secret")
    );

    // present-expired: still stored until read
    clock.advance(11);
    assert!(storage.has("token").unwrap());

    // absent again after the read purges it
    assert!(storage.get_with_ttl("token").unwrap().is_none());
    assert!(!storage.has("token").unwrap());
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
struct Cart {
    items: Vec<String>,
}

#[test]
fn test_json_items_survive_reopen() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("carts.redb");

    {
        let storage = Storage::from_config(&StorageConfig::file(&path)).unwrap();
        storage
            .update_json("cart:42", |cart: Option<Cart>| {
                let mut cart = cart.unwrap_or_default();
                cart.items.push("apple".to_string());
                cart
            })
            .unwrap();
    }

    let storage = Storage::file(&path).unwrap();
    let cart: Cart = storage.get_json("cart:42").unwrap().unwrap();
    assert_eq!(cart.items, vec!["apple"]);
}

#[test]
fn test_mixed_helpers_share_keyspace() {
    let clock = Arc::new(ManualClock::new(0));
    let storage = Storage::memory().with_clock(Arc::clone(&clock));

    storage.set("plain:1", "p").unwrap();
    storage.set_json("json:1", &vec![1, 2, 3]).unwrap();
    storage.set_with_ttl("ttl:1", "t", 5).unwrap();

    assert_eq!(storage.keys().unwrap().len(), 3);

    clock.advance(6);
    let purged = storage.purge_expired(|_| true).unwrap();
    assert_eq!(purged, 1);

    let items = storage.get_items(|_| true).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items["plain:1"], "p");
    assert_eq!(items["json:1"], "[1,2,3]");
}

#[test]
fn test_clones_share_backend_across_threads() {
    let storage = Storage::memory();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let storage = storage.clone();
            std::thread::spawn(move || {
                storage.set(&format!("worker:{i}"), "done").unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(storage.filter_keys(|k| k.starts_with("worker:")).unwrap().len(), 4);
}
