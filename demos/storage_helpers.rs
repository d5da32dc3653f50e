//! # Storage Helpers Example
//!
//! Walks through the helper layer on a temporary redb file:
//!
//! - Basic get/set/update/remove
//! - Bulk operations with key predicates
//! - JSON items
//! - TTL items with lazy expiry
//!
//! ## Running This Example
//!
//! ```bash
//! cargo run --example storage_helpers
//! ```

use anyhow::Result;
use kvstash::Storage;
use serde::{Deserialize, Serialize};
use tempfile::TempDir;

#[derive(Debug, Default, Serialize, Deserialize)]
struct Settings {
    theme: String,
    font_size: u8,
}

fn main() -> Result<()> {
    println!("=== kvstash Storage Helpers Example ===\n");

    let temp_dir = TempDir::new()?;
    let db_path = temp_dir.path().join("example.redb");
    let storage = Storage::file(&db_path)?;
    println!("Opened storage at: {}\n", db_path.display());

    // -------------------------------------------------------------------------
    // Core accessors
    // -------------------------------------------------------------------------
    println!("--- Core ---");
    storage.set("user:1", "alice")?;
    storage.set("user:2", "bob")?;
    storage.set("visits", "0")?;
    storage.update("visits", |v| {
        let n: u32 = v.and_then(|s| s.parse().ok()).unwrap_or(0);
        (n + 1).to_string()
    })?;
    println!("visits = {:?}", storage.get("visits")?);
    println!("keys   = {:?}\n", storage.keys()?);

    // -------------------------------------------------------------------------
    // Bulk operations
    // -------------------------------------------------------------------------
    println!("--- Bulk ---");
    let users = storage.get_items(|k| k.starts_with("user:"))?;
    println!("users  = {users:?}");
    storage.update_items(|k| k.starts_with("user:"), |v| v.unwrap_or_default().to_uppercase())?;
    println!("upper  = {:?}", storage.get_items(|k| k.starts_with("user:"))?);
    let removed = storage.remove_keys(|k| k.starts_with("user:"))?;
    println!("removed {removed} user keys\n");

    // -------------------------------------------------------------------------
    // JSON items
    // -------------------------------------------------------------------------
    println!("--- JSON ---");
    storage.update_json("settings", |s: Option<Settings>| {
        let mut s = s.unwrap_or_default();
        s.theme = "dark".to_string();
        s.font_size = 14;
        s
    })?;
    let settings: Option<Settings> = storage.get_json("settings")?;
    println!("settings = {settings:?}");
    storage.set("broken", "not json{")?;
    let broken: Option<Settings> = storage.get_json("broken")?;
    println!("broken   = {broken:?} (unreadable reads as absent)\n");

    // -------------------------------------------------------------------------
    // TTL items
    // -------------------------------------------------------------------------
    println!("--- TTL ---");
    storage.set_with_ttl("session", "token-123", 50)?;
    println!("fresh   = {:?}", storage.get_with_ttl("session")?);
    std::thread::sleep(std::time::Duration::from_millis(60));
    println!("stored  = {} (until next read)", storage.has("session")?);
    println!("expired = {:?}", storage.get_with_ttl("session")?);
    println!("stored  = {}", storage.has("session")?);

    println!("\n=== Done ===");
    Ok(())
}
