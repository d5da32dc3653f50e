//! # kvstash
//!
//! Convenience helpers over a synchronous key-value string store.
//!
//! The store itself is a [`StorageBackend`]: anything that can get, set and
//! remove strings by key and enumerate its keys by index. [`Storage`] wraps
//! one and adds bulk operations driven by key predicates, JSON items, and
//! TTL items that expire lazily when read.
//!
//! ## Example
//!
//! ```
//! use kvstash::Storage;
//! use serde_json::json;
//!
//! let storage = Storage::memory();
//!
//! storage.set("user:1", "alice")?;
//! storage.set("user:2", "bob")?;
//! storage.set_json("settings", &json!({"theme": "dark"}))?;
//! storage.set_with_ttl("session", "token", 60_000)?;
//!
//! let users = storage.get_items(|k| k.starts_with("user:"))?;
//! assert_eq!(users.len(), 2);
//!
//! storage.remove_keys(|k| k.starts_with("user:"))?;
//! assert!(!storage.has("user:1")?);
//! # Ok::<(), kvstash::Error>(())
//! ```
//!
//! Durability and atomicity are whatever the backend provides; nothing here
//! batches writes or guards read-modify-write cycles.

pub mod clock;
pub mod config;
pub mod error;
pub mod paths;
pub mod storage;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{BackendKind, StorageConfig};
pub use error::{Error, Result};
pub use storage::{MemoryBackend, RedbBackend, Storage, StorageBackend, TtlEnvelope};
