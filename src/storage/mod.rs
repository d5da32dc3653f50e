//! Storage helpers over pluggable string backends.
//!
//! [`Storage`] wraps any [`StorageBackend`] and layers on:
//!
//! - core accessors (`get`, `set`, `has`, `update`, `remove`, `keys`)
//! - predicate-driven bulk operations (`filter_keys`, `get_items`,
//!   `remove_keys`, `update_items`)
//! - JSON items (`get_json`, `set_json`, `update_json`)
//! - TTL items with lazy, read-time expiry (`get_with_ttl`, `set_with_ttl`)
//!
//! Bundled backends:
//!
//! - **RedbBackend**: persistent redb file (default for the host storage)
//! - **MemoryBackend**: non-persistent map (testing/embedding)
//!
//! # Custom Backends
//!
//! Implement the `StorageBackend` trait to wrap whatever store the host
//! provides:
//!
//! ```ignore
//! use kvstash::{Storage, StorageBackend};
//!
//! struct BrowserStorage { /* ... */ }
//! impl StorageBackend for BrowserStorage { /* ... */ }
//!
//! let storage = Storage::custom(BrowserStorage::new());
//! ```

#[cfg(feature = "async")]
mod async_ops;
mod backend;
mod bulk;
mod json;
mod memory;
mod redb;
mod store;
mod ttl;
mod types;


pub use backend::StorageBackend;
pub use memory::MemoryBackend;
pub use self::redb::RedbBackend;
pub use store::Storage;
pub use types::TtlEnvelope;
