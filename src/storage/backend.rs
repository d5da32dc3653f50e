//! Backend trait for the storage helpers.
//!
//! Defines the capability every storage backend must expose, enabling
//! pluggable storage (redb, memory, or anything the host provides).

use anyhow::Result;

/// A synchronous string-to-string key-value store.
///
/// This is the whole contract the helpers rely on: point reads and writes,
/// plus index-based key enumeration. Enumeration order is up to the backend
/// and callers must not depend on it across mutations.
///
/// All backends must be thread-safe (`Send + Sync`) so a [`super::Storage`]
/// handle can be cloned and moved across threads. Atomicity and durability
/// are whatever the backend provides per call; the helpers never hold a
/// transaction across calls.
///
/// # Example
///
/// ```
/// use kvstash::{MemoryBackend, StorageBackend};
///
/// let backend = MemoryBackend::new();
/// backend.set_item("key", "value")?;
/// assert_eq!(backend.get_item("key")?, Some("value".to_string()));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub trait StorageBackend: Send + Sync + 'static {
    /// Retrieves the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage operation fails.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, overwriting any existing value.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage operation fails
    /// (quota exceeded, disk full, ...).
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage operation fails.
    fn remove_item(&self, key: &str) -> Result<()>;

    /// Returns the key at position `index` in the backend's enumeration
    /// order, or `None` if `index` is out of range.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage operation fails.
    fn key(&self, index: usize) -> Result<Option<String>>;

    /// Number of stored entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage operation fails.
    fn len(&self) -> Result<usize>;

    /// Returns true if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage operation fails.
    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}
