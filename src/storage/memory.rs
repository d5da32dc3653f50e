//! In-memory storage backend.
//!
//! Provides a fast, non-persistent string store. Ideal for testing,
//! development, and embedded use cases.

use super::backend::StorageBackend;
use anyhow::Result;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

/// In-memory storage backend.
///
/// Keys enumerate in sorted order, so `key(i)` is stable as long as the
/// map is not mutated. All data is lost when the last clone is dropped.
///
/// # Cost
///
/// `key(index)` takes the read lock and walks the map from the first key,
/// so enumerating all `n` keys through [`super::Storage::keys`] is O(n²).
///
/// # Thread Safety
///
/// `MemoryBackend` is `Clone`; clones share the same map behind a
/// `parking_lot::RwLock`.
///
/// # Example
///
/// ```
/// use kvstash::{MemoryBackend, StorageBackend};
///
/// let backend = MemoryBackend::from_iter([("a", "1"), ("b", "2")]);
/// assert_eq!(backend.len()?, 2);
/// assert_eq!(backend.key(0)?, Some("a".to_string()));
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Clone, Default)]
pub struct MemoryBackend {
    data: Arc<RwLock<BTreeMap<String, String>>>,
}

impl MemoryBackend {
    /// Creates a new empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all entries from the store.
    pub fn clear(&self) {
        self.data.write().clear();
    }

    /// Copies the current contents out of the backend.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.data.read().clone()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryBackend {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let data = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            data: Arc::new(RwLock::new(data)),
        }
    }
}

impl StorageBackend for MemoryBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.read().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.data.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.data.write().remove(key);
        Ok(())
    }

    fn key(&self, index: usize) -> Result<Option<String>> {
        Ok(self.data.read().keys().nth(index).cloned())
    }

    fn len(&self) -> Result<usize> {
        Ok(self.data.read().len())
    }
}
