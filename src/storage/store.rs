//! `Storage` client and its core accessors.
//!
//! Every helper in this crate is a method on [`Storage`]; the bulk, JSON
//! and TTL helpers live in their own files but all read and write through
//! the accessors defined here.

use super::backend::StorageBackend;
use super::memory::MemoryBackend;
use super::redb::RedbBackend;
use crate::clock::{Clock, SystemClock};
use crate::config::{BackendKind, StorageConfig};
use crate::error::Result;
use crate::paths;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Convenience client over a [`StorageBackend`].
///
/// Holds the backend it was constructed with; there is no ambient
/// "current storage". Operations are synchronous and run to completion on
/// the calling thread. Read-modify-write helpers are last-write-wins.
///
/// # Thread Safety
///
/// `Storage` is `Clone`; clones share the backend and clock.
///
/// # Example
///
/// ```
/// use kvstash::Storage;
///
/// let storage = Storage::memory();
/// storage.set("greeting", "hello")?;
/// storage.update("greeting", |v| format!("{} world", v.unwrap_or_default()))?;
/// assert_eq!(storage.get("greeting")?.as_deref(), Some("hello world"));
/// # Ok::<(), kvstash::Error>(())
/// ```
#[derive(Clone)]
pub struct Storage {
    backend: Arc<dyn StorageBackend>,
    pub(super) clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage").finish_non_exhaustive()
    }
}

impl Storage {
    /// Creates a `Storage` backed by a redb database file.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or created.
    pub fn file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let backend = RedbBackend::open(path)?;
        Ok(Self::custom(backend))
    }

    /// Creates a `Storage` backed by a fresh in-memory map.
    pub fn memory() -> Self {
        Self::custom(MemoryBackend::new())
    }

    /// Creates a `Storage` over any backend.
    pub fn custom<B: StorageBackend>(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
            clock: Arc::new(SystemClock),
        }
    }

    /// Creates a `Storage` from a boxed backend.
    pub fn from_boxed(backend: Box<dyn StorageBackend>) -> Self {
        Self {
            backend: Arc::from(backend),
            clock: Arc::new(SystemClock),
        }
    }

    /// Builds the backend described by `config`.
    ///
    /// A file backend without a path uses [`paths::default_storage_path`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, no default path
    /// exists, or the database cannot be opened.
    pub fn from_config(config: &StorageConfig) -> Result<Self> {
        config.validate()?;

        match config.storage.backend {
            BackendKind::Memory => Ok(Self::memory()),
            BackendKind::File => match &config.storage.path {
                Some(path) => Self::file(path),
                None => Self::file(paths::default_storage_path()?),
            },
        }
    }

    /// Resolves the host's default storage once.
    ///
    /// Uses the config file at [`paths::default_config_path`] when one
    /// exists, otherwise a redb file at [`paths::default_storage_path`].
    ///
    /// # Errors
    ///
    /// Fails with [`crate::Error::NoDefaultStorage`] when the platform has
    /// no data directory, or with the config/backend error that prevented
    /// opening the storage.
    pub fn host_default() -> Result<Self> {
        Self::resolve_default(paths::default_config_path(), paths::default_storage_path())
    }

    /// Opens the config at `config_path` if it is a file, otherwise the redb
    /// file at `data_path`.
    pub(crate) fn resolve_default(
        config_path: Option<PathBuf>,
        data_path: Result<PathBuf>,
    ) -> Result<Self> {
        if let Some(config_path) = config_path
            && config_path.is_file()
        {
            let config = StorageConfig::load_from(&config_path)?;
            return Self::from_config(&config);
        }

        Self::file(data_path?)
    }

    /// Replaces the clock used by the TTL helpers.
    #[must_use]
    pub fn with_clock<C: Clock>(mut self, clock: C) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// All currently enumerable keys, in backend order.
    ///
    /// Walks indices `0..len` and skips positions that no longer resolve
    /// to a key. That is one `key()` call per entry; see the backend docs
    /// for what each call costs.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    pub fn keys(&self) -> Result<Vec<String>> {
        let len = self.backend.len()?;
        let mut keys = Vec::with_capacity(len);
        for index in 0..len {
            if let Some(key) = self.backend.key(index)? {
                keys.push(key);
            }
        }
        Ok(keys)
    }

    /// Returns true if a value is stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    pub fn has(&self, key: &str) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }

    /// Retrieves the string stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.backend.get_item(key)?)
    }

    /// Stores `value` under `key`, overwriting any existing value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        Ok(self.backend.set_item(key, value)?)
    }

    /// Replaces the value under `key` with `f(current)`.
    ///
    /// `current` is `None` when the key is absent. The read and the write
    /// are separate backend calls, so a concurrent writer can be lost.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    pub fn update<F>(&self, key: &str, f: F) -> Result<()>
    where
        F: FnOnce(Option<String>) -> String,
    {
        let current = self.get(key)?;
        let updated = f(current);
        self.set(key, &updated)
    }

    /// Removes `key`. Removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    pub fn remove(&self, key: &str) -> Result<()> {
        Ok(self.backend.remove_item(key)?)
    }

    /// Number of stored entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    pub fn len(&self) -> Result<usize> {
        Ok(self.backend.len()?)
    }

    /// Returns true if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.backend.is_empty()?)
    }
}
