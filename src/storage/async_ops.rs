//! Async wrappers for storage operations.
//!
//! These methods run the synchronous operations on tokio's blocking pool
//! with `spawn_blocking`, so a redb-backed `Storage` can be used from async
//! contexts without stalling the runtime. They add no atomicity.
//!
//! Only compiled with the `async` feature; without it the crate does not
//! depend on tokio.

use super::store::Storage;
use crate::error::Result;

impl Storage {
    /// Async version of [`Storage::get`].
    ///
    /// # Errors
    ///
    /// Returns a backend error, or [`crate::Error::Task`] if the blocking
    /// task panicked.
    pub async fn get_async(&self, key: String) -> Result<Option<String>> {
        let storage = self.clone();
        tokio::task::spawn_blocking(move || storage.get(&key)).await?
    }

    /// Async version of [`Storage::set`].
    ///
    /// # Errors
    ///
    /// Returns a backend error, or [`crate::Error::Task`] if the blocking
    /// task panicked.
    pub async fn set_async(&self, key: String, value: String) -> Result<()> {
        let storage = self.clone();
        tokio::task::spawn_blocking(move || storage.set(&key, &value)).await?
    }

    /// Async version of [`Storage::remove`].
    ///
    /// # Errors
    ///
    /// Returns a backend error, or [`crate::Error::Task`] if the blocking
    /// task panicked.
    pub async fn remove_async(&self, key: String) -> Result<()> {
        let storage = self.clone();
        tokio::task::spawn_blocking(move || storage.remove(&key)).await?
    }

    /// Async version of [`Storage::keys`].
    ///
    /// # Errors
    ///
    /// Returns a backend error, or [`crate::Error::Task`] if the blocking
    /// task panicked.
    pub async fn keys_async(&self) -> Result<Vec<String>> {
        let storage = self.clone();
        tokio::task::spawn_blocking(move || storage.keys()).await?
    }

    /// Async version of [`Storage::set_with_ttl`].
    ///
    /// # Errors
    ///
    /// Returns a backend error, or [`crate::Error::Task`] if the blocking
    /// task panicked.
    pub async fn set_with_ttl_async(
        &self,
        key: String,
        value: String,
        ttl_millis: i64,
    ) -> Result<()> {
        let storage = self.clone();
        tokio::task::spawn_blocking(move || storage.set_with_ttl(&key, &value, ttl_millis)).await?
    }

    /// Async version of [`Storage::get_with_ttl`].
    ///
    /// # Errors
    ///
    /// Returns a backend error, or [`crate::Error::Task`] if the blocking
    /// task panicked.
    pub async fn get_with_ttl_async(&self, key: String) -> Result<Option<String>> {
        let storage = self.clone();
        tokio::task::spawn_blocking(move || storage.get_with_ttl(&key)).await?
    }
}
