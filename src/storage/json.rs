//! JSON-valued items.
//!
//! Values are serialized with `serde_json` and stored as the plain string.
//! An unreadable payload is logged and read back as `None`, the same as an
//! absent key.

use super::store::Storage;
use crate::error::{Error, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;

impl Storage {
    /// Serializes `value` as JSON and stores it under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if `value` cannot be represented as
    /// JSON (for example a map with non-string keys), or a backend error.
    pub fn set_json<T>(&self, key: &str, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let json = serde_json::to_string(value).map_err(|e| Error::serialization(key, e))?;
        self.set(key, &json)
    }

    /// Reads and deserializes the JSON value under `key`.
    ///
    /// Returns `Ok(None)` if the key is absent or its content does not parse
    /// as `T`. A stored literal `null` is a present value, not an absent key:
    /// it reads back as `Some(Value::Null)` for `serde_json::Value` and as
    /// `Some(None)` for an `Option<_>`. Types that cannot be built from
    /// `null` treat it as unreadable and return `None`.
    ///
    /// # Errors
    ///
    /// Returns an error only if the backend fails.
    pub fn get_json<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        let Some(raw) = self.get(key)? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Ignoring unparseable JSON value");
                Ok(None)
            },
        }
    }

    /// Replaces the JSON value under `key` with `f(current)`.
    ///
    /// `current` is `None` when the key is absent or unreadable.
    ///
    /// # Errors
    ///
    /// Returns a serialization error for the new value, or a backend error.
    pub fn update_json<T, F>(&self, key: &str, f: F) -> Result<()>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(Option<T>) -> T,
    {
        let current = self.get_json(key)?;
        let updated = f(current);
        self.set_json(key, &updated)
    }
}
