//! Predicate-driven bulk operations.
//!
//! Each operation takes one key snapshot with [`Storage::keys`], runs the
//! predicate over that snapshot in enumeration order, and only then reads
//! or writes the matching keys. Keys added while an operation runs are not
//! visited; keys removed meanwhile read back as `None`.

use super::store::Storage;
use crate::error::Result;
use std::collections::BTreeMap;

impl Storage {
    /// Keys for which `predicate` returns true, in enumeration order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    pub fn filter_keys<P>(&self, mut predicate: P) -> Result<Vec<String>>
    where
        P: FnMut(&str) -> bool,
    {
        let mut keys = self.keys()?;
        keys.retain(|key| predicate(key));
        Ok(keys)
    }

    /// Current values of every key matching `predicate`.
    ///
    /// Keys that resolve to no value at read time are left out.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    pub fn get_items<P>(&self, predicate: P) -> Result<BTreeMap<String, String>>
    where
        P: FnMut(&str) -> bool,
    {
        let mut items = BTreeMap::new();
        for key in self.filter_keys(predicate)? {
            if let Some(value) = self.get(&key)? {
                items.insert(key, value);
            }
        }
        Ok(items)
    }

    /// Removes every key matching `predicate` and returns how many were
    /// matched.
    ///
    /// # Errors
    ///
    /// Returns the first backend error. Keys removed before it stay removed.
    pub fn remove_keys<P>(&self, predicate: P) -> Result<usize>
    where
        P: FnMut(&str) -> bool,
    {
        let keys = self.filter_keys(predicate)?;
        for key in &keys {
            self.remove(key)?;
        }
        tracing::debug!(count = keys.len(), "Removed matching keys");
        Ok(keys.len())
    }

    /// Applies [`Storage::update`] with `f` to every key matching
    /// `predicate`, in enumeration order. Returns how many keys were updated.
    ///
    /// There is no rollback.
    ///
    /// # Errors
    ///
    /// Returns the first backend error. Updates applied before it stay
    /// applied and the remaining keys are skipped.
    pub fn update_items<P, F>(&self, predicate: P, mut f: F) -> Result<usize>
    where
        P: FnMut(&str) -> bool,
        F: FnMut(Option<String>) -> String,
    {
        let keys = self.filter_keys(predicate)?;
        for key in &keys {
            self.update(key, &mut f)?;
        }
        Ok(keys.len())
    }
}
