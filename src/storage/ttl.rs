//! Expiring items.
//!
//! A TTL item is stored as a [`TtlEnvelope`] holding the value and an
//! absolute expiry in milliseconds. Expiry is only checked when the item is
//! read: an expired envelope stays in storage until the next
//! [`Storage::get_with_ttl`] (or an explicit [`Storage::purge_expired`]).

use super::store::Storage;
use super::types::TtlEnvelope;
use crate::error::{Error, Result};
use std::time::Duration;

impl Storage {
    /// Stores `value` under `key`, expiring `ttl_millis` from now.
    ///
    /// A zero or negative TTL stores an entry that is already expired (or
    /// expires at this exact millisecond).
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    pub fn set_with_ttl(&self, key: &str, value: &str, ttl_millis: i64) -> Result<()> {
        let envelope = TtlEnvelope::new(value, self.clock.now_millis(), ttl_millis);
        let raw = serde_json::to_string(&envelope).map_err(|e| Error::serialization(key, e))?;
        self.set(key, &raw)
    }

    /// [`Storage::set_with_ttl`] taking a `Duration`. Durations beyond
    /// `i64::MAX` milliseconds are clamped.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    pub fn set_with_ttl_duration(&self, key: &str, value: &str, ttl: Duration) -> Result<()> {
        let ttl_millis = i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX);
        self.set_with_ttl(key, value, ttl_millis)
    }

    /// Reads a TTL item.
    ///
    /// - absent key: `None`
    /// - unreadable envelope: logged, `None`, key left untouched
    /// - expired envelope: key removed, `None`
    /// - otherwise the stored value
    ///
    /// An envelope whose expiry equals the current millisecond is still live.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    pub fn get_with_ttl(&self, key: &str) -> Result<Option<String>> {
        let Some(envelope) = self.read_envelope(key)? else {
            return Ok(None);
        };

        if envelope.is_expired_at(self.clock.now_millis()) {
            tracing::debug!(key = %key, expires = envelope.expires, "Purging expired TTL item");
            self.remove(key)?;
            return Ok(None);
        }

        Ok(Some(envelope.value))
    }

    /// Removes expired TTL items among the keys matching `predicate` and
    /// returns how many were removed.
    ///
    /// Values that are not TTL envelopes are left alone. This never runs on
    /// its own; call it when a sweep is wanted.
    ///
    /// # Errors
    ///
    /// Returns the first backend error.
    pub fn purge_expired<P>(&self, predicate: P) -> Result<usize>
    where
        P: FnMut(&str) -> bool,
    {
        let now = self.clock.now_millis();
        let mut removed = 0;

        for key in self.filter_keys(predicate)? {
            let Some(raw) = self.get(&key)? else {
                continue;
            };
            let Ok(envelope) = serde_json::from_str::<TtlEnvelope>(&raw) else {
                continue;
            };
            if envelope.is_expired_at(now) {
                self.remove(&key)?;
                removed += 1;
            }
        }

        tracing::debug!(removed, "Purged expired TTL items");
        Ok(removed)
    }

    fn read_envelope(&self, key: &str) -> Result<Option<TtlEnvelope>> {
        let Some(raw) = self.get(key)? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(envelope) => Ok(Some(envelope)),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Ignoring unreadable TTL value");
                Ok(None)
            },
        }
    }
}
