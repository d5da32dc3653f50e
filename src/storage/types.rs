//! Envelope types layered on top of stored strings.

use serde::{Deserialize, Serialize};

/// Stored form of a TTL item: `{"value": "...", "expires": 1700000000000}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TtlEnvelope {
    /// The caller's value.
    pub value: String,
    /// Absolute expiry, milliseconds since the Unix epoch.
    pub expires: i64,
}

impl TtlEnvelope {
    /// Wraps `value` so that it expires `ttl_millis` after `now_millis`.
    pub fn new(value: impl Into<String>, now_millis: i64, ttl_millis: i64) -> Self {
        Self {
            value: value.into(),
            expires: now_millis.saturating_add(ttl_millis),
        }
    }

    /// An entry is expired only once `now` is strictly past `expires`.
    pub fn is_expired_at(&self, now_millis: i64) -> bool {
        now_millis > self.expires
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let envelope = TtlEnvelope::new("v", 1_000, 500);
        let json = serde_json::to_string(&envelope).unwrap();
        assert_eq!(json, r#"{"value":"v","expires":1500}"#);
    }

    #[test]
    fn test_expiry_boundary() {
        let envelope = TtlEnvelope::new("v", 1_000, 10);
        assert!(!envelope.is_expired_at(1_009));
        assert!(!envelope.is_expired_at(1_010));
        assert!(envelope.is_expired_at(1_011));
    }

    #[test]
    fn test_negative_ttl_is_already_expired() {
        let envelope = TtlEnvelope::new("v", 1_000, -1);
        assert!(envelope.is_expired_at(1_000));
    }

    #[test]
    fn test_ttl_saturates() {
        let envelope = TtlEnvelope::new("v", i64::MAX - 1, 10);
        assert_eq!(envelope.expires, i64::MAX);
        assert!(!envelope.is_expired_at(i64::MAX));
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        assert!(serde_json::from_str::<TtlEnvelope>(r#"{"value":"v"}"#).is_err());
        assert!(serde_json::from_str::<TtlEnvelope>(r#"{"value":1,"expires":2}"#).is_err());
        assert!(serde_json::from_str::<TtlEnvelope>(r#""plain""#).is_err());
    }
}
