//! Error types for storage helpers.
//!
//! Only three kinds of failure ever reach a caller: the storage could not be
//! resolved or configured, a value could not be serialized, or the backend
//! itself failed. Unreadable payloads are not errors; the JSON and TTL helpers
//! log them and report the key as absent.

use std::path::PathBuf;

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Storage errors with structured context.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// No storage was injected and the host offers no default.
    #[error("no default storage available: {reason}")]
    NoDefaultStorage { reason: String },

    /// Configuration could not be read or is invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Configuration file could not be read.
    #[error("failed to read config file {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A value could not be serialized before being stored.
    #[error("failed to serialize value for key '{key}': {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The underlying backend failed (quota, I/O, corrupted database...).
    #[error(transparent)]
    Backend(#[from] anyhow::Error),

    /// A blocking-pool task panicked or was cancelled.
    #[cfg(feature = "async")]
    #[error("storage task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl Error {
    /// Create a missing default storage error.
    pub fn no_default_storage(reason: impl Into<String>) -> Self {
        Self::NoDefaultStorage {
            reason: reason.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a serialization error for `key`.
    pub fn serialization(key: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            key: key.into(),
            source,
        }
    }

    /// Returns true for errors caused by missing or invalid configuration.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::NoDefaultStorage { .. } | Self::Config(_) | Self::ConfigIo { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_is_transparent() {
        let err: Error = anyhow::anyhow!("quota exceeded").into();
        assert_eq!(err.to_string(), "quota exceeded");
        assert!(!err.is_config());
    }

    #[test]
    fn test_config_errors_are_classified() {
        assert!(Error::no_default_storage("no data dir").is_config());
        assert!(Error::config("bad backend").is_config());
    }

    #[test]
    fn test_serialization_error_names_key() {
        let source = serde_json::from_str::<u8>("x").unwrap_err();
        let err = Error::serialization("user:1", source);
        assert!(err.to_string().contains("user:1"));
    }
}
