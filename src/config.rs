//! Storage configuration loaded from TOML.
//!
//! ```toml
//! [storage]
//! backend = "file"                       # "file" (default) or "memory"
//! path = "/var/lib/my-app/storage.redb"  # optional, file backend only
//! ```
//!
//! A missing `[storage]` table or missing fields fall back to the defaults:
//! a redb file at [`crate::paths::default_storage_path`].

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Result of configuration validation.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Non-fatal warnings that should be logged but don't prevent operation.
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Returns true if there are any warnings.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Which backend a configured storage uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Persistent redb database file.
    #[default]
    File,
    /// Process-local memory; lost on exit.
    Memory,
}

/// Root of a kvstash configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub storage: StorageSection,
}

/// The `[storage]` table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageSection {
    #[serde(default)]
    pub backend: BackendKind,
    /// Database file for the `file` backend. Defaults to the host location.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl StorageConfig {
    /// Configuration for an in-memory backend.
    pub fn memory() -> Self {
        Self {
            storage: StorageSection {
                backend: BackendKind::Memory,
                path: None,
            },
        }
    }

    /// Configuration for a redb file at `path`.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            storage: StorageSection {
                backend: BackendKind::File,
                path: Some(path.into()),
            },
        }
    }

    /// Load configuration from the specified path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// fails [`StorageConfig::validate`].
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml_str(&content).map_err(|e| match e {
            Error::Config(msg) => Error::config(format!("{}: {msg}", path.display())),
            other => other,
        })?;

        tracing::debug!(path = %path.display(), backend = ?config.storage.backend, "Loaded storage config");
        Ok(config)
    }

    /// Parse and validate configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid TOML, unknown backend names, or a failed
    /// validation.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: StorageConfig =
            toml::from_str(content).map_err(|e| Error::config(e.to_string()))?;

        let validation = config.validate()?;
        for warning in &validation.warnings {
            tracing::warn!("{warning}");
        }

        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file backend has an empty path.
    pub fn validate(&self) -> Result<ValidationResult> {
        let mut warnings = Vec::new();

        match (self.storage.backend, &self.storage.path) {
            (BackendKind::File, Some(path)) if path.as_os_str().is_empty() => {
                return Err(Error::config("storage.path cannot be empty"));
            },
            (BackendKind::Memory, Some(path)) => {
                warnings.push(format!(
                    "storage.path '{}' is ignored by the memory backend",
                    path.display()
                ));
            },
            _ => {},
        }

        Ok(ValidationResult { warnings })
    }
}
