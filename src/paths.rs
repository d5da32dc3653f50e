//! Host default locations.
//!
//! - [`default_storage_path`] - `<data_local_dir>/kvstash/storage.redb`
//! - [`default_config_path`] - `<config_dir>/kvstash/kvstash.toml`

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const APP_DIR: &str = "kvstash";
const STORAGE_FILE: &str = "storage.redb";
const CONFIG_FILE: &str = "kvstash.toml";

/// Get the default storage database path.
///
/// Fails with [`Error::NoDefaultStorage`] when the platform exposes no
/// per-user data directory.
pub fn default_storage_path() -> Result<PathBuf> {
    let data_dir = dirs::data_local_dir()
        .ok_or_else(|| Error::no_default_storage("platform has no local data directory"))?;
    Ok(storage_path_in(&data_dir))
}

/// Get the default configuration file path, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| config_path_in(&dir))
}

/// Storage database location under a data directory.
pub(crate) fn storage_path_in(data_dir: &Path) -> PathBuf {
    data_dir.join(APP_DIR).join(STORAGE_FILE)
}

/// Config file location under a config directory.
pub(crate) fn config_path_in(config_dir: &Path) -> PathBuf {
    config_dir.join(APP_DIR).join(CONFIG_FILE)
}
