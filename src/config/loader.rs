// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;

/// Load a configuration file from a given path and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; use [`load_and_validate`] for
/// semantic checks.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and run validation.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(&path)?;
    let config = ConfigFile::try_from(raw_config)?;
    Ok(config)
}

/// Load the config if the file exists, otherwise fall back to defaults.
///
/// Used for the implicit default path; an explicitly requested file that
/// is missing goes through [`load_and_validate`] and fails.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    if path.is_file() {
        return load_and_validate(path);
    }
    debug!(path = %path.display(), "no config file found; using defaults");
    ConfigFile::try_from(RawConfigFile::default())
}

/// Default config location: `Sfdxrun.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Sfdxrun.toml")
}
