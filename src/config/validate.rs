// src/config/validate.rs

use std::path::PathBuf;

use crate::config::duration::parse_duration;
use crate::config::model::{default_data_dir, ConfigFile, RawConfigFile, Settings};
use crate::errors::{Result, SfdxError};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = SfdxError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_commands(&raw)?;
        let settings = resolve_settings(&raw)?;
        Ok(ConfigFile::new_unchecked(settings, raw.command))
    }
}

/// Validate a raw config without consuming it.
pub fn validate_config(cfg: &RawConfigFile) -> Result<()> {
    validate_commands(cfg)?;
    resolve_settings(cfg)?;
    Ok(())
}

fn resolve_settings(cfg: &RawConfigFile) -> Result<Settings> {
    let section = &cfg.config;

    if section.sfdx_bin.trim().is_empty() {
        return Err(SfdxError::ConfigError(
            "[config].sfdx_bin must not be empty".to_string(),
        ));
    }

    let poll_interval = parse_duration(&section.poll_interval).map_err(|e| {
        SfdxError::ConfigError(format!(
            "[config].poll_interval '{}' is invalid: {}",
            section.poll_interval, e
        ))
    })?;
    if poll_interval.is_zero() {
        return Err(SfdxError::ConfigError(
            "[config].poll_interval must be greater than zero".to_string(),
        ));
    }

    if section.poll_wait_minutes == 0 {
        return Err(SfdxError::ConfigError(
            "[config].poll_wait_minutes must be >= 1 (got 0)".to_string(),
        ));
    }

    if section.max_polls == Some(0) {
        return Err(SfdxError::ConfigError(
            "[config].max_polls must be >= 1 when set (got 0)".to_string(),
        ));
    }

    Ok(Settings {
        sfdx_bin: PathBuf::from(section.sfdx_bin.trim()),
        data_dir: section.data_dir.clone().unwrap_or_else(default_data_dir),
        poll_interval,
        poll_wait_minutes: section.poll_wait_minutes,
        max_polls: section.max_polls,
    })
}

fn validate_commands(cfg: &RawConfigFile) -> Result<()> {
    for (name, command) in cfg.command.iter() {
        if command.subcommand.trim().is_empty() {
            return Err(SfdxError::ConfigError(format!(
                "command '{}' has an empty `subcommand`",
                name
            )));
        }
        if command.subcommand.chars().any(char::is_whitespace) {
            return Err(SfdxError::ConfigError(format!(
                "command '{}' has whitespace in `subcommand` '{}'; put arguments in `params`",
                name, command.subcommand
            )));
        }
    }
    Ok(())
}
