// src/config/mod.rs

//! Configuration loading and validation for sfdxrun.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate settings and named commands (`validate.rs`).

pub mod duration;
pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path, load_or_default};
pub use model::{CommandConfig, ConfigFile, ConfigSection, RawConfigFile, Settings};
pub use validate::validate_config;
