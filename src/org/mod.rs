// src/org/mod.rs

//! Org bookkeeping: the cached org list and the configured defaults.

pub mod cache;
pub mod defaults;

pub use cache::{load_orgs, orgs_file_path, ORGS_FILE};
pub use defaults::{get_config, OrgDefaults};
