// tests/integration/main.rs

#[path = "../common/mod.rs"]
mod common;

mod cli_parsing;
mod config_loading;
mod error_handling;
mod run_entry;
