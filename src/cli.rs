// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::types::{PollKind, ResultProcessor};

/// Command-line arguments for `sfdxrun`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "sfdxrun",
    version,
    about = "Run Salesforce DX commands and render their JSON results.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `Sfdxrun.toml` in the current working directory, if present.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `SFDXRUN_LOG` or a default level will be used.
    #[arg(long, global = true, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// sfdx binary to invoke; overrides `[config].sfdx_bin`.
    #[arg(long, global = true, value_name = "PATH")]
    pub sfdx_bin: Option<PathBuf>,

    /// Directory for the org cache; overrides `[config].data_dir`.
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run a command defined under `[command.<name>]`.
    Exec {
        name: String,

        /// Replace the configured parameter string.
        #[arg(long, allow_hyphen_values = true, value_name = "PARAMS")]
        params: Option<String>,
    },

    /// Run an sfdx subcommand directly.
    Run {
        /// e.g. `force:apex:log:list`
        subcommand: String,

        /// Parameter string; `\ ` keeps a literal space.
        #[arg(long, allow_hyphen_values = true, default_value = "", value_name = "PARAMS")]
        params: String,

        #[arg(long, value_enum)]
        processor: Option<ResultProcessor>,

        #[arg(long, value_enum)]
        poll: Option<PollKind>,

        #[arg(long, value_name = "TEXT")]
        start_message: Option<String>,

        #[arg(long, value_name = "TEXT")]
        complete_message: Option<String>,
    },

    /// Print the org list, from the cache unless `--force` is given.
    Orgs {
        #[arg(long)]
        force: bool,
    },

    /// Print the default username and dev hub.
    Defaults,

    /// List configured commands without running anything.
    Commands,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
