// src/config/model.rs

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::types::{PollKind, ResultProcessor};

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [config]
/// sfdx_bin = "sfdx"
/// poll_interval = "30s"
///
/// [command.run-tests]
/// subcommand = "force:apex:test:run"
/// params = "-u dev@example.com -l RunLocalTests"
/// poll = "test"
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawConfigFile {
    /// Global settings from `[config]`.
    #[serde(default)]
    pub config: ConfigSection,

    /// Named commands from `[command.<name>]`.
    #[serde(default)]
    pub command: BTreeMap<String, CommandConfig>,
}

/// Validated configuration with resolved settings.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub settings: Settings,
    pub command: BTreeMap<String, CommandConfig>,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        settings: Settings,
        command: BTreeMap<String, CommandConfig>,
    ) -> Self {
        Self { settings, command }
    }

    /// Look up a configured command by name.
    pub fn command(&self, name: &str) -> Option<&CommandConfig> {
        self.command.get(name)
    }
}

/// `[config]` section as written by the user.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigSection {
    /// Binary to invoke. Resolved through `PATH` when not absolute.
    #[serde(default = "default_sfdx_bin")]
    pub sfdx_bin: String,

    /// Directory holding `orgs.json`.
    ///
    /// If `None`, `<platform data dir>/sfdxrun` is used.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Delay between `force:apex:test:report` polls, e.g. `"30s"`.
    #[serde(default = "default_poll_interval")]
    pub poll_interval: String,

    /// Value passed as `-w` to `force:apex:test:report`.
    #[serde(default = "default_poll_wait_minutes")]
    pub poll_wait_minutes: u32,

    /// Upper bound on polls per test run; unbounded when unset.
    #[serde(default)]
    pub max_polls: Option<u32>,
}

fn default_sfdx_bin() -> String {
    "sfdx".to_string()
}

fn default_poll_interval() -> String {
    "30s".to_string()
}

fn default_poll_wait_minutes() -> u32 {
    2
}

impl Default for ConfigSection {
    fn default() -> Self {
        Self {
            sfdx_bin: default_sfdx_bin(),
            data_dir: None,
            poll_interval: default_poll_interval(),
            poll_wait_minutes: default_poll_wait_minutes(),
            max_polls: None,
        }
    }
}

/// Settings after validation: durations parsed, data dir resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub sfdx_bin: PathBuf,
    pub data_dir: PathBuf,
    pub poll_interval: Duration,
    pub poll_wait_minutes: u32,
    pub max_polls: Option<u32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sfdx_bin: PathBuf::from(default_sfdx_bin()),
            data_dir: default_data_dir(),
            poll_interval: Duration::from_secs(30),
            poll_wait_minutes: default_poll_wait_minutes(),
            max_polls: None,
        }
    }
}

/// `<platform data dir>/sfdxrun`, or `.sfdxrun` when the platform has none.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("sfdxrun"))
        .unwrap_or_else(|| PathBuf::from(".sfdxrun"))
}

/// `[command.<name>]` section.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CommandConfig {
    /// sfdx subcommand, e.g. `force:apex:log:list`.
    pub subcommand: String,

    /// Parameter string; spaces separate arguments, `\ ` keeps a literal space.
    #[serde(default)]
    pub params: String,

    #[serde(default)]
    pub start_message: Option<String>,

    #[serde(default)]
    pub complete_message: Option<String>,

    /// Rendering for a successful result; `None` prints `key : value` lines.
    #[serde(default)]
    pub result_processor: Option<ResultProcessor>,

    /// Follow-up polling after a successful run.
    #[serde(default)]
    pub poll: Option<PollKind>,
}

impl CommandConfig {
    /// A bare command with no messages, processor or polling.
    pub fn new(subcommand: impl Into<String>) -> Self {
        Self {
            subcommand: subcommand.into(),
            params: String::new(),
            start_message: None,
            complete_message: None,
            result_processor: None,
            poll: None,
        }
    }
}
