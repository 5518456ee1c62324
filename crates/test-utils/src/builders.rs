#![allow(dead_code)]

use std::collections::BTreeMap;
use std::path::Path;

use sfdxrun::config::{CommandConfig, ConfigFile, ConfigSection, RawConfigFile, Settings};
use sfdxrun::types::{PollKind, ResultProcessor};

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                config: ConfigSection::default(),
                command: BTreeMap::new(),
            },
        }
    }

    pub fn with_command(mut self, name: &str, command: CommandConfig) -> Self {
        self.config.command.insert(name.to_string(), command);
        self
    }

    pub fn sfdx_bin(mut self, bin: &str) -> Self {
        self.config.config.sfdx_bin = bin.to_string();
        self
    }

    pub fn data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.config.config.data_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn poll_interval(mut self, interval: &str) -> Self {
        self.config.config.poll_interval = interval.to_string();
        self
    }

    pub fn max_polls(mut self, max: u32) -> Self {
        self.config.config.max_polls = Some(max);
        self
    }

    pub fn raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Settings suitable for tests: a short poll interval and a temp-like data dir.
pub fn fast_settings(poll_interval: &str, max_polls: Option<u32>) -> Settings {
    let mut builder = ConfigFileBuilder::new()
        .poll_interval(poll_interval)
        .data_dir("test-data");
    if let Some(max) = max_polls {
        builder = builder.max_polls(max);
    }
    builder.build().settings
}

/// Builder for `CommandConfig`.
pub struct CommandConfigBuilder {
    command: CommandConfig,
}

impl CommandConfigBuilder {
    pub fn new(subcommand: &str) -> Self {
        Self {
            command: CommandConfig::new(subcommand),
        }
    }

    pub fn params(mut self, params: &str) -> Self {
        self.command.params = params.to_string();
        self
    }

    pub fn start_message(mut self, msg: &str) -> Self {
        self.command.start_message = Some(msg.to_string());
        self
    }

    pub fn complete_message(mut self, msg: &str) -> Self {
        self.command.complete_message = Some(msg.to_string());
        self
    }

    pub fn processor(mut self, processor: ResultProcessor) -> Self {
        self.command.result_processor = Some(processor);
        self
    }

    pub fn poll(mut self, kind: PollKind) -> Self {
        self.command.poll = Some(kind);
        self
    }

    pub fn build(self) -> CommandConfig {
        self.command
    }
}
