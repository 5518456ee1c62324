use std::fmt;

use serde::Deserialize;

/// How a successful command result is rendered.
///
/// Commands without a processor get the generic `key : value` rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ResultProcessor {
    /// `force:apex:log:list` output.
    #[value(name = "loglist")]
    LogList,
    /// `force:apex:log:get` output.
    #[value(name = "logfile")]
    LogFile,
}

impl fmt::Display for ResultProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultProcessor::LogList => f.write_str("loglist"),
            ResultProcessor::LogFile => f.write_str("logfile"),
        }
    }
}

/// Follow-up polling performed after a command succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PollKind {
    /// Poll `force:apex:test:report` until the async test run finishes.
    Test,
}

impl fmt::Display for PollKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PollKind::Test => f.write_str("test"),
        }
    }
}
