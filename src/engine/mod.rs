// src/engine/mod.rs

//! Command orchestration for sfdxrun.
//!
//! A [`Session`] ties together an sfdx backend, an output sink and the
//! resolved settings. It runs a configured command, renders its result,
//! and for async test runs polls the report until the run finishes.

pub mod poll;
pub mod session;

pub use poll::{PollOutcome, PollStatus, TEST_REPORT_SUBCOMMAND};
pub use session::Session;

use crate::exec::SfdxResponse;

/// Result of [`Session::execute_with_logging`].
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionOutcome {
    /// The command succeeded and, when it polls, the poll finished cleanly.
    pub success: bool,
    /// Response of the command itself.
    pub response: SfdxResponse,
    /// Outcome of follow-up polling, for commands that poll.
    pub report: Option<PollOutcome>,
}
