// src/engine/session.rs

use std::fmt;

use tracing::{info, warn};

use crate::config::{CommandConfig, Settings};
use crate::errors::Result;
use crate::exec::{run_command, SfdxBackend, SfdxResponse};
use crate::format::{format_failure, format_result};
use crate::output::OutputSink;
use crate::types::PollKind;

use super::ExecutionOutcome;

/// Runs sfdx commands and reports progress to an [`OutputSink`].
pub struct Session<B: SfdxBackend, S: OutputSink> {
    pub(super) backend: B,
    pub(super) sink: S,
    pub(super) settings: Settings,
}

impl<B: SfdxBackend, S: OutputSink> fmt::Debug for Session<B, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl<B: SfdxBackend, S: OutputSink> Session<B, S> {
    pub fn new(backend: B, sink: S, settings: Settings) -> Self {
        Self {
            backend,
            sink,
            settings,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Run `sfdx <subcommand> <params...> --json` without any rendering.
    pub async fn run(&self, subcommand: &str, params: &str) -> Result<SfdxResponse> {
        run_command(&self.backend, subcommand, params).await
    }

    /// Run a command, writing its start/complete messages and rendered
    /// result to the sink.
    ///
    /// - A failed response is rendered with [`format_failure`] and the
    ///   outcome is unsuccessful; the complete message is not written.
    /// - A successful response is rendered with the command's result
    ///   processor. Commands with `poll = "test"` then poll the test report
    ///   and write the complete message once polling stops.
    /// - Errors (spawn failure, unparseable output, result shape mismatch)
    ///   are returned as `Err`.
    pub async fn execute_with_logging(
        &self,
        command: &CommandConfig,
        params: &str,
    ) -> Result<ExecutionOutcome> {
        info!(
            subcommand = %command.subcommand,
            params = %params,
            processor = ?command.result_processor,
            poll = ?command.poll,
            "executing command"
        );

        if let Some(msg) = command.start_message.as_deref() {
            self.sink.line(msg);
        }

        let response = self.run(&command.subcommand, params).await?;

        if !response.is_success() {
            warn!(
                subcommand = %command.subcommand,
                status = response.status,
                message = %response.message_or_empty(),
                "command reported failure"
            );
            self.sink.lines(&format_failure(&response));
            return Ok(ExecutionOutcome {
                success: false,
                response,
                report: None,
            });
        }

        let lines = format_result(command.result_processor, &response.result)?;
        self.sink.lines(&lines);

        let report = match command.poll {
            Some(PollKind::Test) => Some(self.poll_test_run(&response, params).await?),
            None => None,
        };
        let success = report.as_ref().is_none_or(|r| r.success);

        if let Some(msg) = command.complete_message.as_deref() {
            self.sink.line(msg);
        }

        info!(subcommand = %command.subcommand, success, "command finished");

        Ok(ExecutionOutcome {
            success,
            response,
            report,
        })
    }
}
