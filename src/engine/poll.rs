// src/engine/poll.rs

//! Polling an async Apex test run until its report is available.

use serde_json::Value;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::errors::Result;
use crate::exec::{username_from_params, SfdxBackend, SfdxResponse};
use crate::format::format_test_results;
use crate::output::OutputSink;

use super::Session;

pub const TEST_REPORT_SUBCOMMAND: &str = "force:apex:test:report";

/// Final state of a polling loop.
#[derive(Debug, Clone, PartialEq)]
pub struct PollOutcome {
    /// The report was retrieved (tests themselves may still have failed).
    pub success: bool,
    /// Number of report requests made.
    pub polls: u32,
    /// Last report response, if any request was made.
    pub response: Option<SfdxResponse>,
}

/// How a single report response moves the loop forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollStatus {
    /// Report available: status 0 (all passed) or 100 (some failed).
    Complete,
    /// Status 1 for a reason other than the wait timing out.
    Failed,
    /// Still running; poll again.
    Pending,
}

impl PollStatus {
    pub fn of(response: &SfdxResponse) -> Self {
        match response.status {
            0 | 100 => PollStatus::Complete,
            1 if !response.message_or_empty().contains("timeout") => PollStatus::Failed,
            _ => PollStatus::Pending,
        }
    }
}

/// Parameters for `force:apex:test:report`.
pub fn test_report_params(run_id: &str, username: Option<&str>, wait_minutes: u32) -> String {
    match username {
        Some(user) => format!("-i {run_id} -u {user} -w {wait_minutes}"),
        None => format!("-i {run_id} -w {wait_minutes}"),
    }
}

impl<B: SfdxBackend, S: OutputSink> Session<B, S> {
    /// Poll the report for the test run started by `run`.
    ///
    /// The run id comes from `result.testRunId`; the username from the
    /// `-u`/`--targetusername` value in `params`.
    pub async fn poll_test_run(&self, run: &SfdxResponse, params: &str) -> Result<PollOutcome> {
        let Some(run_id) = run.result.get("testRunId").and_then(Value::as_str) else {
            warn!("test run response has no testRunId; cannot poll");
            self.sink.line("Poll failed - response has no testRunId");
            return Ok(PollOutcome {
                success: false,
                polls: 0,
                response: None,
            });
        };

        let username = username_from_params(params);
        self.poll_test_report(run_id, username.as_deref()).await
    }

    /// Request the report every `poll_interval` until it is complete,
    /// fails, or `max_polls` is reached. The first request happens after
    /// one interval.
    pub async fn poll_test_report(
        &self,
        run_id: &str,
        username: Option<&str>,
    ) -> Result<PollOutcome> {
        let period = self.settings.poll_interval;
        let report_params =
            test_report_params(run_id, username, self.settings.poll_wait_minutes);

        info!(run_id, ?period, max_polls = ?self.settings.max_polls, "polling test run");

        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut polls = 0u32;

        loop {
            ticker.tick().await;
            polls += 1;

            let response = self.run(TEST_REPORT_SUBCOMMAND, &report_params).await?;
            let status = PollStatus::of(&response);
            debug!(
                run_id,
                polls,
                sfdx_status = response.status,
                poll_status = ?status,
                "test report polled"
            );

            match status {
                PollStatus::Failed => {
                    self.sink
                        .line(&format!("Poll failed - {}", response.message_or_empty()));
                    return Ok(PollOutcome {
                        success: false,
                        polls,
                        response: Some(response),
                    });
                }
                PollStatus::Complete => {
                    self.sink.line("Test run complete");
                    self.sink.lines(&format_test_results(&response.result)?);
                    info!(run_id, polls, "test run complete");
                    return Ok(PollOutcome {
                        success: true,
                        polls,
                        response: Some(response),
                    });
                }
                PollStatus::Pending => {
                    if let Some(max) = self.settings.max_polls {
                        if polls >= max {
                            warn!(run_id, polls, "giving up on test run");
                            self.sink.line(&format!(
                                "Gave up waiting for test run {run_id} after {polls} polls"
                            ));
                            return Ok(PollOutcome {
                                success: false,
                                polls,
                                response: Some(response),
                            });
                        }
                    }
                }
            }
        }
    }
}
