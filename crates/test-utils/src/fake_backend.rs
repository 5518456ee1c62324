use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use serde_json::Value;
use sfdxrun::errors::{Result, SfdxError};
use sfdxrun::exec::{SfdxBackend, SfdxResponse};

#[derive(Debug, Clone)]
enum Scripted {
    Response(SfdxResponse),
    Error(String),
}

#[derive(Debug, Default)]
struct FakeState {
    scripted: HashMap<String, VecDeque<Scripted>>,
    calls: Vec<Vec<String>>,
}

/// A fake sfdx backend that:
/// - records every argument vector it is invoked with
/// - answers from per-subcommand scripts; the last scripted answer for a
///   subcommand repeats once the others are used up.
///
/// Clones share the same script and call log.
#[derive(Debug, Clone, Default)]
pub struct FakeBackend {
    state: Arc<Mutex<FakeState>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, subcommand: &str, response: SfdxResponse) -> &Self {
        self.push(subcommand, Scripted::Response(response))
    }

    /// Script a response given as sfdx would print it.
    pub fn respond_json(&self, subcommand: &str, json: Value) -> &Self {
        let response: SfdxResponse =
            serde_json::from_value(json).expect("scripted JSON is a valid sfdx response");
        self.respond(subcommand, response)
    }

    /// Script a process-level failure (no JSON anywhere).
    pub fn fail(&self, subcommand: &str, stderr: &str) -> &Self {
        self.push(subcommand, Scripted::Error(stderr.to_string()))
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn calls_for(&self, subcommand: &str) -> Vec<Vec<String>> {
        self.calls()
            .into_iter()
            .filter(|args| args.first().map(String::as_str) == Some(subcommand))
            .collect()
    }

    fn push(&self, subcommand: &str, scripted: Scripted) -> &Self {
        let mut state = self.state.lock().unwrap();
        state
            .scripted
            .entry(subcommand.to_string())
            .or_default()
            .push_back(scripted);
        drop(state);
        self
    }

    fn next_answer(&self, args: &[String]) -> Option<Scripted> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(args.to_vec());

        let subcommand = args.first()?;
        let queue = state.scripted.get_mut(subcommand)?;
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }
}

impl SfdxBackend for FakeBackend {
    fn invoke(
        &self,
        args: Vec<String>,
    ) -> Pin<Box<dyn Future<Output = Result<SfdxResponse>> + Send + '_>> {
        let answer = self.next_answer(&args);

        Box::pin(async move {
            match answer {
                Some(Scripted::Response(response)) => Ok(response),
                Some(Scripted::Error(stderr)) => Err(SfdxError::CommandFailed {
                    args: args.join(" "),
                    stderr,
                }),
                None => Err(SfdxError::CommandFailed {
                    args: args.join(" "),
                    stderr: "no scripted response".to_string(),
                }),
            }
        })
    }
}
