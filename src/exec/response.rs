// src/exec/response.rs

//! The JSON envelope printed by `sfdx ... --json`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{Result, SfdxError};

/// Response envelope: `{"status": 0, "result": ..., "message": ...}`.
///
/// Fields other than the ones modelled here are kept in `extra`, so a
/// response written back to disk keeps everything sfdx printed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SfdxResponse {
    pub status: i64,

    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub result: Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One entry of `result.failures`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Failure {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub message: String,
}

impl SfdxResponse {
    /// Response with the given status and result and nothing else.
    pub fn new(status: i64, result: Value) -> Self {
        Self {
            status,
            result,
            message: None,
            name: None,
            extra: Map::new(),
        }
    }

    /// `status == 0` and no entries in `result.failures`.
    pub fn is_success(&self) -> bool {
        self.status == 0 && self.failures().is_empty()
    }

    /// Entries of `result.failures`, empty when absent or not an array.
    pub fn failures(&self) -> Vec<Failure> {
        match self.result.get("failures") {
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| Failure::deserialize(item).unwrap_or_default())
                .collect(),
            _ => Vec::new(),
        }
    }

    /// `message`, or an empty string.
    pub fn message_or_empty(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }
}

/// Interpret the captured output of one sfdx process.
///
/// - A successful exit must print a JSON response on stdout.
/// - A failed exit with stdout is parsed from stdout.
/// - A failed exit without stdout is parsed from the first `{` in stderr.
/// - Anything else is [`SfdxError::CommandFailed`].
pub fn parse_output(
    exit_ok: bool,
    args: &[String],
    stdout: &[u8],
    stderr: &[u8],
) -> Result<SfdxResponse> {
    if exit_ok {
        return Ok(serde_json::from_slice(stdout)?);
    }

    if !String::from_utf8_lossy(stdout).trim().is_empty() {
        return Ok(serde_json::from_slice(stdout)?);
    }

    let err_text = String::from_utf8_lossy(stderr);
    match err_text.find('{') {
        Some(pos) => Ok(serde_json::from_str(&err_text[pos..])?),
        None => Err(SfdxError::CommandFailed {
            args: args.join(" "),
            stderr: err_text.trim().to_string(),
        }),
    }
}
