// src/format/apex_logs.rs

//! Rendering for `force:apex:log:list` and `force:apex:log:get` results.

use serde::Deserialize;
use serde_json::Value;

use crate::errors::Result;
use crate::format::generic::display_value;

pub const LOG_FILE_START: &str = "------------- Log File Start -------------";
pub const LOG_FILE_END: &str = "------------- Log File End -------------";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ApexLogRecord {
    #[serde(default)]
    log_user: LogUser,
    #[serde(default)]
    operation: String,
    #[serde(default)]
    log_length: Value,
    #[serde(default)]
    start_time: String,
    #[serde(default)]
    status: String,
}

#[derive(Debug, Default, Deserialize)]
struct LogUser {
    #[serde(rename = "Name", default)]
    name: String,
}

/// `N : <user> - <operation> (<length>) - <start time>, <status>`, 1-based.
pub fn format_log_list(result: &Value) -> Result<Vec<String>> {
    let records = Vec::<ApexLogRecord>::deserialize(result)?;

    Ok(records
        .iter()
        .enumerate()
        .map(|(idx, log)| {
            format!(
                "{} : {} - {} ({}) - {}, {}",
                idx + 1,
                log.log_user.name,
                log.operation,
                display_value(&log.log_length),
                log.start_time,
                log.status
            )
        })
        .collect())
}

/// Log bodies wrapped in start/end banners.
///
/// Older sfdx versions return `{"log": "..."}`, newer ones an array of
/// such objects.
pub fn format_log_file(result: &Value) -> Vec<String> {
    let bodies: Vec<&str> = match result {
        Value::Array(items) => items.iter().filter_map(log_body).collect(),
        Value::String(s) => vec![s.as_str()],
        other => log_body(other).into_iter().collect(),
    };

    let mut lines = Vec::with_capacity(bodies.len() * 3);
    for body in bodies {
        lines.push(LOG_FILE_START.to_string());
        lines.push(body.to_string());
        lines.push(LOG_FILE_END.to_string());
    }
    lines
}

fn log_body(value: &Value) -> Option<&str> {
    value.get("log").and_then(Value::as_str)
}
