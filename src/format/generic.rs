// src/format/generic.rs

use serde_json::Value;

use crate::exec::SfdxResponse;

/// Render a JSON value for display: strings unquoted, everything else as
/// compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// One `key : value` line per entry of `result`.
///
/// Arrays use the element index as key. A scalar result is a single line;
/// `null` renders nothing.
pub fn format_key_values(result: &Value) -> Vec<String> {
    match result {
        Value::Object(map) => map
            .iter()
            .map(|(key, value)| format!("{key} : {}", display_value(value)))
            .collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(idx, value)| format!("{idx} : {}", display_value(value)))
            .collect(),
        Value::Null => Vec::new(),
        other => vec![display_value(other)],
    }
}

/// Lines describing why a command did not succeed.
pub fn format_failure(response: &SfdxResponse) -> Vec<String> {
    if let Some(message) = response.message.as_deref() {
        return vec![format!("Command failed {message}")];
    }

    let failures = response.failures();
    if failures.is_empty() {
        return vec![format!("Command failed (status {})", response.status)];
    }

    let mut lines = Vec::with_capacity(failures.len() + 1);
    lines.push("Command failed".to_string());
    for failure in failures {
        lines.push(format!("{} - {}", failure.name, failure.message));
    }
    lines
}
