// src/format/test_report.rs

//! Rendering for `force:apex:test:report` results.

use serde::Deserialize;
use serde_json::Value;

use crate::errors::Result;
use crate::format::generic::display_value;

#[derive(Debug, Deserialize)]
struct TestReport {
    #[serde(default)]
    summary: TestSummary,
    #[serde(default)]
    tests: Vec<TestRecord>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TestSummary {
    #[serde(default)]
    outcome: String,
    #[serde(default)]
    tests_ran: Value,
    #[serde(default)]
    passing: Value,
    #[serde(default)]
    failing: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct TestRecord {
    #[serde(default)]
    outcome: String,
    #[serde(default)]
    apex_class: ApexClassRef,
    #[serde(default)]
    method_name: String,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ApexClassRef {
    #[serde(rename = "Name", default)]
    name: String,
}

impl TestRecord {
    fn passed(&self) -> bool {
        self.outcome == "Pass"
    }

    fn qualified_name(&self) -> String {
        format!("{}.{}", self.apex_class.name, self.method_name)
    }
}

/// Counts arrive as numbers, but some sfdx versions print them as strings.
fn count(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n.as_u64().unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

fn display_count(value: &Value) -> String {
    match value {
        Value::Null => "0".to_string(),
        other => display_value(other),
    }
}

/// Summary lines, then the passing tests, then the failures with messages.
pub fn format_test_results(result: &Value) -> Result<Vec<String>> {
    let report = TestReport::deserialize(result)?;
    let summary = &report.summary;

    let mut lines = vec![
        format!("Outcome        : {}", summary.outcome),
        format!("Tests Executed : {}", display_count(&summary.tests_ran)),
        format!("Tests Passed   : {}", display_count(&summary.passing)),
        format!("Tests Failed   : {}", display_count(&summary.failing)),
    ];

    if count(&summary.passing) != 0 {
        lines.push("Passing : ".to_string());
        for (idx, test) in report.tests.iter().filter(|t| t.passed()).enumerate() {
            lines.push(format!("  {}) {}", idx + 1, test.qualified_name()));
        }
    }

    if count(&summary.failing) != 0 {
        lines.push("Failures : ".to_string());
        for (idx, test) in report.tests.iter().filter(|t| !t.passed()).enumerate() {
            lines.push(format!(
                "  {}) {} - {}",
                idx + 1,
                test.qualified_name(),
                test.message.as_deref().unwrap_or("")
            ));
        }
    }

    Ok(lines)
}
