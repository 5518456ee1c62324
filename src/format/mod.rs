// src/format/mod.rs

//! Mapping known sfdx result shapes to display lines.
//!
//! Every formatter returns plain `String` lines; writing them somewhere is
//! the job of an [`OutputSink`](crate::output::OutputSink).

pub mod apex_logs;
pub mod generic;
pub mod orgs;
pub mod test_report;

pub use apex_logs::{format_log_file, format_log_list};
pub use generic::{display_value, format_failure, format_key_values};
pub use orgs::format_org_list;
pub use test_report::format_test_results;

use serde_json::Value;

use crate::errors::Result;
use crate::types::ResultProcessor;

/// Render a successful result with the given processor, or as `key : value`
/// lines when there is none.
pub fn format_result(processor: Option<ResultProcessor>, result: &Value) -> Result<Vec<String>> {
    match processor {
        Some(ResultProcessor::LogList) => format_log_list(result),
        Some(ResultProcessor::LogFile) => Ok(format_log_file(result)),
        None => Ok(format_key_values(result)),
    }
}
