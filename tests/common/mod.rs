#![allow(dead_code)]

pub use sfdxrun_test_utils::builders::{
    fast_settings, CommandConfigBuilder, ConfigFileBuilder,
};
pub use sfdxrun_test_utils::{init_tracing, with_timeout, FakeBackend, RecordingSink};

use serde_json::Value;
use sfdxrun::exec::SfdxResponse;

/// Parse a response the way sfdx prints it.
pub fn response(json: Value) -> SfdxResponse {
    serde_json::from_value(json).expect("valid sfdx response JSON")
}
