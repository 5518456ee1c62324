// tests/integration/error_handling.rs

use std::io::Write;

use tempfile::NamedTempFile;
use sfdxrun::config::{load_and_validate, validate_config};
use sfdxrun::errors::SfdxError;

use crate::common::ConfigFileBuilder;

fn load(contents: &str) -> Result<sfdxrun::config::ConfigFile, SfdxError> {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    load_and_validate(file.path())
}

fn expect_config_error(contents: &str, needle: &str) {
    match load(contents) {
        Err(SfdxError::ConfigError(msg)) => {
            assert!(msg.contains(needle), "message '{msg}' lacks '{needle}'");
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn empty_subcommand_is_rejected() {
    expect_config_error(
        r#"
[command.broken]
subcommand = "  "
"#,
        "empty `subcommand`",
    );
}

#[test]
fn subcommand_with_arguments_is_rejected() {
    expect_config_error(
        r#"
[command.broken]
subcommand = "force:org:list --all"
"#,
        "put arguments in `params`",
    );
}

#[test]
fn invalid_poll_interval_is_rejected() {
    expect_config_error(
        r#"
[config]
poll_interval = "soon"
"#,
        "poll_interval",
    );
    expect_config_error(
        r#"
[config]
poll_interval = "0s"
"#,
        "greater than zero",
    );
}

#[test]
fn zero_wait_and_zero_max_polls_are_rejected() {
    expect_config_error(
        r#"
[config]
poll_wait_minutes = 0
"#,
        "poll_wait_minutes",
    );
    expect_config_error(
        r#"
[config]
max_polls = 0
"#,
        "max_polls",
    );
}

#[test]
fn empty_sfdx_bin_is_rejected() {
    let raw = ConfigFileBuilder::new().sfdx_bin("").raw();
    assert!(matches!(
        validate_config(&raw),
        Err(SfdxError::ConfigError(_))
    ));
}

#[test]
fn unknown_result_processor_is_a_toml_error() {
    let result = load(
        r#"
[command.logs]
subcommand = "force:apex:log:list"
result_processor = "html"
"#,
    );
    assert!(matches!(result, Err(SfdxError::TomlError(_))));
}

#[test]
fn missing_explicit_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_and_validate(dir.path().join("nope.toml"));
    assert!(matches!(result, Err(SfdxError::IoError(_))));
}
