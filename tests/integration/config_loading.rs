// tests/integration/config_loading.rs

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use tempfile::NamedTempFile;
use sfdxrun::config::model::default_data_dir;
use sfdxrun::config::{load_and_validate, load_or_default, Settings};
use sfdxrun::types::{PollKind, ResultProcessor};

use crate::common::{CommandConfigBuilder, ConfigFileBuilder};

#[test]
fn full_config_is_loaded() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[config]
sfdx_bin = "/opt/sfdx/bin/sfdx"
data_dir = "/var/lib/sfdxrun"
poll_interval = "15s"
poll_wait_minutes = 5
max_polls = 40

[command.logs]
subcommand = "force:apex:log:list"
params = "-u dev@example.com"
result_processor = "loglist"

[command.run-tests]
subcommand = "force:apex:test:run"
params = "-u dev@example.com -l RunLocalTests"
start_message = "Running tests"
complete_message = "Tests finished"
poll = "test"
"#
    )
    .unwrap();

    let cfg = load_and_validate(file.path()).unwrap();

    assert_eq!(
        cfg.settings,
        Settings {
            sfdx_bin: PathBuf::from("/opt/sfdx/bin/sfdx"),
            data_dir: PathBuf::from("/var/lib/sfdxrun"),
            poll_interval: Duration::from_secs(15),
            poll_wait_minutes: 5,
            max_polls: Some(40),
        }
    );

    let logs = cfg.command("logs").unwrap();
    assert_eq!(logs.result_processor, Some(ResultProcessor::LogList));
    assert_eq!(logs.poll, None);

    let expected = CommandConfigBuilder::new("force:apex:test:run")
        .params("-u dev@example.com -l RunLocalTests")
        .start_message("Running tests")
        .complete_message("Tests finished")
        .poll(PollKind::Test)
        .build();
    assert_eq!(cfg.command("run-tests"), Some(&expected));
    assert!(cfg.command("missing").is_none());
}

#[test]
fn empty_file_gets_defaults() {
    let file = NamedTempFile::new().unwrap();
    let cfg = load_and_validate(file.path()).unwrap();

    assert_eq!(cfg.settings.sfdx_bin, PathBuf::from("sfdx"));
    assert_eq!(cfg.settings.poll_interval, Duration::from_secs(30));
    assert_eq!(cfg.settings.poll_wait_minutes, 2);
    assert_eq!(cfg.settings.max_polls, None);
    assert_eq!(cfg.settings.data_dir, default_data_dir());
    assert!(cfg.command.is_empty());
}

#[test]
fn missing_default_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = load_or_default(dir.path().join("Sfdxrun.toml")).unwrap();
    assert_eq!(cfg.settings.sfdx_bin, PathBuf::from("sfdx"));
}

#[test]
fn builder_matches_loaded_settings() {
    let cfg = ConfigFileBuilder::new()
        .sfdx_bin("sf")
        .poll_interval("250ms")
        .data_dir("/tmp/cache")
        .build();

    assert_eq!(cfg.settings.sfdx_bin, PathBuf::from("sf"));
    assert_eq!(cfg.settings.poll_interval, Duration::from_millis(250));
    assert_eq!(cfg.settings.data_dir, PathBuf::from("/tmp/cache"));
}

#[test]
fn poll_interval_units() {
    use sfdxrun::config::duration::parse_duration;

    assert_eq!(parse_duration("250ms"), Ok(Duration::from_millis(250)));
    assert_eq!(parse_duration("2m"), Ok(Duration::from_secs(120)));
    assert_eq!(parse_duration(" 1H "), Ok(Duration::from_secs(3600)));
    assert!(parse_duration("10").is_err());
    assert!(parse_duration("5d").is_err());
    assert!(parse_duration("").is_err());
}
