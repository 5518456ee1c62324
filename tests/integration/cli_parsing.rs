// tests/integration/cli_parsing.rs

use std::path::PathBuf;

use clap::Parser;
use sfdxrun::cli::{CliArgs, Command, LogLevel};
use sfdxrun::logging::build_filter;
use sfdxrun::types::{PollKind, ResultProcessor};

#[test]
fn run_accepts_hyphenated_params() {
    let args = CliArgs::try_parse_from([
        "sfdxrun",
        "run",
        "force:apex:test:run",
        "--params",
        "-u dev@example.com -l RunLocalTests",
        "--poll",
        "test",
        "--processor",
        "loglist",
    ])
    .unwrap();

    match args.command {
        Command::Run {
            subcommand,
            params,
            processor,
            poll,
            ..
        } => {
            assert_eq!(subcommand, "force:apex:test:run");
            assert_eq!(params, "-u dev@example.com -l RunLocalTests");
            assert_eq!(processor, Some(ResultProcessor::LogList));
            assert_eq!(poll, Some(PollKind::Test));
        }
        other => panic!("Expected Run, got: {:?}", other),
    }
}

#[test]
fn global_flags_work_after_subcommand() {
    let args = CliArgs::try_parse_from([
        "sfdxrun",
        "orgs",
        "--force",
        "--data-dir",
        "/tmp/orgs",
        "--sfdx-bin",
        "sf",
        "--log-level",
        "debug",
    ])
    .unwrap();

    assert!(matches!(args.command, Command::Orgs { force: true }));
    assert_eq!(args.data_dir, Some(PathBuf::from("/tmp/orgs")));
    assert_eq!(args.sfdx_bin, Some(PathBuf::from("sf")));
    assert!(matches!(args.log_level, Some(LogLevel::Debug)));
}

#[test]
fn exec_params_are_optional() {
    let args = CliArgs::try_parse_from(["sfdxrun", "exec", "logs"]).unwrap();
    match args.command {
        Command::Exec { name, params } => {
            assert_eq!(name, "logs");
            assert_eq!(params, None);
        }
        other => panic!("Expected Exec, got: {:?}", other),
    }
}

#[test]
fn log_filter_prefers_cli_level_over_env() {
    let filter = build_filter(Some(LogLevel::Warn), Some("trace")).unwrap();
    assert_eq!(filter.to_string(), "warn");

    let filter = build_filter(None, Some("sfdxrun=debug")).unwrap();
    assert_eq!(filter.to_string(), "sfdxrun=debug");

    let filter = build_filter(None, Some("  ")).unwrap();
    assert_eq!(filter.to_string(), "info");
}
