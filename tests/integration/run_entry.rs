// tests/integration/run_entry.rs

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use tempfile::NamedTempFile;
use sfdxrun::cli::CliArgs;
use sfdxrun::errors::SfdxError;
use sfdxrun::load_config;

const CONFIG: &str = r#"
[config]
sfdx_bin = "/nonexistent/sfdx"
data_dir = "/nonexistent/sfdxrun"

[command.query]
subcommand = "force:data:soql:query"
params = "-u configured@example.com"
"#;

fn config_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{CONFIG}").unwrap();
    file
}

fn parse(args: &[&str]) -> CliArgs {
    CliArgs::try_parse_from(args.iter().copied()).unwrap()
}

#[test]
fn cli_flags_override_config_file() {
    let file = config_file();
    let path = file.path().to_str().unwrap();

    let cfg = load_config(&parse(&["sfdxrun", "--config", path, "defaults"])).unwrap();
    assert_eq!(cfg.settings.sfdx_bin, PathBuf::from("/nonexistent/sfdx"));
    assert_eq!(cfg.settings.data_dir, PathBuf::from("/nonexistent/sfdxrun"));

    let cfg = load_config(&parse(&[
        "sfdxrun",
        "--config",
        path,
        "--sfdx-bin",
        "sf",
        "--data-dir",
        "/tmp/elsewhere",
        "defaults",
    ]))
    .unwrap();
    assert_eq!(cfg.settings.sfdx_bin, PathBuf::from("sf"));
    assert_eq!(cfg.settings.data_dir, PathBuf::from("/tmp/elsewhere"));
}

#[test]
fn missing_explicit_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let args = parse(&["sfdxrun", "--config", path.to_str().unwrap(), "commands"]);
    assert!(load_config(&args).is_err());
}

#[tokio::test]
async fn exec_unknown_command_is_not_found() {
    let file = config_file();
    let args = parse(&[
        "sfdxrun",
        "--config",
        file.path().to_str().unwrap(),
        "exec",
        "nope",
    ]);

    let err = sfdxrun::run(args).await.unwrap_err();
    match err.downcast_ref::<SfdxError>() {
        Some(SfdxError::CommandNotFound(name)) => assert_eq!(name, "nope"),
        other => panic!("Expected CommandNotFound, got: {:?}", other),
    }
}

#[cfg(unix)]
mod with_fake_sfdx {
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};

    use super::{config_file, parse};

    // Records its argv next to itself, one argument per line.
    const RECORDING_SFDX: &str = r#"#!/bin/sh
printf '%s\n' "$@" > "$(dirname "$0")/args.txt"
case "$1" in
  force:org:list)
    printf '%s\n' '{"status":0,"result":{"nonScratchOrgs":[],"scratchOrgs":[]}}'
    ;;
  *)
    printf '%s\n' '{"status":0,"result":{"totalSize":0}}'
    ;;
esac
"#;

    fn write_recording_sfdx(dir: &Path) -> std::io::Result<PathBuf> {
        let path = dir.join("sfdx");
        std::fs::write(&path, RECORDING_SFDX)?;
        let mut perms = std::fs::metadata(&path)?.permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms)?;
        Ok(path)
    }

    fn recorded_args(dir: &Path) -> Vec<String> {
        std::fs::read_to_string(dir.join("args.txt"))
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    // Single test so no other thread forks while the script is open for writing.
    #[tokio::test]
    async fn run_uses_overrides_and_exec_params() {
        crate::common::init_tracing();

        let file = config_file();
        let config = file.path().to_str().unwrap();
        let bin_dir = tempfile::tempdir().unwrap();
        let sfdx = write_recording_sfdx(bin_dir.path()).unwrap();
        let sfdx = sfdx.to_str().unwrap();
        let data_dir = tempfile::tempdir().unwrap();
        let data = data_dir.path().join("cache");
        let data = data.to_str().unwrap();

        sfdxrun::run(parse(&[
            "sfdxrun", "--config", config, "--sfdx-bin", sfdx, "exec", "query",
        ]))
        .await
        .unwrap();
        assert_eq!(
            recorded_args(bin_dir.path()),
            vec!["force:data:soql:query", "-u", "configured@example.com", "--json"]
        );

        sfdxrun::run(parse(&[
            "sfdxrun",
            "--config",
            config,
            "--sfdx-bin",
            sfdx,
            "exec",
            "query",
            "--params",
            "-u override@example.com -q SELECT\\ Id\\ FROM\\ Account",
        ]))
        .await
        .unwrap();
        assert_eq!(
            recorded_args(bin_dir.path()),
            vec![
                "force:data:soql:query",
                "-u",
                "override@example.com",
                "-q",
                "SELECT Id FROM Account",
                "--json"
            ]
        );

        sfdxrun::run(parse(&[
            "sfdxrun", "--config", config, "--sfdx-bin", sfdx, "--data-dir", data, "orgs",
        ]))
        .await
        .unwrap();
        assert_eq!(recorded_args(bin_dir.path()), vec!["force:org:list", "--json"]);
        assert!(data_dir.path().join("cache").join("orgs.json").is_file());
    }
}
