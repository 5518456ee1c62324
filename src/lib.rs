// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod format;
pub mod fs;
pub mod logging;
pub mod org;
pub mod output;
pub mod types;

use anyhow::{bail, Result};
use tracing::{debug, info};

use crate::cli::{CliArgs, Command};
use crate::config::{default_config_path, load_and_validate, load_or_default, CommandConfig, ConfigFile};
use crate::engine::Session;
use crate::exec::{build_args, ProcessBackend};
use crate::format::format_org_list;
use crate::fs::RealFileSystem;
use crate::output::{ConsoleSink, OutputSink};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading and CLI overrides
/// - the process backend and console sink
/// - dispatch to the requested subcommand
pub async fn run(args: CliArgs) -> Result<()> {
    let cfg = load_config(&args)?;
    debug!(settings = ?cfg.settings, commands = cfg.command.len(), "configuration loaded");

    let backend = ProcessBackend::new(cfg.settings.sfdx_bin.clone());
    let session = Session::new(backend, ConsoleSink, cfg.settings.clone());

    match args.command {
        Command::Exec { name, params } => {
            let Some(command) = cfg.command(&name) else {
                return Err(errors::SfdxError::CommandNotFound(name).into());
            };
            let params = params.unwrap_or_else(|| command.params.clone());
            execute(&session, command, &params).await
        }
        Command::Run {
            subcommand,
            params,
            processor,
            poll,
            start_message,
            complete_message,
        } => {
            let command = CommandConfig {
                subcommand,
                params: params.clone(),
                start_message,
                complete_message,
                result_processor: processor,
                poll,
            };
            execute(&session, &command, &params).await
        }
        Command::Orgs { force } => {
            let orgs = org::load_orgs(
                &RealFileSystem,
                session.backend(),
                &cfg.settings.data_dir,
                force,
            )
            .await?;
            session.sink().lines(&format_org_list(&orgs)?);
            Ok(())
        }
        Command::Defaults => {
            let defaults = org::get_config(session.backend()).await?;
            let sink = session.sink();
            sink.line(&format!(
                "Default username : {}",
                defaults.username.as_deref().unwrap_or("(none)")
            ));
            sink.line(&format!(
                "Default dev hub  : {}",
                defaults.devhub_username.as_deref().unwrap_or("(none)")
            ));
            Ok(())
        }
        Command::Commands => {
            print_commands(&cfg);
            Ok(())
        }
    }
}

async fn execute(
    session: &Session<ProcessBackend, ConsoleSink>,
    command: &CommandConfig,
    params: &str,
) -> Result<()> {
    let outcome = session.execute_with_logging(command, params).await?;
    if !outcome.success {
        bail!(
            "sfdx {} failed (status {})",
            command.subcommand,
            outcome.response.status
        );
    }
    info!(subcommand = %command.subcommand, "done");
    Ok(())
}

/// Load the explicit `--config` file, or the default one if it exists,
/// then apply `--sfdx-bin` / `--data-dir`.
pub fn load_config(args: &CliArgs) -> Result<ConfigFile> {
    let mut cfg = match &args.config {
        Some(path) => load_and_validate(path)?,
        None => load_or_default(default_config_path())?,
    };

    if let Some(bin) = &args.sfdx_bin {
        cfg.settings.sfdx_bin = bin.clone();
    }
    if let Some(dir) = &args.data_dir {
        cfg.settings.data_dir = dir.clone();
    }

    Ok(cfg)
}

/// Print settings and every configured command with the argv it would use.
fn print_commands(cfg: &ConfigFile) {
    let settings = &cfg.settings;
    println!("sfdxrun commands");
    println!("  config.sfdx_bin = {}", settings.sfdx_bin.display());
    println!("  config.data_dir = {}", settings.data_dir.display());
    println!("  config.poll_interval = {:?}", settings.poll_interval);
    println!("  config.poll_wait_minutes = {}", settings.poll_wait_minutes);
    if let Some(max) = settings.max_polls {
        println!("  config.max_polls = {max}");
    }
    println!();

    println!("commands ({}):", cfg.command.len());
    for (name, command) in cfg.command.iter() {
        println!("  - {name}");
        println!(
            "      argv: {} {}",
            settings.sfdx_bin.display(),
            build_args(&command.subcommand, &command.params).join(" ")
        );
        if let Some(processor) = command.result_processor {
            println!("      result_processor: {processor}");
        }
        if let Some(poll) = command.poll {
            println!("      poll: {poll}");
        }
        if let Some(ref msg) = command.start_message {
            println!("      start_message: {msg}");
        }
        if let Some(ref msg) = command.complete_message {
            println!("      complete_message: {msg}");
        }
    }
}
