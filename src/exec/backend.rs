// src/exec/backend.rs

//! Pluggable sfdx backend abstraction.
//!
//! Everything that talks to sfdx goes through an `SfdxBackend` instead of
//! spawning processes directly, so tests can swap in a scripted fake while
//! production uses [`ProcessBackend`].

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::process::Stdio;

use anyhow::Context;
use tokio::process::Command;
use tracing::{debug, info};

use crate::errors::Result;

use super::response::{parse_output, SfdxResponse};

/// Trait abstracting how an sfdx argument vector is executed.
pub trait SfdxBackend: Send + Sync {
    /// Run sfdx with `args` (already including the subcommand and `--json`)
    /// and return the parsed response.
    fn invoke(
        &self,
        args: Vec<String>,
    ) -> Pin<Box<dyn Future<Output = Result<SfdxResponse>> + Send + '_>>;
}

/// Backend that spawns the real sfdx binary, one process per call.
#[derive(Debug, Clone)]
pub struct ProcessBackend {
    program: PathBuf,
}

impl ProcessBackend {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl SfdxBackend for ProcessBackend {
    fn invoke(
        &self,
        args: Vec<String>,
    ) -> Pin<Box<dyn Future<Output = Result<SfdxResponse>> + Send + '_>> {
        Box::pin(run_process(&self.program, args))
    }
}

async fn run_process(program: &Path, args: Vec<String>) -> Result<SfdxResponse> {
    info!(
        program = %program.display(),
        args = %args.join(" "),
        "executing sfdx command"
    );

    let output = Command::new(program)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .output()
        .await
        .with_context(|| format!("running {} {}", program.display(), args.join(" ")))?;

    let code = output.status.code().unwrap_or(-1);
    debug!(
        exit_code = code,
        success = output.status.success(),
        stdout_bytes = output.stdout.len(),
        stderr_bytes = output.stderr.len(),
        "sfdx process exited"
    );

    let response = parse_output(output.status.success(), &args, &output.stdout, &output.stderr)?;
    debug!(status = response.status, "parsed sfdx response");

    Ok(response)
}
