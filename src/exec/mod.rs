// src/exec/mod.rs

//! sfdx invocation layer.
//!
//! - [`args`] turns a subcommand and a parameter string into argv.
//! - [`backend`] provides the `SfdxBackend` trait and the `ProcessBackend`
//!   that runs the real binary via `tokio::process::Command`.
//! - [`response`] models the `--json` envelope and parses process output.

pub mod args;
pub mod backend;
pub mod response;

pub use args::{build_args, split_params, username_from_params};
pub use backend::{ProcessBackend, SfdxBackend};
pub use response::{parse_output, Failure, SfdxResponse};

use crate::errors::Result;

/// Run `sfdx <subcommand> <params...> --json` through `backend`.
pub async fn run_command<B>(backend: &B, subcommand: &str, params: &str) -> Result<SfdxResponse>
where
    B: SfdxBackend + ?Sized,
{
    let args = build_args(subcommand, params);
    backend.invoke(args).await
}
