// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod render;
pub mod report;
pub mod status;

use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{FORCE_COLOR_VAR, RunOptions, child_env};
use crate::engine::Orchestrator;
use crate::exec::ShellRunner;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - runtime options (terminal detection, tick interval)
/// - the shell runner and its child environment
/// - the orchestrator writing the status block to stdout and the failure
///   report to stderr
///
/// Returns the process exit code.
pub async fn run(args: CliArgs) -> Result<i32> {
    let commands = args.command_list();
    let options = RunOptions::detect()?;
    debug!(?options, "resolved run options");

    let parent_force_color = std::env::var(FORCE_COLOR_VAR).ok();
    let runner = ShellRunner::new().with_envs(child_env(
        options.interactive,
        parent_force_color.as_deref(),
    ));

    info!(?commands, "queued commands");

    let mut orchestrator = Orchestrator::new(
        Arc::new(runner),
        std::io::stdout(),
        std::io::stderr(),
        options,
    );
    let report = orchestrator.run(commands).await?;

    Ok(report.exit_code)
}
