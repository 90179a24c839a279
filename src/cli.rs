// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{ArgAction, Parser, ValueEnum};

/// Command-line arguments for `runall`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "runall",
    version,
    about = "Run shell commands concurrently and summarize their results.",
    long_about = None
)]
pub struct CliArgs {
    /// Queue a shell command. Repeat the flag or pass several values.
    #[arg(
        short = 'c',
        long = "command",
        value_name = "CMD",
        required = true,
        num_args = 1..,
        action = ArgAction::Append
    )]
    pub commands: Vec<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `RUNALL_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

impl CliArgs {
    /// The commands to launch, in submission order, with empty entries
    /// removed.
    pub fn command_list(&self) -> Vec<String> {
        self.commands
            .iter()
            .filter(|c| !c.is_empty())
            .cloned()
            .collect()
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
