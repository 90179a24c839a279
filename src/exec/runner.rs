// src/exec/runner.rs

//! Pluggable process runner abstraction.

use std::future::Future;
use std::pin::Pin;

/// Future returned by [`ProcessRunner::run`].
///
/// `Err` means the process could not be started or waited on at all.
pub type RunFuture<'a> = Pin<Box<dyn Future<Output = anyhow::Result<ProcessExit>> + Send + 'a>>;

/// How a finished process exited, plus whatever it wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessExit {
    pub success: bool,
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessExit {
    pub fn success() -> Self {
        Self {
            success: true,
            code: Some(0),
            ..Self::default()
        }
    }

    pub fn failure(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            code: Some(code),
            stderr: stderr.into(),
            ..Self::default()
        }
    }
}

/// Trait abstracting how a single command is executed.
///
/// Production code uses [`ShellRunner`](super::ShellRunner); tests provide
/// implementations that do not spawn real processes. One runner is shared by
/// every command of a run, so implementations must be `Sync`.
pub trait ProcessRunner: Send + Sync + 'static {
    /// Run `command` to completion.
    fn run<'a>(&'a self, command: &'a str) -> RunFuture<'a>;
}
