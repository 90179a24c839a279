// src/exec/shell.rs

//! Production runner: one `sh -c` (or `cmd /C`) child per command.

use std::process::Stdio;

use anyhow::Context;
use tokio::process::Command;
use tracing::{debug, info, trace};

use super::runner::{ProcessExit, ProcessRunner, RunFuture};

/// Runs commands through the platform shell, capturing stdout and stderr.
///
/// Children inherit the parent's environment; `extra_env` is layered on top.
#[derive(Debug, Clone, Default)]
pub struct ShellRunner {
    extra_env: Vec<(String, String)>,
}

impl ShellRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_env.push((key.into(), value.into()));
        self
    }

    pub fn with_envs<I>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.extra_env.extend(vars);
        self
    }

    fn build_command(&self, command: &str) -> Command {
        // Build a shell command appropriate for the platform.
        let mut cmd = if cfg!(windows) {
            let mut c = Command::new("cmd");
            c.arg("/C").arg(command);
            c
        } else {
            let mut c = Command::new("sh");
            c.arg("-c").arg(command);
            c
        };

        cmd.envs(self.extra_env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }

    async fn run_inner(&self, command: &str) -> anyhow::Result<ProcessExit> {
        info!(cmd = %command, "starting command process");

        let child = self
            .build_command(command)
            .spawn()
            .with_context(|| format!("spawning process for command '{command}'"))?;

        // Reads both pipes concurrently while waiting, so neither can fill up.
        let output = child
            .wait_with_output()
            .await
            .with_context(|| format!("waiting for process of command '{command}'"))?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        trace!(cmd = %command, %stdout, "captured stdout");

        let exit = ProcessExit {
            success: output.status.success(),
            code: output.status.code(),
            stdout,
            stderr,
        };

        debug!(
            cmd = %command,
            exit_code = ?exit.code,
            success = exit.success,
            "command process exited"
        );

        Ok(exit)
    }
}

impl ProcessRunner for ShellRunner {
    fn run<'a>(&'a self, command: &'a str) -> RunFuture<'a> {
        Box::pin(self.run_inner(command))
    }
}
