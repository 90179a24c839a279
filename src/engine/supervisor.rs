// src/engine/supervisor.rs

//! Concurrent command supervision.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::engine::UNKNOWN_EXIT_CODE;
use crate::exec::{ProcessExit, ProcessRunner};
use crate::status::{CommandId, CommandStatus, StatusTable};

/// Launches commands through a shared [`ProcessRunner`].
#[derive(Debug)]
pub struct Supervisor<R: ProcessRunner> {
    runner: Arc<R>,
}

/// A launched set of commands.
///
/// Holds the shared table plus one join handle per command. [`Launched::wait`]
/// is the combined completion: it consumes `self`, so it resolves once.
#[derive(Debug)]
pub struct Launched {
    table: Arc<StatusTable>,
    handles: Vec<(CommandId, JoinHandle<()>)>,
}

impl<R: ProcessRunner> Supervisor<R> {
    pub fn new(runner: Arc<R>) -> Self {
        Self { runner }
    }

    /// Start every command concurrently.
    ///
    /// Must be called from within a Tokio runtime. Each command runs in its
    /// own task and writes only its own table entry, so one command can never
    /// stop or overwrite another.
    pub fn launch(&self, commands: Vec<String>) -> Launched {
        let table = Arc::new(StatusTable::new(commands));
        info!(count = table.len(), "launching commands");

        let handles = table
            .snapshot()
            .into_iter()
            .map(|line| {
                let runner = Arc::clone(&self.runner);
                let table = Arc::clone(&table);
                let handle = tokio::spawn(supervise(line.id, line.command, runner, table));
                (line.id, handle)
            })
            .collect();

        Launched { table, handles }
    }
}

impl Launched {
    /// Shared read handle for renderers.
    pub fn table(&self) -> Arc<StatusTable> {
        Arc::clone(&self.table)
    }

    /// Wait for every command to reach a terminal status.
    ///
    /// Handles are awaited in submission order; the commands themselves keep
    /// running concurrently, so this only ever waits for the slowest one. A
    /// task that panicked is recorded as a failure of its own command.
    pub async fn wait(self) -> Arc<StatusTable> {
        for (id, handle) in self.handles {
            if let Err(join_err) = handle.await {
                error!(%id, error = %join_err, "command task did not complete");
                let status = CommandStatus::Failed {
                    exit_code: UNKNOWN_EXIT_CODE,
                    stderr: format!("task panicked: {join_err}"),
                };
                if let Err(e) = self.table.set(id, status) {
                    debug!(%id, error = %e, "entry was already terminal before the task failed");
                }
            }
        }

        debug_assert!(self.table.all_terminal());
        info!(
            failed = self.table.failures().len(),
            total = self.table.len(),
            "all commands finished"
        );
        self.table
    }
}

/// Per-command task: run, convert, record.
async fn supervise<R: ProcessRunner>(
    id: CommandId,
    command: String,
    runner: Arc<R>,
    table: Arc<StatusTable>,
) {
    let status = match runner.run(&command).await {
        Ok(exit) => status_from_exit(exit),
        Err(err) => {
            warn!(%id, cmd = %command, error = %err, "command could not be run");
            CommandStatus::Failed {
                exit_code: UNKNOWN_EXIT_CODE,
                stderr: format!("{err:#}"),
            }
        }
    };

    if let Err(e) = table.set(id, status) {
        error!(%id, cmd = %command, error = %e, "failed to record command status");
    }
}

/// Map a finished process onto a terminal status.
pub fn status_from_exit(exit: ProcessExit) -> CommandStatus {
    if exit.success {
        CommandStatus::Succeeded
    } else {
        CommandStatus::Failed {
            exit_code: exit.code.unwrap_or(UNKNOWN_EXIT_CODE),
            stderr: exit.stderr,
        }
    }
}
