// src/status/mod.rs

//! Per-command lifecycle state and the shared status table.
//!
//! - [`CommandStatus`] is the lifecycle of one command.
//! - [`StatusTable`] is the only shared mutable structure in the crate. It is
//!   written by the supervisor's per-command tasks and read by the renderer
//!   and the error reporter.

use std::fmt;

pub mod table;

pub use table::StatusTable;

/// Stable handle for one submitted command: its submission index.
///
/// Duplicate command strings get distinct ids, so they never share a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CommandId(pub usize);

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle state of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandStatus {
    /// Process started, not yet finished.
    Pending,
    /// Process exited with a success code.
    Succeeded,
    /// Process exited non-success, was killed, or could not be spawned.
    Failed { exit_code: i32, stderr: String },
}

impl CommandStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, CommandStatus::Pending)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, CommandStatus::Failed { .. })
    }
}

/// One row of a table snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub id: CommandId,
    pub command: String,
    pub status: CommandStatus,
}
