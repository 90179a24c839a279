// src/status/table.rs

use std::sync::OnceLock;

use tracing::{debug, trace};

use crate::errors::{Result, RunallError};
use crate::status::{CommandId, CommandStatus, StatusLine};

/// One command and its terminal status once known.
///
/// The cell is written at most once, by the task that owns this command.
/// Until then the entry reads as `Pending`.
#[derive(Debug)]
struct Entry {
    command: String,
    outcome: OnceLock<CommandStatus>,
}

/// Ordered table of command statuses, in submission order.
///
/// Writers never contend: every entry has exactly one writer and the
/// transition out of `Pending` is a single write-once store. Readers take
/// snapshots at any time and see either `Pending` or the final status of an
/// entry, never anything in between.
#[derive(Debug)]
pub struct StatusTable {
    entries: Vec<Entry>,
}

impl StatusTable {
    /// Create a table with every command `Pending`.
    pub fn new<I, S>(commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = commands
            .into_iter()
            .map(|command| Entry {
                command: command.into(),
                outcome: OnceLock::new(),
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current status of one entry.
    pub fn status(&self, id: CommandId) -> Option<CommandStatus> {
        self.entries.get(id.0).map(Entry::status)
    }

    /// Move an entry from `Pending` to a terminal status.
    ///
    /// Setting an entry twice, or setting it to `Pending`, is a programming
    /// error and is reported as [`RunallError::InvalidTransition`].
    pub fn set(&self, id: CommandId, status: CommandStatus) -> Result<()> {
        let entry = self
            .entries
            .get(id.0)
            .ok_or(RunallError::UnknownCommand(id))?;

        if !status.is_terminal() {
            return Err(RunallError::InvalidTransition {
                id,
                command: entry.command.clone(),
                reason: "an entry can only move to a terminal status",
            });
        }

        trace!(%id, command = %entry.command, ?status, "recording command status");

        entry
            .outcome
            .set(status)
            .map_err(|_| RunallError::InvalidTransition {
                id,
                command: entry.command.clone(),
                reason: "entry already has a terminal status",
            })?;

        debug!(%id, command = %entry.command, "command reached terminal status");
        Ok(())
    }

    /// Ordered copy of every entry and its current status.
    pub fn snapshot(&self) -> Vec<StatusLine> {
        self.entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| StatusLine {
                id: CommandId(idx),
                command: entry.command.clone(),
                status: entry.status(),
            })
            .collect()
    }

    /// True once no entry is `Pending`. Vacuously true for an empty table.
    pub fn all_terminal(&self) -> bool {
        self.entries.iter().all(|e| e.outcome.get().is_some())
    }

    pub fn has_failures(&self) -> bool {
        self.entries
            .iter()
            .any(|e| matches!(e.outcome.get(), Some(CommandStatus::Failed { .. })))
    }

    /// Failed entries, in table order.
    pub fn failures(&self) -> Vec<StatusLine> {
        self.snapshot()
            .into_iter()
            .filter(|line| line.status.is_failed())
            .collect()
    }
}

impl Entry {
    fn status(&self) -> CommandStatus {
        self.outcome
            .get()
            .cloned()
            .unwrap_or(CommandStatus::Pending)
    }
}
