// src/errors.rs

//! Crate-wide error aliases and helpers.
//!
//! Command failures are never errors: they are recorded as
//! [`CommandStatus::Failed`](crate::status::CommandStatus::Failed) in the
//! status table. The variants below cover setup problems and misuse of the
//! table itself.

use thiserror::Error;

use crate::status::CommandId;

#[derive(Error, Debug)]
pub enum RunallError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid status transition for command #{id} ({command}): {reason}")]
    InvalidTransition {
        id: CommandId,
        command: String,
        reason: &'static str,
    },

    #[error("Unknown command id: {0}")]
    UnknownCommand(CommandId),
}

pub type Result<T> = std::result::Result<T, RunallError>;
