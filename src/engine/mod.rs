// src/engine/mod.rs

//! Orchestration engine for runall.
//!
//! - [`supervisor`] launches one task per command and records each outcome
//!   in the shared [`StatusTable`](crate::status::StatusTable).
//! - [`orchestrator`] drives a whole run: launch, live rendering, final
//!   redraw, failure report and the aggregate exit code.

pub mod orchestrator;
pub mod supervisor;

pub use orchestrator::{Orchestrator, Phase, RunReport};
pub use supervisor::{Launched, Supervisor, status_from_exit};

/// Exit code used when a child has no code of its own (killed by a signal)
/// or could not be spawned.
pub const UNKNOWN_EXIT_CODE: i32 = -1;
