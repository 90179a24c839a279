// src/exec/mod.rs

//! Process execution layer.
//!
//! The supervisor talks to a [`ProcessRunner`] instead of spawning processes
//! directly, so tests can swap in a scripted runner.
//!
//! - [`runner`] defines the trait and the [`ProcessExit`] it produces.
//! - [`shell`] is the production runner built on `tokio::process::Command`.

pub mod runner;
pub mod shell;

pub use runner::{ProcessExit, ProcessRunner, RunFuture};
pub use shell::ShellRunner;
