// src/engine/orchestrator.rs

//! Run-level state machine.
//!
//! `Starting → Running → Draining → Done(exit_code)`
//!
//! The orchestrator owns the output streams. The live ticker only reads the
//! table; the final frame is drawn here, after the ticker has stopped, so it
//! is always complete.

use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, info};

use crate::config::RunOptions;
use crate::engine::supervisor::Supervisor;
use crate::errors::Result;
use crate::exec::ProcessRunner;
use crate::render::{Renderer, SharedRenderer, WrapWidth, spawn_ticker};
use crate::report::report_failures;
use crate::status::{CommandStatus, StatusLine};

/// Exit code when every command succeeded.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code when at least one command failed.
pub const EXIT_FAILURE: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Starting,
    Running,
    Draining,
    Done(i32),
}

/// Final statuses of a run and the exit code derived from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub statuses: Vec<StatusLine>,
    pub exit_code: i32,
}

impl RunReport {
    pub fn has_failures(&self) -> bool {
        self.statuses.iter().any(|line| line.status.is_failed())
    }

    pub fn all_succeeded(&self) -> bool {
        self.statuses
            .iter()
            .all(|line| line.status == CommandStatus::Succeeded)
    }
}

pub struct Orchestrator<R, O, E>
where
    R: ProcessRunner,
    O: Write + Send + 'static,
    E: Write,
{
    runner: Arc<R>,
    renderer: SharedRenderer<O>,
    errors: E,
    options: RunOptions,
    phase: Phase,
}

impl<R, O, E> Orchestrator<R, O, E>
where
    R: ProcessRunner,
    O: Write + Send + 'static,
    E: Write,
{
    /// `out` receives the status block, `errors` the failure report.
    pub fn new(runner: Arc<R>, out: O, errors: E, options: RunOptions) -> Self {
        let wrap = if options.interactive {
            WrapWidth::Terminal
        } else {
            WrapWidth::Unbounded
        };
        let renderer = Renderer::new(out, options.styled).with_wrap(wrap);

        Self {
            runner,
            renderer: Arc::new(Mutex::new(renderer)),
            errors,
            options,
            phase: Phase::Starting,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    fn enter(&mut self, next: Phase) {
        debug!(from = ?self.phase, to = ?next, "orchestrator phase change");
        self.phase = next;
    }

    /// Run every command to completion and compute the exit code.
    ///
    /// Command failures end up in the report, never in `Err`. An `Err` here
    /// means the run itself broke (e.g. the terminal could not be written);
    /// the phase is then `Done(1)` as well.
    pub async fn run(&mut self, commands: Vec<String>) -> Result<RunReport> {
        let result = self.drive(commands).await;
        if result.is_err() {
            self.enter(Phase::Done(EXIT_FAILURE));
        }
        result
    }

    async fn drive(&mut self, commands: Vec<String>) -> Result<RunReport> {
        self.enter(Phase::Starting);

        let launched = Supervisor::new(Arc::clone(&self.runner)).launch(commands);
        let ticker = self.options.interactive.then(|| {
            spawn_ticker(
                launched.table(),
                Arc::clone(&self.renderer),
                self.options.tick_interval,
            )
        });

        self.enter(Phase::Running);
        let table = launched.wait().await;

        self.enter(Phase::Draining);
        if let Some(ticker) = ticker {
            ticker.stop().await;
        }

        let statuses = table.snapshot();
        self.renderer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .draw_snapshot(&statuses)?;

        let mut report = RunReport {
            statuses,
            exit_code: EXIT_SUCCESS,
        };
        if report.has_failures() {
            let sections =
                report_failures(&mut self.errors, &report.statuses, self.options.styled)?;
            info!(sections, "reported failed commands");
            report.exit_code = EXIT_FAILURE;
        }

        self.enter(Phase::Done(report.exit_code));
        Ok(report)
    }
}
