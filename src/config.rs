// src/config.rs

//! Runtime options resolved at startup.
//!
//! There is no config file: the command list comes from the CLI and the
//! remaining knobs are derived from the terminal and the environment.
//!
//! - `interactive` / `styled`: whether stdout is a terminal.
//! - `tick_interval`: redraw cadence, `RUNALL_TICK_MS` or 50ms.

use std::io::IsTerminal;
use std::time::Duration;

use crate::errors::{Result, RunallError};

/// Default redraw cadence of the live status block.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Upper bound accepted for `RUNALL_TICK_MS`.
const MAX_TICK_MS: u64 = 10_000;

/// Environment variable children read to force colorized output.
pub const FORCE_COLOR_VAR: &str = "FORCE_COLOR";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Redraw cadence for the periodic renderer.
    pub tick_interval: Duration,
    /// Arm the periodic renderer (stdout is a terminal).
    pub interactive: bool,
    /// Colour glyphs and banners.
    pub styled: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            tick_interval: DEFAULT_TICK_INTERVAL,
            interactive: false,
            styled: false,
        }
    }
}

impl RunOptions {
    /// Inspect stdout and the environment.
    pub fn detect() -> Result<Self> {
        let interactive = std::io::stdout().is_terminal();
        let tick_interval = match std::env::var("RUNALL_TICK_MS") {
            Ok(raw) => parse_tick_ms(&raw)?,
            Err(_) => DEFAULT_TICK_INTERVAL,
        };

        Ok(Self {
            tick_interval,
            interactive,
            styled: interactive,
        })
    }
}

/// Validate a `RUNALL_TICK_MS` value.
pub fn parse_tick_ms(raw: &str) -> Result<Duration> {
    let ms: u64 = raw.trim().parse().map_err(|_| {
        RunallError::ConfigError(format!(
            "RUNALL_TICK_MS must be an integer number of milliseconds, got {raw:?}"
        ))
    })?;

    if ms == 0 || ms > MAX_TICK_MS {
        return Err(RunallError::ConfigError(format!(
            "RUNALL_TICK_MS must be between 1 and {MAX_TICK_MS}, got {ms}"
        )));
    }

    Ok(Duration::from_millis(ms))
}

/// Extra environment for child processes.
///
/// Children write into pipes, so tools that colour only on a TTY would go
/// plain. When our own stdout is a terminal we set `FORCE_COLOR=true`,
/// unless the parent environment already carries a value for it.
pub fn child_env(interactive: bool, parent_force_color: Option<&str>) -> Vec<(String, String)> {
    if interactive && parent_force_color.is_none() {
        vec![(FORCE_COLOR_VAR.to_string(), "true".to_string())]
    } else {
        Vec::new()
    }
}
