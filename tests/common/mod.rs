#![allow(dead_code)]

use std::time::Duration;

use runall::config::RunOptions;

pub use runall_test_utils::init_tracing;

pub fn commands(cmds: &[&str]) -> Vec<String> {
    cmds.iter().map(|c| c.to_string()).collect()
}

/// Options for a non-terminal stdout: no ticker, no colours.
pub fn plain_options() -> RunOptions {
    RunOptions::default()
}

/// Options with the live ticker armed at a fast cadence.
pub fn interactive_options() -> RunOptions {
    RunOptions {
        tick_interval: Duration::from_millis(5),
        interactive: true,
        styled: false,
    }
}
