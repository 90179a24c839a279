// src/render/frame.rs

use crossterm::style::Stylize;

use crate::status::{CommandStatus, StatusLine};

pub const SUCCESS_GLYPH: &str = "✔";
pub const FAILURE_GLYPH: &str = "✖";

/// Braille "dots" spinner.
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// One line per entry, in table order.
///
/// `tick` selects the spinner frame shown for pending commands.
pub fn build_frame(snapshot: &[StatusLine], tick: usize, styled: bool) -> Vec<String> {
    let spinner = SPINNER_FRAMES[tick % SPINNER_FRAMES.len()];

    snapshot
        .iter()
        .map(|line| {
            let glyph = match (&line.status, styled) {
                (CommandStatus::Succeeded, true) => SUCCESS_GLYPH.green().to_string(),
                (CommandStatus::Succeeded, false) => SUCCESS_GLYPH.to_string(),
                (CommandStatus::Failed { .. }, true) => FAILURE_GLYPH.red().to_string(),
                (CommandStatus::Failed { .. }, false) => FAILURE_GLYPH.to_string(),
                (CommandStatus::Pending, true) => spinner.cyan().to_string(),
                (CommandStatus::Pending, false) => spinner.to_string(),
            };
            format!("{glyph} {}", line.command)
        })
        .collect()
}
