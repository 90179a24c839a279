// src/report.rs

//! Failure summary printed after every command has finished.
//!
//! Layout:
//!
//! ```text
//!
//!  COMMAND ERRORS ---------------
//!
//! <command> (Exit code <code>):
//!
//! <stderr>
//!
//! -------------------------------
//! ```
//!
//! The `:` and stderr part is left out when the command wrote nothing to
//! stderr.

use std::io::{self, Write};

use crossterm::style::Stylize;

use crate::status::{CommandStatus, StatusLine};

pub const BANNER_TITLE: &str = " COMMAND ERRORS ";
const BANNER_RULE: &str = "---------------";
const CLOSING_RULE: &str = "-------------------------------";

/// Write one section per failed entry, in table order.
///
/// Writes nothing when no entry failed. Returns the number of sections.
pub fn report_failures<W: Write>(
    out: &mut W,
    snapshot: &[StatusLine],
    styled: bool,
) -> io::Result<usize> {
    let failures: Vec<_> = snapshot
        .iter()
        .filter_map(|line| match &line.status {
            CommandStatus::Failed { exit_code, stderr } => {
                Some((line.command.as_str(), *exit_code, stderr.as_str()))
            }
            _ => None,
        })
        .collect();

    if failures.is_empty() {
        return Ok(0);
    }

    if styled {
        writeln!(
            out,
            "\n{}{}",
            BANNER_TITLE.white().on_red().bold(),
            BANNER_RULE.red().bold()
        )?;
    } else {
        writeln!(out, "\n{BANNER_TITLE}{BANNER_RULE}")?;
    }

    for &(command, exit_code, stderr) in &failures {
        let heading = if styled {
            format!(
                "{} (Exit code {})",
                command.white().bold().underlined(),
                exit_code.to_string().bold()
            )
        } else {
            format!("{command} (Exit code {exit_code})")
        };

        let detail = stderr.trim_end_matches(['\n', '\r']);
        if detail.is_empty() {
            writeln!(out, "\n{heading}")?;
        } else {
            writeln!(out, "\n{heading}:\n\n{detail}")?;
        }
    }

    if styled {
        writeln!(out, "\n{}", CLOSING_RULE.red())?;
    } else {
        writeln!(out, "\n{CLOSING_RULE}")?;
    }
    out.flush()?;

    Ok(failures.len())
}
