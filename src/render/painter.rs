// src/render/painter.rs

use std::io::{self, Write};

use crossterm::cursor::MoveToPreviousLine;
use crossterm::queue;
use crossterm::terminal::{self, Clear, ClearType};

use crate::render::frame::build_frame;
use crate::status::StatusLine;

/// Width used to account for soft-wrapped rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapWidth {
    /// No wrapping (not a terminal): only embedded newlines add rows.
    Unbounded,
    /// Fixed column count.
    Columns(u16),
    /// Ask the terminal on every draw, so resizes are picked up.
    Terminal,
}

impl WrapWidth {
    fn columns(self) -> Option<usize> {
        match self {
            WrapWidth::Unbounded => None,
            WrapWidth::Columns(cols) => Some(usize::from(cols)),
            WrapWidth::Terminal => terminal::size().ok().map(|(cols, _)| usize::from(cols)),
        }
        .filter(|&cols| cols > 0)
    }
}

/// In-place painter for a multi-line status block.
///
/// Remembers how many screen rows it drew last, after embedded newlines and
/// soft wrapping; the next draw moves the cursor back to the top of that
/// block and clears it before writing.
#[derive(Debug)]
pub struct Renderer<W: Write> {
    out: W,
    styled: bool,
    wrap: WrapWidth,
    drawn_rows: usize,
    tick: usize,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, styled: bool) -> Self {
        Self {
            out,
            styled,
            wrap: WrapWidth::Unbounded,
            drawn_rows: 0,
            tick: 0,
        }
    }

    pub fn with_wrap(mut self, wrap: WrapWidth) -> Self {
        self.wrap = wrap;
        self
    }

    /// Screen rows occupied by the previous draw.
    pub fn drawn_rows(&self) -> usize {
        self.drawn_rows
    }

    /// Build a frame from `snapshot` and draw it, advancing the spinner.
    pub fn draw_snapshot(&mut self, snapshot: &[StatusLine]) -> io::Result<()> {
        let lines = build_frame(snapshot, self.tick, self.styled);
        self.tick = self.tick.wrapping_add(1);
        self.draw(&lines)
    }

    /// Replace the previously drawn block with `lines`.
    pub fn draw(&mut self, lines: &[String]) -> io::Result<()> {
        if self.drawn_rows > 0 {
            let up = u16::try_from(self.drawn_rows).unwrap_or(u16::MAX);
            queue!(self.out, MoveToPreviousLine(up), Clear(ClearType::FromCursorDown))?;
        }

        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()?;

        let columns = self.wrap.columns();
        self.drawn_rows = lines.iter().map(|line| screen_rows(line, columns)).sum();
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Rows a printed line takes: one per `\n`-separated segment, and each
/// segment wraps every `columns` visible characters.
pub fn screen_rows(line: &str, columns: Option<usize>) -> usize {
    line.split('\n')
        .map(|segment| match columns {
            Some(cols) => visible_width(segment).div_ceil(cols).max(1),
            None => 1,
        })
        .sum()
}

/// Character count with ANSI escape sequences (`ESC [ ... final`) skipped.
fn visible_width(segment: &str) -> usize {
    let mut width = 0;
    let mut chars = segment.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            if chars.peek() == Some(&'[') {
                chars.next();
                // Parameters and intermediates run until a final byte in '@'..='~'.
                for c in chars.by_ref() {
                    if ('@'..='~').contains(&c) {
                        break;
                    }
                }
            }
            continue;
        }
        if c != '\r' {
            width += 1;
        }
    }

    width
}
