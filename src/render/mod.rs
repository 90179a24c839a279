// src/render/mod.rs

//! Live status display.
//!
//! - [`frame`] turns a table snapshot into text lines (pure).
//! - [`painter`] writes those lines to a terminal, overwriting the block it
//!   drew last time.
//! - [`ticker`] redraws periodically while commands run.

pub mod frame;
pub mod painter;
pub mod ticker;

pub use frame::{FAILURE_GLYPH, SPINNER_FRAMES, SUCCESS_GLYPH, build_frame};
pub use painter::{Renderer, WrapWidth, screen_rows};
pub use ticker::{SharedRenderer, Ticker, spawn_ticker};
