//! Interactive TUI interface
//!
//! A practice board explorer built on ratatui.

pub mod app;
pub mod rendering;

pub use app::{App, run_tui};
