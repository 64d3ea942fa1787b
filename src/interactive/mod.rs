//! Interactive TUI interface
//!
//! Browse ranked turns with a live board preview and play them out of a
//! letter bag.

mod app;
mod rendering;

pub use app::{App, MessageStyle, run_tui};
