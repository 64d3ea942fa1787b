//! Terminal output formatting
//!
//! Display utilities for CLI results and board previews.

pub mod display;
pub mod formatters;

pub use display::{print_benchmark_result, print_solve_result, write_board, write_turns};
