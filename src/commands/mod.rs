//! Command implementations

pub mod benchmark;
pub mod simple;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use simple::run_simple;
pub use solve::{SolveResult, solve_board};
