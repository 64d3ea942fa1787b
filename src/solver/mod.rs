//! Turn search
//!
//! Permutation generation, per-line anchor search, scoring, and the parallel
//! engine that ties them together.

mod config;
mod engine;
mod line;
mod permutations;
mod progress;
mod scoring;

pub use config::SearchConfig;
pub use engine::TurnSearch;
pub use permutations::{PermutationCache, permutations};
pub use progress::{Progress, ProgressSnapshot};
pub use scoring::{Scorer, ScrabbleScorer};
