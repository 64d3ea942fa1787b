//! Dictionary index
//!
//! Answers word membership queries, including wildcard patterns for blank tiles.

mod index;
pub mod loader;

pub use index::{Dictionary, Lexicon};
