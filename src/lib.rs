//! Scrabble Solver
//!
//! Finds every legal turn for a rack of tiles on a board, scores each one
//! with the premium square rules, and ranks them best first. Rows and
//! columns are searched in parallel.
//!
//! # Quick Start
//!
//! ```rust
//! use scrabble_solver::core::Rack;
//! use scrabble_solver::dictionary::Dictionary;
//! use scrabble_solver::game::standard_board;
//! use scrabble_solver::solver::{ScrabbleScorer, TurnSearch};
//!
//! let dictionary = Dictionary::from_words(["go", "ego"]);
//! let search = TurnSearch::new(ScrabbleScorer, &dictionary);
//!
//! let turns = search.calculate_turns(&standard_board(), &Rack::parse("ego").unwrap());
//! println!("Best: {}", turns[0]);
//! ```

// Core domain types
pub mod core;

// Word lookup
pub mod dictionary;

// Turn search
pub mod solver;

// Tiles, bag and board layout
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logger setup
pub mod log;
