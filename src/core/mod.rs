//! Core domain types for the board game
//!
//! This module contains the fundamental domain types with no search logic.
//! Tiles, racks, the board and its line views, and scored candidate turns.

mod board;
pub mod letter;
mod rack;
mod turn;

pub use board::{Board, BoardError, Cell, Line, Modifier, Orientation, Position};
pub use letter::{Letter, LetterError, WILDCARD};
pub use rack::{RACK_SIZE, Rack, RackError};
pub use turn::PotentialTurn;
