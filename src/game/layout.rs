//! Standard board layout
//!
//! The premium squares are symmetric about both axes and both diagonals, so
//! each one is looked up by its distance from the nearest edge on each axis.

use crate::core::{Board, Modifier};

/// Side length of a standard board
pub const STANDARD_SIZE: usize = 15;

/// An empty 15x15 board with the standard premium squares
///
/// # Examples
/// ```
/// use scrabble_solver::core::{Modifier, Position};
/// use scrabble_solver::game::layout::standard_board;
///
/// let board = standard_board();
/// let corner = board.cell(Position::new(0, 0)).unwrap();
/// assert_eq!(corner.modifier(), Some(Modifier::TRIPLE_WORD));
/// ```
#[must_use]
pub fn standard_board() -> Board {
    Board::with_modifiers(STANDARD_SIZE, |position| {
        modifier_at(
            distance_from_edge(position.row),
            distance_from_edge(position.col),
        )
    })
}

#[inline]
const fn distance_from_edge(index: usize) -> usize {
    let middle = STANDARD_SIZE / 2;
    middle - index.abs_diff(middle)
}

const fn modifier_at(row: usize, col: usize) -> Option<Modifier> {
    match (row, col) {
        (0, 0 | 7) | (7, 0) => Some(Modifier::TRIPLE_WORD),
        (1, 1) | (2, 2) | (3, 3) | (4, 4) | (7, 7) => Some(Modifier::DOUBLE_WORD),
        (1, 5) | (5, 1 | 5) => Some(Modifier::TRIPLE_LETTER),
        (0 | 7, 3) | (2, 6) | (3, 0 | 7) | (6, 2 | 6) => Some(Modifier::DOUBLE_LETTER),
        _ => None,
    }
}
