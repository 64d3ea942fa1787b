//! Scoring engine
//!
//! Points for a placement along one line, following the premium square rules.

use crate::core::{Board, Letter, Position};

/// Trait for point calculation
///
/// Implementations must be thread-safe to be shared across line tasks.
pub trait Scorer: Sync {
    /// Score a word covering `cells`, with `placed` filling its empty cells in order
    ///
    /// `board` is the state before the turn: a cell without a letter is newly filled.
    fn score(&self, board: &Board, cells: &[Position], placed: &[Letter]) -> u32;
}

/// Official premium-square scoring for the main word
///
/// Pre-existing tiles count face value. A new tile on a letter premium is
/// multiplied in place; word premiums under new tiles multiply the sum.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrabbleScorer;

impl Scorer for ScrabbleScorer {
    fn score(&self, board: &Board, cells: &[Position], placed: &[Letter]) -> u32 {
        let mut sum = 0;
        let mut word_multiplier = 1;
        let mut new_tiles = placed.iter();

        for &position in cells {
            let Some(cell) = board.cell(position) else {
                continue;
            };
            if let Some(existing) = cell.letter() {
                sum += existing.value();
                continue;
            }
            let Some(tile) = new_tiles.next() else {
                break;
            };
            let mut points = tile.value();
            if let Some(modifier) = cell.modifier() {
                if modifier.affects_whole_word() {
                    word_multiplier *= modifier.multiplier();
                } else {
                    points *= modifier.multiplier();
                }
            }
            sum += points;
        }

        sum * word_multiplier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Modifier;

    fn tiles(text: &str) -> Vec<Letter> {
        text.chars().map(|c| Letter::standard(c).unwrap()).collect()
    }

    fn row_cells(row: usize, cols: std::ops::Range<usize>) -> Vec<Position> {
        cols.map(|col| Position::new(row, col)).collect()
    }

    #[test]
    fn plain_cells_sum_face_values() {
        let board = Board::from_rows(&[".....", ".cat.", ".....", ".....", "....."]).unwrap();
        let score = ScrabbleScorer.score(&board, &row_cells(1, 1..5), &tiles("s"));
        assert_eq!(score, 3 + 1 + 1 + 1);
    }

    #[test]
    fn letter_premium_multiplies_only_its_tile() {
        let board = Board::with_modifiers(5, |p| {
            (p == Position::new(0, 0)).then_some(Modifier::TRIPLE_LETTER)
        });
        // q on TL, i plain
        let score = ScrabbleScorer.score(&board, &row_cells(0, 0..2), &tiles("qi"));
        assert_eq!(score, 30 + 1);
    }

    #[test]
    fn word_premiums_compound() {
        let board = Board::with_modifiers(5, |p| {
            (p.row == 0 && (p.col == 0 || p.col == 4)).then_some(Modifier::DOUBLE_WORD)
        });
        let score = ScrabbleScorer.score(&board, &row_cells(0, 0..5), &tiles("zebra"));
        assert_eq!(score, (10 + 1 + 3 + 1 + 1) * 4);
    }

    #[test]
    fn premium_under_existing_tile_is_spent() {
        let mut board = Board::with_modifiers(5, |p| match (p.row, p.col) {
            (0, 0) => Some(Modifier::TRIPLE_WORD),
            (0, 1) => Some(Modifier::DOUBLE_LETTER),
            _ => None,
        });
        board.place(Position::new(0, 0), tiles("c")[0]).unwrap();
        board.place(Position::new(0, 1), tiles("a")[0]).unwrap();

        let score = ScrabbleScorer.score(&board, &row_cells(0, 0..3), &tiles("t"));
        assert_eq!(score, 3 + 1 + 1);
    }

    #[test]
    fn blank_scores_zero_even_on_premium() {
        let board = Board::with_modifiers(3, |p| {
            (p == Position::new(0, 1)).then_some(Modifier::TRIPLE_LETTER)
        });
        let score = ScrabbleScorer.score(&board, &row_cells(0, 0..2), &tiles("a*"));
        assert_eq!(score, 1);
    }
}
