//! Formatting utilities for terminal output

use crate::core::{Board, Modifier, Position, PotentialTurn, letter};
use rustc_hash::FxHashMap;

/// What a previewed square shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareKind {
    Empty,
    Premium(Modifier),
    /// A tile already on the board
    Tile,
    /// A tile the previewed turn would place
    Placed,
}

/// One square of a board preview
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    pub symbol: char,
    pub kind: SquareKind,
}

/// Text symbol for an uncovered premium square
#[must_use]
pub const fn modifier_symbol(modifier: Modifier) -> char {
    match (modifier.affects_whole_word(), modifier.multiplier()) {
        (false, 2) => ':',
        (false, _) => ';',
        (true, 2) => '-',
        (true, _) => '=',
    }
}

/// The board as rows of squares, with `turn` overlaid if given
///
/// Tiles are shown uppercase, and blanks as `*`.
#[must_use]
pub fn preview_squares(board: &Board, turn: Option<&PotentialTurn>) -> Vec<Vec<Square>> {
    let placed: FxHashMap<Position, char> = turn
        .map(|turn| {
            turn.placements()
                .iter()
                .copied()
                .zip(turn.letters().iter().map(|tile| tile.ch()))
                .collect()
        })
        .unwrap_or_default();

    board
        .rows()
        .iter()
        .map(|line| {
            line.cells()
                .map(|cell| {
                    if let Some(&ch) = placed.get(&cell.position()) {
                        return Square {
                            symbol: ch.to_ascii_uppercase(),
                            kind: SquareKind::Placed,
                        };
                    }
                    match (cell.letter(), cell.modifier()) {
                        (Some(tile), _) => Square {
                            symbol: tile.ch().to_ascii_uppercase(),
                            kind: SquareKind::Tile,
                        },
                        (None, Some(modifier)) => Square {
                            symbol: modifier_symbol(modifier),
                            kind: SquareKind::Premium(modifier),
                        },
                        (None, None) => Square {
                            symbol: '.',
                            kind: SquareKind::Empty,
                        },
                    }
                })
                .collect()
        })
        .collect()
}

/// One-line summary of a ranked turn
#[must_use]
pub fn turn_summary(rank: usize, turn: &PotentialTurn) -> String {
    format!(
        "{rank:>3}. {:<15} {:<6} {:<8} {:>4} pts  [{}]",
        turn.word().to_uppercase(),
        turn.orientation().to_string(),
        turn.start().to_string(),
        turn.score(),
        letter::render(turn.letters())
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Letter, Orientation};
    use crate::game::standard_board;

    fn cats_turn() -> PotentialTurn {
        PotentialTurn::new(
            "cats".into(),
            Orientation::Horizontal,
            (0..4).map(|c| Position::new(1, c)).collect(),
            vec![Position::new(1, 3)],
            vec![Letter::standard('s').unwrap()],
            6,
        )
    }

    #[test]
    fn preview_marks_placed_tiles() {
        let board = Board::from_rows(&["....", "cat.", "....", "...."]).unwrap();
        let squares = preview_squares(&board, Some(&cats_turn()));

        let row: String = squares[1].iter().map(|s| s.symbol).collect();
        assert_eq!(row, "CATS");
        assert_eq!(squares[1][0].kind, SquareKind::Tile);
        assert_eq!(squares[1][3].kind, SquareKind::Placed);
        assert_eq!(squares[0][0].kind, SquareKind::Empty);
    }

    #[test]
    fn preview_shows_premiums() {
        let squares = preview_squares(&standard_board(), None);
        assert_eq!(squares[0][0].symbol, '=');
        assert_eq!(squares[0][3].symbol, ':');
        assert_eq!(squares[1][5].symbol, ';');
        assert_eq!(squares[7][7].symbol, '-');
    }

    #[test]
    fn summary_contains_word_and_score() {
        let summary = turn_summary(1, &cats_turn());
        assert!(summary.starts_with("  1. CATS"));
        assert!(summary.contains("across"));
        assert!(summary.contains("6 pts"));
        assert!(summary.ends_with("[s]"));
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
        assert_eq!(create_progress_bar(1.0, 0.0, 3), "░░░");
    }
}
