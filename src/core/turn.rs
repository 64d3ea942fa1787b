//! Candidate moves
//!
//! A `PotentialTurn` is an immutable result: built once, scored once.

use super::board::{Orientation, Position};
use super::letter::{self, Letter};
use std::cmp::Ordering;
use std::fmt;

/// A scored candidate placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PotentialTurn {
    word: String,
    orientation: Orientation,
    cells: Vec<Position>,
    placements: Vec<Position>,
    letters: Vec<Letter>,
    score: u32,
}

impl PotentialTurn {
    /// # Panics
    /// Panics in debug mode if `placements` and `letters` differ in length.
    #[must_use]
    pub fn new(
        word: String,
        orientation: Orientation,
        cells: Vec<Position>,
        placements: Vec<Position>,
        letters: Vec<Letter>,
        score: u32,
    ) -> Self {
        debug_assert_eq!(placements.len(), letters.len());
        Self {
            word,
            orientation,
            cells,
            placements,
            letters,
            score,
        }
    }

    /// The complete word, wildcards shown as `*`
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Every cell the word covers, including tiles already on the board
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    /// Cells receiving a new tile, in placement order
    #[inline]
    #[must_use]
    pub fn placements(&self) -> &[Position] {
        &self.placements
    }

    /// New tiles, in placement order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    #[must_use]
    pub fn start(&self) -> Position {
        self.cells.first().copied().unwrap_or(Position::new(0, 0))
    }

    /// Ranking order: higher score first, then word, orientation and start cell
    #[must_use]
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| self.word.cmp(&other.word))
            .then_with(|| self.orientation.cmp(&other.orientation))
            .then_with(|| self.start().cmp(&other.start()))
            .then_with(|| self.placements.cmp(&other.placements))
    }
}

impl fmt::Display for PotentialTurn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} at {} using {} for {} points",
            self.word,
            self.orientation,
            self.start(),
            letter::render(&self.letters),
            self.score
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(word: &str, score: u32, col: usize) -> PotentialTurn {
        let cells: Vec<Position> = (0..word.len()).map(|i| Position::new(0, col + i)).collect();
        let placements = vec![cells[0]];
        let letters = vec![Letter::standard(word.chars().next().unwrap()).unwrap()];
        PotentialTurn::new(
            word.to_string(),
            Orientation::Horizontal,
            cells,
            placements,
            letters,
            score,
        )
    }

    #[test]
    fn higher_score_ranks_first() {
        let low = turn("at", 2, 0);
        let high = turn("zap", 14, 0);
        assert_eq!(high.rank_cmp(&low), Ordering::Less);
    }

    #[test]
    fn ties_break_by_word_then_start() {
        let a = turn("bat", 5, 3);
        let b = turn("cat", 5, 0);
        assert_eq!(a.rank_cmp(&b), Ordering::Less);

        let left = turn("cat", 5, 1);
        let right = turn("cat", 5, 4);
        assert_eq!(left.rank_cmp(&right), Ordering::Less);
        assert_eq!(left.rank_cmp(&left.clone()), Ordering::Equal);
    }

    #[test]
    fn display_summarizes() {
        let t = turn("cats", 6, 7);
        assert_eq!(t.to_string(), "cats across at (0, 7) using c for 6 points");
    }
}
