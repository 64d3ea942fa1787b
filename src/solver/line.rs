//! Per-line turn search
//!
//! One row or column is searched independently of every other line. Anchors
//! are visited left to right; for each anchor and placement length the
//! windows that could hold a word through the anchor are enumerated, and
//! every cached permutation of that length is tried in each window.
//!
//! Two caches are local to a line:
//! - `covered[length][cell]` skips a window whose cells were all part of an
//!   earlier window of the same length.
//! - `rejected[cell]` holds letters whose perpendicular word was already
//!   found invalid at that cell.

use super::permutations::PermutationCache;
use super::progress::Progress;
use super::scoring::Scorer;
use crate::core::{Board, Letter, Line, Position, PotentialTurn};
use crate::dictionary::Lexicon;
use rustc_hash::FxHashSet;

/// Everything a line task reads, shared by all lines of one search
pub(crate) struct LineContext<'a, L: Lexicon, S: Scorer> {
    pub board: &'a Board,
    pub lexicon: &'a L,
    pub scorer: &'a S,
    pub permutations: &'a PermutationCache,
    pub progress: &'a Progress,
    pub min_word_len: usize,
}

/// Where a word along the line may be anchored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Anchor {
    /// A filled cell with at least one empty neighbour along the line
    Tile(usize),
    /// An empty cell that a placement must cover: it touches a perpendicular
    /// word, or it is the centre of an empty board
    Open(usize),
}

/// Contiguous span `start..=end` holding exactly `slots.len()` empty cells
#[derive(Debug, Clone, PartialEq, Eq)]
struct Window {
    start: usize,
    end: usize,
    slots: Vec<usize>,
}

/// Letters already fixed around an empty cell on the crossing line
#[derive(Debug, Clone, PartialEq, Eq)]
struct CrossWord {
    prefix: String,
    suffix: String,
}

impl CrossWord {
    fn with(&self, ch: char) -> String {
        let mut word = String::with_capacity(self.prefix.len() + 1 + self.suffix.len());
        word.push_str(&self.prefix);
        word.push(ch);
        word.push_str(&self.suffix);
        word
    }
}

struct LineState {
    covered: Vec<Vec<bool>>,
    rejected: Vec<FxHashSet<char>>,
}

impl LineState {
    fn new(len: usize, max_length: usize) -> Self {
        Self {
            covered: vec![vec![false; len]; max_length + 1],
            rejected: vec![FxHashSet::default(); len],
        }
    }

    /// Mark the window's cells for `length`; false if they were all marked already
    fn claim(&mut self, length: usize, window: &Window) -> bool {
        let covered = &mut self.covered[length][window.start..=window.end];
        let fresh = covered.iter().any(|&done| !done);
        covered.fill(true);
        fresh
    }
}

impl<L: Lexicon, S: Scorer> LineContext<'_, L, S> {
    /// All valid turns whose primary word lies along `line`
    pub fn search(&self, line: Line<'_>) -> Vec<PotentialTurn> {
        let len = line.len();
        let opening = self.board.is_empty();
        let max_length = self.permutations.max_length().min(line.empty_cells());
        let crosses: Vec<Option<CrossWord>> = (0..len).map(|i| cross_word(line, i)).collect();

        let mut state = LineState::new(len, max_length);
        let mut turns = Vec::new();

        for index in 0..len {
            self.progress.add_cells(1);
            let Some(anchor) = self.classify(line, &crosses, index, opening) else {
                continue;
            };
            for length in 1..=max_length {
                for window in windows(line, anchor, length) {
                    if state.claim(length, &window) {
                        self.try_window(line, &crosses, &window, &mut state.rejected, &mut turns);
                    }
                }
            }
        }

        if !turns.is_empty() {
            log::debug!(
                "{} {} yielded {} turns",
                line.orientation(),
                line.index(),
                turns.len()
            );
        }
        turns
    }

    fn classify(
        &self,
        line: Line<'_>,
        crosses: &[Option<CrossWord>],
        i: usize,
        opening: bool,
    ) -> Option<Anchor> {
        if line.is_filled(i) {
            let open_before = i > 0 && !line.is_filled(i - 1);
            let open_after = i + 1 < line.len() && !line.is_filled(i + 1);
            return (open_before || open_after).then_some(Anchor::Tile(i));
        }
        let touches_cross = crosses[i].is_some();
        let opening_square = opening && line.position(i) == self.board.center();
        (touches_cross || opening_square).then_some(Anchor::Open(i))
    }

    fn lookup(&self, word: &str) -> bool {
        self.progress.add_word();
        self.lexicon.contains(word)
    }

    fn try_window(
        &self,
        line: Line<'_>,
        crosses: &[Option<CrossWord>],
        window: &Window,
        rejected: &mut [FxHashSet<char>],
        turns: &mut Vec<PotentialTurn>,
    ) {
        let (Some(&first), Some(&last)) = (window.slots.first(), window.slots.last()) else {
            return;
        };
        let mut lo = first;
        while lo > 0 && line.is_filled(lo - 1) {
            lo -= 1;
        }
        let mut hi = last;
        while hi + 1 < line.len() && line.is_filled(hi + 1) {
            hi += 1;
        }
        if hi - lo + 1 < self.min_word_len {
            return;
        }

        let template: Vec<Option<char>> = (lo..=hi).map(|i| line.letter(i).map(Letter::ch)).collect();
        let cells: Vec<Position> = (lo..=hi).map(|i| line.position(i)).collect();
        let placements: Vec<Position> = window.slots.iter().map(|&i| line.position(i)).collect();
        let mut word = String::with_capacity(template.len());

        'sequence: for sequence in self.permutations.get(window.slots.len()) {
            let known_bad = window
                .slots
                .iter()
                .zip(sequence)
                .any(|(&slot, tile)| rejected[slot].contains(&tile.ch()));
            if known_bad {
                continue;
            }

            word.clear();
            let mut tiles = sequence.iter();
            for fixed in &template {
                match fixed {
                    Some(ch) => word.push(*ch),
                    None => {
                        if let Some(tile) = tiles.next() {
                            word.push(tile.ch());
                        }
                    }
                }
            }
            if !self.lookup(&word) {
                continue;
            }

            for (&slot, tile) in window.slots.iter().zip(sequence) {
                let Some(cross) = &crosses[slot] else {
                    continue;
                };
                if !self.lookup(&cross.with(tile.ch())) {
                    log::trace!("rejecting {} at {}", tile.ch(), line.position(slot));
                    rejected[slot].insert(tile.ch());
                    continue 'sequence;
                }
            }

            let score = self.scorer.score(self.board, &cells, sequence);
            turns.push(PotentialTurn::new(
                word.clone(),
                line.orientation(),
                cells.clone(),
                placements.clone(),
                sequence.clone(),
                score,
            ));
        }
    }
}

/// Fixed letters directly before and after `i` on the crossing line
///
/// `None` for filled cells and for cells with no perpendicular neighbour.
fn cross_word(line: Line<'_>, i: usize) -> Option<CrossWord> {
    if line.is_filled(i) {
        return None;
    }
    let crossing = line.crossing(i);
    let at = line.index();
    let before = at > 0 && crossing.is_filled(at - 1);
    let after = at + 1 < crossing.len() && crossing.is_filled(at + 1);
    if !before && !after {
        return None;
    }

    let mut start = at;
    while start > 0 && crossing.is_filled(start - 1) {
        start -= 1;
    }
    let mut end = at;
    while end + 1 < crossing.len() && crossing.is_filled(end + 1) {
        end += 1;
    }

    let collect = |range: std::ops::Range<usize>| -> String {
        range
            .filter_map(|k| crossing.letter(k).map(Letter::ch))
            .collect()
    };
    Some(CrossWord {
        prefix: collect(start..at),
        suffix: collect(at + 1..end + 1),
    })
}

/// Step back from `from` over at most `budget` empty cells
fn walk_back(line: Line<'_>, from: usize, budget: usize) -> usize {
    let mut start = from;
    let mut seen = 0;
    while start > 0 && seen < budget && !line.is_filled(start - 1) {
        start -= 1;
        seen += 1;
    }
    start
}

/// The window starting at `start` that contains exactly `length` empty cells
fn window_from(line: Line<'_>, start: usize, length: usize) -> Option<Window> {
    let mut slots = Vec::with_capacity(length);
    for i in start..line.len() {
        if !line.is_filled(i) {
            slots.push(i);
            if slots.len() == length {
                return Some(Window { start, end: i, slots });
            }
        }
    }
    None
}

/// Windows of `length` empty cells that reach the anchor
fn windows(line: Line<'_>, anchor: Anchor, length: usize) -> Vec<Window> {
    let (earliest, last) = match anchor {
        Anchor::Tile(a) => (walk_back(line, a, length), a + 1),
        Anchor::Open(v) => (walk_back(line, v, length - 1), v),
    };
    let last = last.min(line.len().saturating_sub(1));

    let mut found = Vec::new();
    for start in earliest..=last {
        match window_from(line, start, length) {
            Some(window) => found.push(window),
            None => break,
        }
    }
    found
}
