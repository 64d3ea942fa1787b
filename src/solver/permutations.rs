//! Rack permutation generation
//!
//! Every ordered selection of tiles from a rack, deduplicated by spelling.

use crate::core::{Letter, Rack, letter};
use rustc_hash::FxHashSet;

/// All distinct tile sequences of exactly `length` drawn from `rack`
///
/// Each tile is used at most once per sequence. Blanks are ordinary tiles
/// here and stay as `*`. Sequences that spell the same string are kept only
/// once, first occurrence wins.
///
/// # Examples
/// ```
/// use scrabble_solver::core::Rack;
/// use scrabble_solver::solver::permutations;
///
/// let rack = Rack::parse("aab").unwrap();
/// let perms = permutations(&rack, 2);
/// // aa, ab, ba
/// assert_eq!(perms.len(), 3);
/// ```
#[must_use]
pub fn permutations(rack: &Rack, length: usize) -> Vec<Vec<Letter>> {
    if length == 0 || length > rack.len() {
        return Vec::new();
    }

    let mut seen = FxHashSet::default();
    permute(rack.letters(), length)
        .into_iter()
        .filter(|sequence| seen.insert(letter::render(sequence)))
        .collect()
}

/// Remove each tile in turn and prepend it to the permutations of the rest
fn permute(tiles: &[Letter], length: usize) -> Vec<Vec<Letter>> {
    if length == 1 {
        return tiles.iter().map(|&tile| vec![tile]).collect();
    }

    let mut results = Vec::new();
    for (i, &tile) in tiles.iter().enumerate() {
        let mut remaining = tiles.to_vec();
        remaining.remove(i);

        for mut tail in permute(&remaining, length - 1) {
            tail.insert(0, tile);
            results.push(tail);
        }
    }
    results
}

/// Permutations for every placement length, computed once per search
#[derive(Debug, Clone, Default)]
pub struct PermutationCache {
    by_length: Vec<Vec<Vec<Letter>>>,
}

impl PermutationCache {
    /// Precompute lengths `1..=max_length`
    ///
    /// `max_length` is clamped to the rack size.
    #[must_use]
    pub fn build(rack: &Rack, max_length: usize) -> Self {
        let max_length = max_length.min(rack.len());
        let mut by_length = Vec::with_capacity(max_length + 1);
        by_length.push(Vec::new());
        for length in 1..=max_length {
            by_length.push(permutations(rack, length));
        }
        Self { by_length }
    }

    /// Longest length with cached sequences
    #[inline]
    #[must_use]
    pub fn max_length(&self) -> usize {
        self.by_length.len().saturating_sub(1)
    }

    /// Cached sequences for `length`, empty if out of range
    #[must_use]
    pub fn get(&self, length: usize) -> &[Vec<Letter>] {
        self.by_length.get(length).map_or(&[], Vec::as_slice)
    }

    /// Total number of cached sequences across all lengths
    #[must_use]
    pub fn total(&self) -> usize {
        self.by_length.iter().map(Vec::len).sum()
    }
}
