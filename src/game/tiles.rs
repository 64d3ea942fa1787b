//! Standard English tile set

use crate::core::{Letter, WILDCARD};

/// Tile counts in a standard 100-tile set, blanks first
pub const DISTRIBUTION: [(char, usize); 27] = [
    (WILDCARD, 2),
    ('a', 9),
    ('b', 2),
    ('c', 2),
    ('d', 4),
    ('e', 12),
    ('f', 2),
    ('g', 3),
    ('h', 2),
    ('i', 9),
    ('j', 1),
    ('k', 1),
    ('l', 4),
    ('m', 2),
    ('n', 6),
    ('o', 8),
    ('p', 2),
    ('q', 1),
    ('r', 6),
    ('s', 4),
    ('t', 6),
    ('u', 4),
    ('v', 2),
    ('w', 2),
    ('x', 1),
    ('y', 2),
    ('z', 1),
];

/// Every tile of the standard set, with standard point values
#[must_use]
pub fn standard_tiles() -> Vec<Letter> {
    DISTRIBUTION
        .iter()
        .filter_map(|&(ch, count)| Letter::standard(ch).ok().map(|tile| (tile, count)))
        .flat_map(|(tile, count)| std::iter::repeat_n(tile, count))
        .collect()
}
