//! Letter bag
//!
//! Tiles are drawn uniformly at random without replacement.

use super::tiles::standard_tiles;
use crate::core::{Letter, Rack};
use rand::Rng;

/// The pool of undrawn tiles
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterBag {
    tiles: Vec<Letter>,
}

impl LetterBag {
    /// A full standard bag of 100 tiles
    #[must_use]
    pub fn standard() -> Self {
        Self {
            tiles: standard_tiles(),
        }
    }

    #[must_use]
    pub const fn from_letters(tiles: Vec<Letter>) -> Self {
        Self { tiles }
    }

    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Take one random tile, `None` once the bag is empty
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Letter> {
        if self.tiles.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.tiles.len());
        Some(self.tiles.swap_remove(index))
    }

    /// Top `rack` up to seven tiles, returning how many were drawn
    pub fn fill_rack<R: Rng + ?Sized>(&mut self, rack: &mut Rack, rng: &mut R) -> usize {
        let mut drawn = 0;
        while !rack.is_full() {
            let Some(tile) = self.draw(rng) else {
                break;
            };
            if rack.push(tile).is_err() {
                self.tiles.push(tile);
                break;
            }
            drawn += 1;
        }
        drawn
    }

    /// Take tiles out that are already in play, as for a loaded board
    ///
    /// Tiles match by letter; those not in the bag are ignored. Returns how
    /// many were removed.
    pub fn remove_tiles<I: IntoIterator<Item = Letter>>(&mut self, tiles: I) -> usize {
        let mut removed = 0;
        for tile in tiles {
            if let Some(index) = self.tiles.iter().position(|t| t.ch() == tile.ch()) {
                self.tiles.swap_remove(index);
                removed += 1;
            }
        }
        removed
    }

    /// Put tiles back, as when exchanging
    pub fn return_tiles<I: IntoIterator<Item = Letter>>(&mut self, tiles: I) {
        self.tiles.extend(tiles);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, RACK_SIZE};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn fill_rack_draws_seven() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut bag = LetterBag::standard();
        let mut rack = Rack::new();

        assert_eq!(bag.fill_rack(&mut rack, &mut rng), RACK_SIZE);
        assert!(rack.is_full());
        assert_eq!(bag.remaining(), 100 - RACK_SIZE);
        assert_eq!(bag.fill_rack(&mut rack, &mut rng), 0);
    }

    #[test]
    fn same_seed_same_draws() {
        let draw_all = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut bag = LetterBag::standard();
            std::iter::from_fn(|| bag.draw(&mut rng))
                .map(|t| t.ch())
                .collect::<String>()
        };
        assert_eq!(draw_all(42), draw_all(42));
        assert_eq!(draw_all(42).len(), 100);
    }

    #[test]
    fn draining_bag_leaves_short_rack() {
        let mut rng = StdRng::seed_from_u64(1);
        let tiles = Rack::parse("abc").unwrap().letters().to_vec();
        let mut bag = LetterBag::from_letters(tiles);
        let mut rack = Rack::new();

        assert_eq!(bag.fill_rack(&mut rack, &mut rng), 3);
        assert!(bag.is_empty());
        assert!(bag.draw(&mut rng).is_none());
    }

    #[test]
    fn returned_tiles_can_be_drawn_again() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut bag = LetterBag::default();
        bag.return_tiles(Rack::parse("z").unwrap().letters().iter().copied());
        assert_eq!(bag.draw(&mut rng).map(Letter::ch), Some('z'));
    }

    #[test]
    fn tiles_on_the_board_leave_the_bag() {
        let board = Board::from_rows(&["qat..", "....z", "....z", ".....", "....."]).unwrap();
        let mut bag = LetterBag::standard();

        // one z in the standard set, so the second is ignored
        assert_eq!(bag.remove_tiles(board.tiles()), 4);
        assert_eq!(bag.remaining(), 96);

        let mut rng = StdRng::seed_from_u64(3);
        let mut drawn = Vec::new();
        while let Some(tile) = bag.draw(&mut rng) {
            drawn.push(tile.ch());
        }
        assert!(!drawn.contains(&'q'));
        assert!(!drawn.contains(&'z'));
    }
}
