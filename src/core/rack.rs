//! Player rack
//!
//! An ordered multiset of at most seven tiles.

use super::letter::{Letter, LetterError};
use super::turn::PotentialTurn;
use std::fmt;
use thiserror::Error;

/// Maximum number of tiles on a rack
pub const RACK_SIZE: usize = 7;

/// The tiles a player holds
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rack {
    letters: Vec<Letter>,
}

/// Error type for rack construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RackError {
    #[error("Rack holds at most {RACK_SIZE} tiles, got {0}")]
    TooManyTiles(usize),
    #[error("Rack is full")]
    Full,
    #[error(transparent)]
    Letter(#[from] LetterError),
}

impl Rack {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            letters: Vec::new(),
        }
    }

    /// Build a rack from explicit tiles
    ///
    /// # Errors
    /// Returns `RackError::TooManyTiles` if more than seven tiles are given.
    pub fn from_letters(letters: Vec<Letter>) -> Result<Self, RackError> {
        if letters.len() > RACK_SIZE {
            return Err(RackError::TooManyTiles(letters.len()));
        }
        Ok(Self { letters })
    }

    /// Build a rack of standard tiles from a string such as `"tinjm*"`
    ///
    /// # Errors
    /// Returns an error for invalid characters or more than seven tiles.
    ///
    /// # Examples
    /// ```
    /// use scrabble_solver::core::Rack;
    ///
    /// let rack = Rack::parse("Cat*").unwrap();
    /// assert_eq!(rack.len(), 4);
    /// assert_eq!(rack.to_string(), "cat*");
    /// assert!(Rack::parse("abcdefgh").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, RackError> {
        let letters = text
            .trim()
            .chars()
            .map(Letter::standard)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_letters(letters)
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.letters.len() >= RACK_SIZE
    }

    /// Add a drawn tile
    ///
    /// # Errors
    /// Returns `RackError::Full` when the rack already holds seven tiles.
    pub fn push(&mut self, letter: Letter) -> Result<(), RackError> {
        if self.is_full() {
            return Err(RackError::Full);
        }
        self.letters.push(letter);
        Ok(())
    }

    /// Remove the first tile showing `ch`
    pub fn remove(&mut self, ch: char) -> Option<Letter> {
        let ch = ch.to_ascii_lowercase();
        let index = self.letters.iter().position(|l| l.ch() == ch)?;
        Some(self.letters.remove(index))
    }

    /// Remove the tiles a turn places on the board
    ///
    /// Returns the tiles that were removed; tiles the rack does not hold are skipped.
    pub fn remove_played(&mut self, turn: &PotentialTurn) -> Vec<Letter> {
        turn.letters()
            .iter()
            .filter_map(|letter| self.remove(letter.ch()))
            .collect()
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
