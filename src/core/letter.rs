//! Tile representation
//!
//! A Letter is a single tile: a lowercase character plus its point value.
//! The blank tile is the wildcard `*`, worth nothing, which the dictionary
//! matches against any letter.

use std::fmt;
use thiserror::Error;

/// Character used for the blank tile
pub const WILDCARD: char = '*';

/// Standard English point values for `a`..=`z`
const POINTS: [u32; 26] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, 1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10,
];

/// A tile with a character and a point value
///
/// Immutable once created. Two letters are equal when both character and
/// value match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Letter {
    ch: char,
    value: u32,
}

/// Error type for invalid tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LetterError {
    #[error("Tile must be a letter a-z or '{WILDCARD}', got {0:?}")]
    InvalidCharacter(char),
}

impl Letter {
    /// The blank tile
    pub const BLANK: Self = Self {
        ch: WILDCARD,
        value: 0,
    };

    /// Create a tile with an explicit point value
    ///
    /// The character is lowercased. A wildcard is always worth 0.
    ///
    /// # Errors
    /// Returns `LetterError::InvalidCharacter` for anything other than an
    /// ASCII letter or the wildcard.
    pub fn new(ch: char, value: u32) -> Result<Self, LetterError> {
        let ch = ch.to_ascii_lowercase();
        if ch == WILDCARD {
            return Ok(Self::BLANK);
        }
        if !ch.is_ascii_lowercase() {
            return Err(LetterError::InvalidCharacter(ch));
        }
        Ok(Self { ch, value })
    }

    /// Create a tile with its standard point value
    ///
    /// # Errors
    /// Returns `LetterError::InvalidCharacter` for anything other than an
    /// ASCII letter or the wildcard.
    ///
    /// # Examples
    /// ```
    /// use scrabble_solver::core::Letter;
    ///
    /// assert_eq!(Letter::standard('q').unwrap().value(), 10);
    /// assert_eq!(Letter::standard('*').unwrap().value(), 0);
    /// assert!(Letter::standard('3').is_err());
    /// ```
    pub fn standard(ch: char) -> Result<Self, LetterError> {
        let ch = ch.to_ascii_lowercase();
        if ch == WILDCARD {
            return Ok(Self::BLANK);
        }
        if !ch.is_ascii_lowercase() {
            return Err(LetterError::InvalidCharacter(ch));
        }
        let value = POINTS[(ch as u8 - b'a') as usize];
        Ok(Self { ch, value })
    }

    #[inline]
    #[must_use]
    pub const fn ch(self) -> char {
        self.ch
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.value
    }

    #[inline]
    #[must_use]
    pub const fn is_wildcard(self) -> bool {
        self.ch == WILDCARD
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ch)
    }
}

/// Render a sequence of tiles as a string
#[must_use]
pub fn render(letters: &[Letter]) -> String {
    letters.iter().map(|l| l.ch).collect()
}
