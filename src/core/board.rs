//! Board model
//!
//! The board owns one flat arena of cells in row-major order. Rows and
//! columns are [`Line`] views that index into that arena, so a letter placed
//! through any position is visible from both orientations.

use super::letter::{Letter, LetterError};
use super::turn::PotentialTurn;
use std::fmt;
use thiserror::Error;

/// A (row, column) coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Premium square
///
/// A word modifier multiplies the whole word, a letter modifier only the tile
/// on its own cell. Either applies only on the turn its cell is first filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Modifier {
    affects_whole_word: bool,
    multiplier: u32,
}

impl Modifier {
    pub const DOUBLE_LETTER: Self = Self::new(false, 2);
    pub const TRIPLE_LETTER: Self = Self::new(false, 3);
    pub const DOUBLE_WORD: Self = Self::new(true, 2);
    pub const TRIPLE_WORD: Self = Self::new(true, 3);

    const fn new(affects_whole_word: bool, multiplier: u32) -> Self {
        Self {
            affects_whole_word,
            multiplier,
        }
    }

    #[inline]
    #[must_use]
    pub const fn affects_whole_word(self) -> bool {
        self.affects_whole_word
    }

    #[inline]
    #[must_use]
    pub const fn multiplier(self) -> u32 {
        self.multiplier
    }
}

/// A single square of the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    position: Position,
    letter: Option<Letter>,
    modifier: Option<Modifier>,
}

impl Cell {
    #[inline]
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    #[inline]
    #[must_use]
    pub const fn letter(&self) -> Option<Letter> {
        self.letter
    }

    #[inline]
    #[must_use]
    pub const fn modifier(&self) -> Option<Modifier> {
        self.modifier
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.letter.is_none()
    }
}

/// Which way a line runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Orientation {
    /// Rows are the primary lines
    Horizontal,
    /// Columns are the primary lines
    Vertical,
}

impl Orientation {
    #[must_use]
    pub const fn perpendicular(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "across"),
            Self::Vertical => write!(f, "down"),
        }
    }
}

/// Error type for board construction and mutation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("Position {position} is outside a {size}x{size} board")]
    OutOfBounds { position: Position, size: usize },
    #[error("Cell {0} already holds a tile")]
    Occupied(Position),
    #[error("Board must be {expected}x{expected}, row {row} has {found} cells")]
    Dimensions {
        expected: usize,
        row: usize,
        found: usize,
    },
    #[error("Board has {found} rows, expected {expected}")]
    RowCount { expected: usize, found: usize },
    #[error("Invalid tile at {position}: {source}")]
    Tile {
        position: Position,
        source: LetterError,
    },
    #[error("Failed to read board: {0}")]
    Read(String),
}

/// A square grid of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board with no premium squares
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self::with_modifiers(size, |_| None)
    }

    /// Create an empty board, asking `modifier_at` for each cell's premium
    ///
    /// Modifiers are fixed here and never change afterwards.
    pub fn with_modifiers<F>(size: usize, mut modifier_at: F) -> Self
    where
        F: FnMut(Position) -> Option<Modifier>,
    {
        let mut cells = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                let position = Position::new(row, col);
                cells.push(Cell {
                    position,
                    letter: None,
                    modifier: modifier_at(position),
                });
            }
        }
        Self { size, cells }
    }

    /// Create a modifier-free board from text rows
    ///
    /// `.` or a space is an empty cell, `a`-`z` a standard tile and `*` a blank.
    ///
    /// # Errors
    /// Returns an error if the rows do not form a square or contain invalid tiles.
    ///
    /// # Examples
    /// ```
    /// use scrabble_solver::core::{Board, Position};
    ///
    /// let board = Board::from_rows(&["...", ".ab", "..."]).unwrap();
    /// assert_eq!(board.size(), 3);
    /// let cell = board.cell(Position::new(1, 2)).unwrap();
    /// assert_eq!(cell.letter().unwrap().ch(), 'b');
    /// ```
    pub fn from_rows<R: AsRef<str>>(rows: &[R]) -> Result<Self, BoardError> {
        let mut board = Self::new(rows.len());
        board.fill_from_rows(rows)?;
        Ok(board)
    }

    /// Place the tiles described by text rows onto this board
    ///
    /// # Errors
    /// Returns an error if the row count or a row's length differs from the
    /// board size, a tile is invalid, or a tile lands on an occupied cell.
    pub fn fill_from_rows<R: AsRef<str>>(&mut self, rows: &[R]) -> Result<(), BoardError> {
        if rows.len() != self.size {
            return Err(BoardError::RowCount {
                expected: self.size,
                found: rows.len(),
            });
        }
        for (row, text) in rows.iter().enumerate() {
            let chars: Vec<char> = text.as_ref().chars().collect();
            if chars.len() != self.size {
                return Err(BoardError::Dimensions {
                    expected: self.size,
                    row,
                    found: chars.len(),
                });
            }
            for (col, ch) in chars.into_iter().enumerate() {
                if ch == '.' || ch == ' ' {
                    continue;
                }
                let position = Position::new(row, col);
                let letter = Letter::standard(ch)
                    .map_err(|source| BoardError::Tile { position, source })?;
                self.place(position, letter)?;
            }
        }
        Ok(())
    }

    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// The centre square, used as the anchor of an opening move
    #[inline]
    #[must_use]
    pub const fn center(&self) -> Position {
        Position::new(self.size / 2, self.size / 2)
    }

    #[must_use]
    pub fn cell(&self, position: Position) -> Option<&Cell> {
        self.index_of(position).map(|index| &self.cells[index])
    }

    /// True when no tile has been placed yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }

    /// Letters already placed, row by row
    pub fn tiles(&self) -> impl Iterator<Item = Letter> + '_ {
        self.cells.iter().filter_map(Cell::letter)
    }

    #[must_use]
    pub fn empty_cells(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    /// Put a tile on an empty cell
    ///
    /// # Errors
    /// Returns `BoardError::OutOfBounds` or `BoardError::Occupied`; a cell's
    /// letter is set at most once.
    pub fn place(&mut self, position: Position, letter: Letter) -> Result<(), BoardError> {
        let index = self.index_of(position).ok_or(BoardError::OutOfBounds {
            position,
            size: self.size,
        })?;
        let cell = &mut self.cells[index];
        if cell.letter.is_some() {
            return Err(BoardError::Occupied(position));
        }
        cell.letter = Some(letter);
        Ok(())
    }

    /// Place every new tile of a turn
    ///
    /// Nothing is placed unless every target cell is free.
    ///
    /// # Errors
    /// Returns `BoardError::OutOfBounds` or `BoardError::Occupied`.
    pub fn apply(&mut self, turn: &PotentialTurn) -> Result<(), BoardError> {
        for &position in turn.placements() {
            let cell = self.cell(position).ok_or(BoardError::OutOfBounds {
                position,
                size: self.size,
            })?;
            if !cell.is_empty() {
                return Err(BoardError::Occupied(position));
            }
        }
        for (&position, &letter) in turn.placements().iter().zip(turn.letters()) {
            self.place(position, letter)?;
        }
        Ok(())
    }

    /// One line of the board in the given orientation
    ///
    /// # Panics
    /// Panics if `index` is not below the board size.
    #[must_use]
    pub fn line(&self, orientation: Orientation, index: usize) -> Line<'_> {
        assert!(index < self.size, "line index {index} out of range");
        Line {
            board: self,
            orientation,
            index,
        }
    }

    /// All lines in the given orientation
    #[must_use]
    pub fn lines(&self, orientation: Orientation) -> Vec<Line<'_>> {
        (0..self.size)
            .map(|index| self.line(orientation, index))
            .collect()
    }

    #[must_use]
    pub fn rows(&self) -> Vec<Line<'_>> {
        self.lines(Orientation::Horizontal)
    }

    /// Columns as a transposed view over the same cells
    #[must_use]
    pub fn columns(&self) -> Vec<Line<'_>> {
        self.lines(Orientation::Vertical)
    }

    #[inline]
    const fn index_of(&self, position: Position) -> Option<usize> {
        if position.row < self.size && position.col < self.size {
            Some(position.row * self.size + position.col)
        } else {
            None
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let text: Vec<String> = row
                .cells()
                .map(|cell| cell.letter().map_or('.', Letter::ch).to_string())
                .collect();
            writeln!(f, "{}", text.join(" "))?;
        }
        Ok(())
    }
}

/// A row or column view into a board
#[derive(Debug, Clone, Copy)]
pub struct Line<'a> {
    board: &'a Board,
    orientation: Orientation,
    index: usize,
}

impl<'a> Line<'a> {
    #[inline]
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.board.size
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.board.size == 0
    }

    /// Board position of the `i`-th cell along this line
    #[inline]
    #[must_use]
    pub const fn position(&self, i: usize) -> Position {
        match self.orientation {
            Orientation::Horizontal => Position::new(self.index, i),
            Orientation::Vertical => Position::new(i, self.index),
        }
    }

    /// # Panics
    /// Panics if `i` is not below the line length.
    #[inline]
    #[must_use]
    pub fn cell(&self, i: usize) -> &'a Cell {
        let position = self.position(i);
        &self.board.cells[position.row * self.board.size + position.col]
    }

    #[inline]
    #[must_use]
    pub fn letter(&self, i: usize) -> Option<Letter> {
        self.cell(i).letter()
    }

    #[inline]
    #[must_use]
    pub fn is_filled(&self, i: usize) -> bool {
        self.cell(i).letter().is_some()
    }

    pub fn cells(&self) -> impl Iterator<Item = &'a Cell> + '_ {
        (0..self.len()).map(|i| self.cell(i))
    }

    #[must_use]
    pub fn has_tiles(&self) -> bool {
        self.cells().any(|cell| !cell.is_empty())
    }

    #[must_use]
    pub fn empty_cells(&self) -> usize {
        self.cells().filter(|cell| cell.is_empty()).count()
    }

    /// The line crossing this one at `i`
    #[must_use]
    pub fn crossing(&self, i: usize) -> Self {
        self.board.line(self.orientation.perpendicular(), i)
    }
}

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in self.cells() {
            write!(f, "{}", cell.letter().map_or('.', Letter::ch))?;
        }
        Ok(())
    }
}
