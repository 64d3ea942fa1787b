//! Board files
//!
//! Two formats are read:
//! - CSV, one record per row. An empty field is an empty cell; otherwise the
//!   first character of the field is the tile. Records may be shorter than
//!   the board.
//! - A plain text grid in the format accepted by [`Board::fill_from_rows`].
//!
//! Tiles are placed onto a base board, normally the standard layout, so the
//! premium squares under them are known.

use crate::core::{Board, BoardError, Letter, Position};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Load a board file onto `base`, choosing the format by extension
///
/// `.csv` files are read as CSV, anything else as a text grid.
///
/// # Errors
/// Returns `BoardError::Read` if the file cannot be opened or parsed, or the
/// placement error for a bad tile.
pub fn load_board<P: AsRef<Path>>(path: P, base: Board) -> Result<Board, BoardError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| BoardError::Read(format!("{}: {e}", path.display())))?;

    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    let board = if is_csv {
        read_csv(file, base)?
    } else {
        read_grid(BufReader::new(file), base)?
    };
    log::info!(
        "Loaded board from {} ({} tiles)",
        path.display(),
        board.size() * board.size() - board.empty_cells()
    );
    Ok(board)
}

/// Place the tiles of a CSV board onto `base`
///
/// # Errors
/// Returns `BoardError::Read` for malformed CSV, `BoardError::OutOfBounds`
/// for a record or field past the board edge, and the usual placement errors.
pub fn read_csv<R: Read>(reader: R, mut base: Board) -> Result<Board, BoardError> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    for (row, record) in csv.records().enumerate() {
        let record = record.map_err(|e| BoardError::Read(e.to_string()))?;
        for (col, field) in record.iter().enumerate() {
            let Some(ch) = field.trim().chars().next() else {
                continue;
            };
            let position = Position::new(row, col);
            let letter =
                Letter::standard(ch).map_err(|source| BoardError::Tile { position, source })?;
            base.place(position, letter)?;
        }
    }
    Ok(base)
}

/// Place the tiles of a text grid onto `base`
///
/// Blank lines are ignored.
///
/// # Errors
/// Returns `BoardError::Read` on I/O failure and the errors of
/// [`Board::fill_from_rows`] for a malformed grid.
pub fn read_grid<R: BufRead>(reader: R, mut base: Board) -> Result<Board, BoardError> {
    let mut rows = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| BoardError::Read(e.to_string()))?;
        let line = line.trim_end();
        if !line.is_empty() {
            rows.push(line.to_string());
        }
    }
    base.fill_from_rows(&rows)?;
    Ok(base)
}
