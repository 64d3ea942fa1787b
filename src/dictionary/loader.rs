//! Word list loading utilities
//!
//! Reads newline-delimited word lists into a [`Dictionary`].

use super::Dictionary;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Load a dictionary from a file
///
/// Lines that are not plain `a`-`z` words are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use scrabble_solver::dictionary::loader::load_from_file;
///
/// let dictionary = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let file = File::open(path.as_ref())?;
    let dictionary = load_from_reader(BufReader::new(file))?;
    log::info!(
        "Loaded {} words from {}",
        dictionary.len(),
        path.as_ref().display()
    );
    Ok(dictionary)
}

/// Load a dictionary from any buffered reader
///
/// # Errors
///
/// Returns an I/O error if reading fails.
pub fn load_from_reader<R: BufRead>(reader: R) -> io::Result<Dictionary> {
    let mut dictionary = Dictionary::new();
    let mut skipped = 0usize;

    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !dictionary.insert(trimmed) {
            skipped += 1;
        }
    }

    if skipped > 0 {
        log::debug!("Skipped {skipped} invalid or duplicate word list lines");
    }
    Ok(dictionary)
}
