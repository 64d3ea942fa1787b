//! Simple interactive CLI mode
//!
//! Prints the ranked turns, then previews the board for any turn the user
//! picks by number. `e` exits.

use crate::core::{Board, PotentialTurn};
use crate::output::{write_board, write_turns};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the preview loop on stdin and stdout
///
/// # Errors
/// Returns an error if reading input or writing output fails.
pub fn run_simple(board: &Board, turns: &[PotentialTurn], top: usize) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(board, turns, top, &mut stdin.lock(), &mut stdout.lock())
}

/// Run the preview loop over arbitrary streams
///
/// Ends on `e` or end of input.
///
/// # Errors
/// Returns an error if reading input or writing output fails.
pub fn run_session<R: BufRead, W: Write>(
    board: &Board,
    turns: &[PotentialTurn],
    top: usize,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    let shown = &turns[..turns.len().min(top)];
    write_turns(out, turns, top)?;
    if shown.is_empty() {
        return Ok(());
    }

    loop {
        write!(out, "\nTurn number to preview, or 'e' to exit: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }
        let choice = line.trim();
        if choice.eq_ignore_ascii_case("e") {
            return Ok(());
        }

        let turn = choice
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| shown.get(i));
        match turn {
            Some(turn) => {
                writeln!(out, "\n{}", turn.to_string().bright_cyan())?;
                write_board(out, board, Some(turn))?;
            }
            None => writeln!(
                out,
                "{}",
                format!("Enter a number from 1 to {}", shown.len()).red()
            )?,
        }
    }
}
