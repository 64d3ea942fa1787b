//! Display functions for command results

use super::formatters::{Square, SquareKind, create_progress_bar, preview_squares, turn_summary};
use crate::commands::benchmark::SCORE_BUCKET;
use crate::commands::{BenchmarkResult, SolveResult};
use crate::core::{Board, PotentialTurn};
use colored::{ColoredString, Colorize};
use std::io::{self, Write};

fn colored_square(square: Square) -> ColoredString {
    let symbol = square.symbol.to_string();
    match square.kind {
        SquareKind::Empty => symbol.bright_black(),
        SquareKind::Premium(modifier) => match (modifier.affects_whole_word(), modifier.multiplier()) {
            (true, 3) => symbol.red(),
            (true, _) => symbol.magenta(),
            (false, 3) => symbol.blue(),
            (false, _) => symbol.cyan(),
        },
        SquareKind::Tile => symbol.bright_white().bold(),
        SquareKind::Placed => symbol.bright_yellow().bold(),
    }
}

/// Write the board, overlaying the tiles `turn` would place
///
/// # Errors
/// Returns any error from the writer.
pub fn write_board<W: Write>(
    out: &mut W,
    board: &Board,
    turn: Option<&PotentialTurn>,
) -> io::Result<()> {
    for row in preview_squares(board, turn) {
        let cells: Vec<String> = row
            .into_iter()
            .map(|square| colored_square(square).to_string())
            .collect();
        writeln!(out, "  {}", cells.join(" "))?;
    }
    Ok(())
}

/// Write the first `top` turns as a numbered list
///
/// # Errors
/// Returns any error from the writer.
pub fn write_turns<W: Write>(out: &mut W, turns: &[PotentialTurn], top: usize) -> io::Result<()> {
    if turns.is_empty() {
        writeln!(out, "{}", "No valid turns found".yellow())?;
        return Ok(());
    }
    for (i, turn) in turns.iter().take(top).enumerate() {
        let line = turn_summary(i + 1, turn);
        if i == 0 {
            writeln!(out, "{}", line.bright_green().bold())?;
        } else {
            writeln!(out, "{line}")?;
        }
    }
    if turns.len() > top {
        writeln!(
            out,
            "{}",
            format!("  ... {} more", turns.len() - top).bright_black()
        )?;
    }
    Ok(())
}

/// Print the result of solving a board
///
/// # Errors
/// Returns an error if stdout cannot be written.
pub fn print_solve_result(board: &Board, result: &SolveResult, top: usize) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "\n{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "Rack: {}",
        result.rack.to_string().to_uppercase().bright_yellow().bold()
    )?;
    writeln!(out, "{}", "─".repeat(60).cyan())?;
    write_board(&mut out, board, result.best())?;
    writeln!(out)?;
    write_turns(&mut out, &result.turns, top)?;

    writeln!(out)?;
    writeln!(
        out,
        "{} turns in {:.2?} ({} cells, {} lookups)",
        result.turns.len().to_string().bright_cyan().bold(),
        result.duration,
        result.progress.cells_examined,
        result.progress.words_checked
    )?;
    if result.interrupted {
        writeln!(
            out,
            "{}",
            "Time budget exhausted: results are partial".yellow().bold()
        )?;
    }
    Ok(())
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}", "Performance:".bright_cyan().bold());
    println!("   Racks searched:   {}", result.racks);
    println!("   Turns found:      {}", result.total_turns);
    println!(
        "   Average time:     {}",
        format!("{:.2?}", result.average_duration)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Fastest:          {}",
        format!("{:.2?}", result.min_duration).green()
    );
    println!(
        "   Slowest:          {}",
        format!("{:.2?}", result.max_duration).yellow()
    );
    println!("   Total time:       {:.2}s", result.total_duration.as_secs_f64());
    println!("   Racks/second:     {:.1}", result.racks_per_second);
    println!("   No valid turn:    {}", result.stuck_racks);

    if let Some((rack, turn)) = &result.best {
        println!("\n{}", "Best turn:".bright_cyan().bold());
        println!(
            "   {} from rack {}",
            turn_summary(1, turn).trim_start().bright_green(),
            rack.to_uppercase()
        );
    }

    if result.score_distribution.is_empty() {
        return;
    }
    println!("\n{}", "Best score distribution:".bright_cyan().bold());
    let max = result
        .score_distribution
        .values()
        .copied()
        .max()
        .unwrap_or(0);
    for (&bucket, &count) in &result.score_distribution {
        let bar = create_progress_bar(count as f64, max as f64, 40);
        println!(
            "   {:>3}-{:<3} {} {count:4}",
            bucket,
            bucket + SCORE_BUCKET - 1,
            bar.green()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Letter, Orientation, Position};

    fn plain(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn board_has_one_line_per_row() {
        colored::control::set_override(false);
        let board = Board::from_rows(&["...", ".a.", "..."]).unwrap();
        let mut out = Vec::new();
        write_board(&mut out, &board, None).unwrap();

        let text = plain(out);
        assert_eq!(text.lines().count(), 3);
        assert_eq!(text.lines().nth(1), Some("  . A ."));
    }

    #[test]
    fn turn_list_is_truncated() {
        colored::control::set_override(false);
        let turns: Vec<PotentialTurn> = (0..5)
            .map(|i| {
                PotentialTurn::new(
                    "at".into(),
                    Orientation::Vertical,
                    vec![Position::new(i, 0), Position::new(i + 1, 0)],
                    vec![Position::new(i, 0)],
                    vec![Letter::standard('a').unwrap()],
                    2,
                )
            })
            .collect();
        let mut out = Vec::new();
        write_turns(&mut out, &turns, 2).unwrap();

        let text = plain(out);
        assert!(text.contains("  1. AT"));
        assert!(text.contains("  2. AT"));
        assert!(!text.contains("  3. AT"));
        assert!(text.contains("3 more"));
    }

    #[test]
    fn empty_turn_list_says_so() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        write_turns(&mut out, &[], 10).unwrap();
        assert!(plain(out).contains("No valid turns"));
    }
}
