//! Board solving command
//!
//! Runs a turn search for one rack while a progress bar follows the live
//! counters.

use crate::core::{Board, PotentialTurn, Rack};
use crate::dictionary::Lexicon;
use crate::solver::{ProgressSnapshot, ScrabbleScorer, SearchConfig, TurnSearch};
use indicatif::{ProgressBar, ProgressStyle};
use std::thread;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Result of solving a board
pub struct SolveResult {
    pub rack: Rack,
    pub turns: Vec<PotentialTurn>,
    pub duration: Duration,
    pub progress: ProgressSnapshot,
    /// The search stopped early on its time budget
    pub interrupted: bool,
}

impl SolveResult {
    #[must_use]
    pub fn best(&self) -> Option<&PotentialTurn> {
        self.turns.first()
    }
}

/// Find all turns for `rack` on `board`
///
/// With `show_progress` a progress bar tracks examined cells while the
/// search runs on a worker thread.
pub fn solve_board<L: Lexicon>(
    lexicon: &L,
    board: &Board,
    rack: &Rack,
    config: SearchConfig,
    show_progress: bool,
) -> SolveResult {
    let search = TurnSearch::new(ScrabbleScorer, lexicon).with_config(config);
    let progress = search.progress();
    let start = Instant::now();

    let bar = if show_progress {
        ProgressBar::new((2 * board.size() * board.size()) as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} cells | {msg}")
    {
        bar.set_style(style.progress_chars("█▓▒░"));
    }

    let turns = thread::scope(|scope| {
        let worker = scope.spawn(|| search.calculate_turns(board, rack));
        while !worker.is_finished() {
            let snapshot = progress.snapshot();
            bar.set_position(snapshot.cells_examined as u64);
            bar.set_message(format!("{} lookups", snapshot.words_checked));
            thread::sleep(POLL_INTERVAL);
        }
        worker
            .join()
            .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
    });

    let snapshot = progress.snapshot();
    bar.set_position(snapshot.cells_examined as u64);
    bar.finish_and_clear();

    SolveResult {
        rack: rack.clone(),
        turns,
        duration: start.elapsed(),
        progress: snapshot,
        interrupted: progress.is_interrupted(),
    }
}
