//! Turn search orchestration
//!
//! Fans every row and column of the board out as an independent line task,
//! then merges and ranks the results.

use super::config::SearchConfig;
use super::line::LineContext;
use super::permutations::PermutationCache;
use super::progress::Progress;
use super::scoring::{Scorer, ScrabbleScorer};
use crate::core::{Board, Line, PotentialTurn, Rack};
use crate::dictionary::{Dictionary, Lexicon};
use rayon::prelude::*;
use std::sync::Arc;
use std::time::Instant;

/// Finds every valid turn for a rack on a board
///
/// The lexicon is shared read-only; one search instance can serve any number
/// of boards, one at a time.
///
/// # Examples
/// ```
/// use scrabble_solver::core::{Board, Rack};
/// use scrabble_solver::dictionary::Dictionary;
/// use scrabble_solver::solver::{ScrabbleScorer, TurnSearch};
///
/// let dictionary = Dictionary::from_words(["cat", "cats"]);
/// let search = TurnSearch::new(ScrabbleScorer, &dictionary);
///
/// let rows = [".....", ".....", ".cat.", ".....", "....."];
/// let board = Board::from_rows(&rows).unwrap();
/// let turns = search.calculate_turns(&board, &Rack::parse("s").unwrap());
///
/// assert_eq!(turns[0].word(), "cats");
/// ```
pub struct TurnSearch<'a, L: Lexicon = Dictionary, S: Scorer = ScrabbleScorer> {
    scorer: S,
    lexicon: &'a L,
    config: SearchConfig,
    progress: Arc<Progress>,
}

impl<'a, L: Lexicon, S: Scorer> TurnSearch<'a, L, S> {
    pub fn new(scorer: S, lexicon: &'a L) -> Self {
        Self {
            scorer,
            lexicon,
            config: SearchConfig::default(),
            progress: Arc::new(Progress::new()),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Handle for observing or cancelling the running search from another thread
    #[must_use]
    pub fn progress(&self) -> Arc<Progress> {
        Arc::clone(&self.progress)
    }

    /// All valid turns, best first
    ///
    /// Rows are searched horizontally and columns vertically. Results are
    /// ordered by score descending, ties broken by word then position, so
    /// the output is identical whether lines run in parallel or not.
    ///
    /// When a time budget is set or the progress handle is cancelled, lines
    /// not yet started are skipped and the turns found so far are returned.
    /// A cancel issued before the call stops the search at once and stays in
    /// effect until [`Progress::resume`].
    pub fn calculate_turns(&self, board: &Board, rack: &Rack) -> Vec<PotentialTurn> {
        let lines: Vec<Line<'_>> = board.rows().into_iter().chain(board.columns()).collect();
        self.search_lines(board, rack, &lines)
    }

    fn search_lines(&self, board: &Board, rack: &Rack, lines: &[Line<'_>]) -> Vec<PotentialTurn> {
        let started = Instant::now();
        let deadline = self.config.time_budget.map(|budget| started + budget);
        self.progress.reset(lines.len() * board.size());

        let max_length = board.empty_cells().min(rack.len());
        let permutations = PermutationCache::build(rack, max_length);
        log::debug!(
            "rack {rack}: {} permutations up to length {}",
            permutations.total(),
            permutations.max_length()
        );

        let context = LineContext {
            board,
            lexicon: self.lexicon,
            scorer: &self.scorer,
            permutations: &permutations,
            progress: &self.progress,
            min_word_len: self.config.min_word_len,
        };

        let run = |line: &Line<'_>| -> Vec<PotentialTurn> {
            if self.should_stop(deadline) {
                return Vec::new();
            }
            context.search(*line)
        };

        let mut turns: Vec<PotentialTurn> = if self.config.parallel {
            lines.par_iter().flat_map_iter(&run).collect()
        } else {
            lines.iter().flat_map(&run).collect()
        };
        turns.sort_by(PotentialTurn::rank_cmp);

        let snapshot = self.progress.snapshot();
        log::info!(
            "found {} turns in {:.2?} ({} lookups)",
            turns.len(),
            started.elapsed(),
            snapshot.words_checked
        );
        turns
    }

    fn should_stop(&self, deadline: Option<Instant>) -> bool {
        if self.progress.is_interrupted() {
            return true;
        }
        match deadline {
            Some(deadline) if Instant::now() >= deadline => {
                log::warn!("time budget exhausted, returning partial results");
                self.progress.time_out();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Letter, Position};
    use crate::game::layout::standard_board;
    use std::time::Duration;

    fn cats_board() -> Board {
        let mut board = Board::new(15);
        for (col, ch) in (7..).zip("cat".chars()) {
            board
                .place(Position::new(7, col), Letter::standard(ch).unwrap())
                .unwrap();
        }
        board
    }

    fn sample_board() -> Board {
        let mut board = standard_board();
        let rows = [
            "...............",
            "...............",
            "...............",
            "...............",
            "...............",
            "...............",
            ".......h.......",
            "....train......",
            ".......t.......",
            "...............",
            "...............",
            "...............",
            "...............",
            "...............",
            "...............",
        ];
        board.fill_from_rows(&rows).unwrap();
        board
    }

    fn sample_dictionary() -> Dictionary {
        Dictionary::from_words([
            "at", "ate", "eat", "hat", "heat", "rain", "rains", "train", "trains", "strain",
            "tea", "tear", "tae", "ta", "en", "ne", "in", "is", "it", "its", "nit", "tin", "tins",
            "sit", "set", "sea", "seat", "ar", "ai", "ain", "hate", "sh", "eh", "he", "hi", "ti",
            "st", "es", "re", "er", "art", "arts", "star", "stare",
        ])
    }

    #[test]
    fn extends_word_on_plain_board() {
        let dictionary = Dictionary::from_words(["cat", "cats"]);
        let search = TurnSearch::new(ScrabbleScorer, &dictionary);
        let turns = search.calculate_turns(&cats_board(), &Rack::parse("s").unwrap());

        assert_eq!(turns.len(), 1);
        let cats = &turns[0];
        assert_eq!(cats.word(), "cats");
        assert_eq!(cats.orientation(), crate::core::Orientation::Horizontal);
        assert_eq!(cats.placements(), &[Position::new(7, 10)]);
        assert_eq!(cats.score(), 6);
    }

    #[test]
    fn results_are_sorted_best_first() {
        let dictionary = sample_dictionary();
        let search = TurnSearch::new(ScrabbleScorer, &dictionary);
        let turns = search.calculate_turns(&sample_board(), &Rack::parse("seat").unwrap());

        assert!(!turns.is_empty());
        for pair in turns.windows(2) {
            assert_ne!(pair[0].rank_cmp(&pair[1]), std::cmp::Ordering::Greater);
        }
    }

    #[test]
    fn repeated_searches_are_identical() {
        let dictionary = sample_dictionary();
        let search = TurnSearch::new(ScrabbleScorer, &dictionary);
        let board = sample_board();
        let rack = Rack::parse("seat").unwrap();

        let first = search.calculate_turns(&board, &rack);
        let second = search.calculate_turns(&board, &rack);
        assert_eq!(first, second);
    }

    #[test]
    fn line_order_does_not_change_results() {
        let dictionary = sample_dictionary();
        let board = sample_board();
        let rack = Rack::parse("seat").unwrap();

        let parallel = TurnSearch::new(ScrabbleScorer, &dictionary);
        let expected = parallel.calculate_turns(&board, &rack);

        let sequential = TurnSearch::new(ScrabbleScorer, &dictionary)
            .with_config(SearchConfig::new().sequential());
        let mut lines: Vec<Line<'_>> = board.rows().into_iter().chain(board.columns()).collect();
        lines.reverse();
        let reversed = sequential.search_lines(&board, &rack, &lines);

        assert_eq!(expected, reversed);
    }

    #[test]
    fn every_placement_is_empty_and_every_word_valid() {
        let dictionary = sample_dictionary();
        let search = TurnSearch::new(ScrabbleScorer, &dictionary);
        let board = sample_board();
        let turns = search.calculate_turns(&board, &Rack::parse("seat").unwrap());

        for turn in &turns {
            assert!(dictionary.contains(turn.word()), "{turn}");
            assert!(turn.word().len() >= 2);
            for &position in turn.placements() {
                assert!(board.cell(position).unwrap().is_empty(), "{turn}");
            }
            let mut after = board.clone();
            after.apply(turn).unwrap();
        }
    }

    #[test]
    fn opening_move_covers_centre() {
        let dictionary = Dictionary::from_words(["go", "ego", "toe"]);
        let search = TurnSearch::new(ScrabbleScorer, &dictionary);
        let board = standard_board();
        let turns = search.calculate_turns(&board, &Rack::parse("egot").unwrap());

        assert!(!turns.is_empty());
        for turn in &turns {
            assert!(turn.placements().contains(&board.center()), "{turn}");
        }
        // both orientations through the centre
        assert!(turns.iter().any(|t| t.orientation() == crate::core::Orientation::Vertical));
    }

    #[test]
    fn blank_extends_word_at_either_end() {
        let dictionary = Dictionary::from_words(["cat", "cats", "scat"]);
        let search = TurnSearch::new(ScrabbleScorer, &dictionary);
        let board = Board::from_rows(&[".....", ".....", ".cat.", ".....", "....."]).unwrap();
        let turns = search.calculate_turns(&board, &Rack::parse("*").unwrap());

        let words: Vec<&str> = turns.iter().map(PotentialTurn::word).collect();
        assert_eq!(words, ["*cat", "cat*"]);
        assert_eq!(turns[0].placements(), &[Position::new(2, 0)]);
        assert_eq!(turns[1].placements(), &[Position::new(2, 4)]);
        for turn in &turns {
            assert_eq!(turn.score(), 5);
            assert_eq!(turn.letters().len(), 1);
            assert!(turn.letters()[0].is_wildcard());
        }
    }

    #[test]
    fn blank_must_fit_the_crossing_word() {
        let rows = [".....", ".o...", "a.t..", ".....", "....."];
        let board = Board::from_rows(&rows).unwrap();
        let rack = Rack::parse("*").unwrap();

        let dictionary = Dictionary::from_words(["ant", "on"]);
        let turns = TurnSearch::new(ScrabbleScorer, &dictionary).calculate_turns(&board, &rack);
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].word(), "a*t");
        assert_eq!(turns[0].orientation(), crate::core::Orientation::Horizontal);
        assert_eq!(turns[0].score(), 2);
        assert_eq!(turns[1].word(), "o*");
        assert_eq!(turns[1].orientation(), crate::core::Orientation::Vertical);
        assert_eq!(turns[1].score(), 1);
        for turn in &turns {
            assert_eq!(turn.placements(), &[Position::new(2, 1)]);
        }

        // "a*t" alone is a word, but no letter makes "o*" one
        let dictionary = Dictionary::from_words(["ant"]);
        let turns = TurnSearch::new(ScrabbleScorer, &dictionary).calculate_turns(&board, &rack);
        assert!(turns.is_empty());
    }

    #[test]
    fn empty_rack_finds_nothing() {
        let dictionary = sample_dictionary();
        let search = TurnSearch::new(ScrabbleScorer, &dictionary);
        assert!(search.calculate_turns(&sample_board(), &Rack::new()).is_empty());
    }

    #[test]
    fn progress_reaches_total() {
        let dictionary = sample_dictionary();
        let search = TurnSearch::new(ScrabbleScorer, &dictionary);
        let progress = search.progress();
        search.calculate_turns(&sample_board(), &Rack::parse("seat").unwrap());

        let snapshot = progress.snapshot();
        assert_eq!(snapshot.total_cells, 2 * 15 * 15);
        assert_eq!(snapshot.cells_examined, snapshot.total_cells);
        assert!(snapshot.words_checked > 0);
    }

    #[test]
    fn zero_budget_returns_early() {
        let dictionary = sample_dictionary();
        let search = TurnSearch::new(ScrabbleScorer, &dictionary)
            .with_config(SearchConfig::new().with_time_budget(Duration::ZERO));
        let turns = search.calculate_turns(&sample_board(), &Rack::parse("seat").unwrap());

        assert!(turns.is_empty());
        assert!(search.progress().is_interrupted());
        assert!(!search.progress().is_cancelled());
    }

    #[test]
    fn cancel_before_search_is_honoured() {
        let dictionary = sample_dictionary();
        let search = TurnSearch::new(ScrabbleScorer, &dictionary);
        let board = sample_board();
        let rack = Rack::parse("seat").unwrap();

        search.progress().cancel();
        assert!(search.calculate_turns(&board, &rack).is_empty());
        assert_eq!(search.progress().snapshot().cells_examined, 0);

        search.progress().resume();
        assert!(!search.calculate_turns(&board, &rack).is_empty());
    }

    #[test]
    fn time_out_does_not_stick_to_the_next_search() {
        let dictionary = sample_dictionary();
        let board = sample_board();
        let rack = Rack::parse("seat").unwrap();
        let mut search = TurnSearch::new(ScrabbleScorer, &dictionary)
            .with_config(SearchConfig::new().with_time_budget(Duration::ZERO));
        assert!(search.calculate_turns(&board, &rack).is_empty());

        search = search.with_config(SearchConfig::new());
        assert!(!search.calculate_turns(&board, &rack).is_empty());
        assert!(!search.progress().is_interrupted());
    }
}
