//! Benchmark command
//!
//! Times the turn search across random racks drawn from fresh bags.

use crate::core::{Board, PotentialTurn, Rack};
use crate::dictionary::Lexicon;
use crate::game::LetterBag;
use crate::solver::{ScrabbleScorer, SearchConfig, TurnSearch};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Width of a score bucket in the best-score histogram
pub const SCORE_BUCKET: u32 = 10;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub racks: usize,
    pub total_turns: usize,
    pub total_duration: Duration,
    pub average_duration: Duration,
    pub min_duration: Duration,
    pub max_duration: Duration,
    pub racks_per_second: f64,
    /// Racks for which no turn exists
    pub stuck_racks: usize,
    /// Highest scoring turn over all racks, with its rack
    pub best: Option<(String, PotentialTurn)>,
    /// Best score per rack, bucketed by `SCORE_BUCKET`
    pub score_distribution: BTreeMap<u32, usize>,
}

/// Search `count` random racks on `board`
///
/// Each rack is seven tiles drawn from a fresh standard bag. A `seed` makes
/// the racks reproducible.
pub fn run_benchmark<L: Lexicon>(
    lexicon: &L,
    board: &Board,
    count: usize,
    seed: Option<u64>,
    config: SearchConfig,
) -> BenchmarkResult {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let search = TurnSearch::new(ScrabbleScorer, lexicon).with_config(config);

    let mut total_turns = 0;
    let mut stuck_racks = 0;
    let mut min_duration = Duration::MAX;
    let mut max_duration = Duration::ZERO;
    let mut best: Option<(String, PotentialTurn)> = None;
    let mut score_distribution = BTreeMap::new();
    let start = Instant::now();

    for round in 0..count {
        let mut rack = Rack::new();
        LetterBag::standard().fill_rack(&mut rack, &mut rng);

        let rack_start = Instant::now();
        let turns = search.calculate_turns(board, &rack);
        let elapsed = rack_start.elapsed();
        log::debug!("rack {} ({rack}): {} turns in {elapsed:.2?}", round + 1, turns.len());

        min_duration = min_duration.min(elapsed);
        max_duration = max_duration.max(elapsed);
        total_turns += turns.len();

        let Some(top) = turns.into_iter().next() else {
            stuck_racks += 1;
            continue;
        };
        *score_distribution
            .entry(top.score() / SCORE_BUCKET * SCORE_BUCKET)
            .or_insert(0) += 1;
        if best.as_ref().is_none_or(|(_, current)| top.score() > current.score()) {
            best = Some((rack.to_string(), top));
        }
    }

    let total_duration = start.elapsed();
    let average_duration = u32::try_from(count)
        .ok()
        .and_then(|n| total_duration.checked_div(n))
        .unwrap_or(Duration::ZERO);

    BenchmarkResult {
        racks: count,
        total_turns,
        total_duration,
        average_duration,
        min_duration: if count == 0 { Duration::ZERO } else { min_duration },
        max_duration,
        racks_per_second: count as f64 / total_duration.as_secs_f64().max(f64::EPSILON),
        stuck_racks,
        best,
        score_distribution,
    }
}
