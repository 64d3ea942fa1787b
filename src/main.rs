//! Scrabble Solver - CLI
//!
//! Finds every legal turn for a rack on a board, ranked by score, with text,
//! benchmark and TUI modes.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use scrabble_solver::{
    commands::{run_benchmark, run_simple, solve_board},
    core::{Board, Rack},
    dictionary::{Dictionary, loader::load_from_file},
    game::{LetterBag, load_board, standard_board},
    log::init_logger,
    output::{print_benchmark_result, print_solve_result},
    solver::{ScrabbleScorer, SearchConfig, TurnSearch},
};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "scrabble_solver",
    about = "Finds and ranks every legal Scrabble turn for a rack",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word list file, one word per line
    #[arg(short = 'w', long, global = true, default_value = "words.txt")]
    wordlist: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,
}

/// Options shared by every command that searches
#[derive(Args)]
struct SearchArgs {
    /// Board file (.csv or text grid); empty standard board if omitted
    #[arg(short, long)]
    board: Option<PathBuf>,

    /// Stop starting new lines after this many milliseconds
    #[arg(long)]
    time_budget_ms: Option<u64>,

    /// Search lines one at a time instead of in parallel
    #[arg(long)]
    sequential: bool,
}

impl SearchArgs {
    fn config(&self) -> SearchConfig {
        let mut config = SearchConfig::new();
        if let Some(ms) = self.time_budget_ms {
            config = config.with_time_budget(Duration::from_millis(ms));
        }
        if self.sequential {
            config = config.sequential();
        }
        config
    }

    fn load_board(&self) -> Result<Board> {
        match &self.board {
            Some(path) => load_board(path, standard_board())
                .with_context(|| format!("Failed to load board {}", path.display())),
            None => Ok(standard_board()),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Solve one rack and print the best turns
    Solve {
        /// Rack tiles, '*' for a blank (e.g. "tinjm*")
        #[arg(short, long)]
        rack: String,

        /// Number of turns to print
        #[arg(short, long, default_value = "50")]
        top: usize,

        #[command(flatten)]
        search: SearchArgs,
    },

    /// Text mode: list turns and preview any of them on the board
    Simple {
        /// Rack tiles, '*' for a blank
        #[arg(short, long)]
        rack: String,

        /// Number of turns to list
        #[arg(short, long, default_value = "50")]
        top: usize,

        #[command(flatten)]
        search: SearchArgs,
    },

    /// Time the search over random racks
    Benchmark {
        /// Number of random racks to search
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,

        /// Seed for reproducible racks
        #[arg(short, long)]
        seed: Option<u64>,

        #[command(flatten)]
        search: SearchArgs,
    },

    /// Interactive TUI: browse and play turns from a letter bag
    Play {
        /// Seed for reproducible draws
        #[arg(short, long)]
        seed: Option<u64>,

        #[command(flatten)]
        search: SearchArgs,
    },
}

fn load_dictionary(path: &Path) -> Result<Dictionary> {
    let dictionary = load_from_file(path)
        .with_context(|| format!("Failed to read word list {}", path.display()))?;
    anyhow::ensure!(
        !dictionary.is_empty(),
        "Word list {} has no valid words",
        path.display()
    );
    Ok(dictionary)
}

fn parse_rack(text: &str) -> Result<Rack> {
    Rack::parse(text).with_context(|| format!("Invalid rack {text:?}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.debug);

    let dictionary = load_dictionary(&cli.wordlist)?;

    match cli.command {
        Commands::Solve { rack, top, search } => {
            let board = search.load_board()?;
            let rack = parse_rack(&rack)?;
            let result = solve_board(&dictionary, &board, &rack, search.config(), true);
            print_solve_result(&board, &result, top)?;
            Ok(())
        }
        Commands::Simple { rack, top, search } => {
            let board = search.load_board()?;
            let rack = parse_rack(&rack)?;
            let result = solve_board(&dictionary, &board, &rack, search.config(), true);
            run_simple(&board, &result.turns, top)?;
            Ok(())
        }
        Commands::Benchmark {
            count,
            seed,
            search,
        } => {
            let board = search.load_board()?;
            println!("Running benchmark on {count} random racks...");
            let result = run_benchmark(&dictionary, &board, count, seed, search.config());
            print_benchmark_result(&result);
            Ok(())
        }
        Commands::Play { seed, search } => run_play_command(&dictionary, seed, &search),
    }
}

fn run_play_command(dictionary: &Dictionary, seed: Option<u64>, search: &SearchArgs) -> Result<()> {
    use scrabble_solver::interactive::{App, run_tui};

    let board = search.load_board()?;
    let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let engine = TurnSearch::new(ScrabbleScorer, dictionary).with_config(search.config());

    let mut bag = LetterBag::standard();
    let in_play = bag.remove_tiles(board.tiles());
    log::debug!("{in_play} board tiles removed from the bag");

    let app = App::new(engine, board, bag, rng);
    run_tui(app)
}
