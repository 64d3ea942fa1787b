//! TUI application state and logic

use crate::core::{Board, PotentialTurn, Rack, letter};
use crate::dictionary::Lexicon;
use crate::game::LetterBag;
use crate::solver::{ScrabbleScorer, TurnSearch};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// A turn that has been played
#[derive(Debug, Clone)]
pub struct PlayedTurn {
    pub word: String,
    pub score: u32,
}

/// Application state
pub struct App<'a, L: Lexicon> {
    pub search: TurnSearch<'a, L>,
    pub board: Board,
    pub rack: Rack,
    pub bag: LetterBag,
    pub turns: Vec<PotentialTurn>,
    pub selected: usize,
    pub history: Vec<PlayedTurn>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    rng: StdRng,
}

impl<'a, L: Lexicon> App<'a, L> {
    /// Start a game: fill the rack from `bag` and search the opening turns
    pub fn new(search: TurnSearch<'a, L>, board: Board, mut bag: LetterBag, mut rng: StdRng) -> Self {
        let mut rack = Rack::new();
        bag.fill_rack(&mut rack, &mut rng);

        let mut app = Self {
            search,
            board,
            rack,
            bag,
            turns: Vec::new(),
            selected: 0,
            history: Vec::new(),
            messages: Vec::new(),
            should_quit: false,
            rng,
        };
        app.add_message(
            "Up/Down to browse, Enter to play the selected turn.",
            MessageStyle::Info,
        );
        app.refresh_turns();
        app
    }

    /// Re-run the search for the current board and rack
    pub fn refresh_turns(&mut self) {
        self.turns = self.search.calculate_turns(&self.board, &self.rack);
        self.selected = 0;
        if self.turns.is_empty() {
            self.add_message(
                "No valid turns. Press 'x' to exchange the rack.",
                MessageStyle::Error,
            );
        } else {
            self.add_message(
                &format!("{} turns for rack {}", self.turns.len(), self.rack),
                MessageStyle::Info,
            );
        }
    }

    #[must_use]
    pub fn selected_turn(&self) -> Option<&PotentialTurn> {
        self.turns.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.turns.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Total points of every turn played so far
    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.history.iter().map(|turn| turn.score).sum()
    }

    /// Place the selected turn, refill the rack and search again
    pub fn play_selected(&mut self) {
        let Some(turn) = self.selected_turn().cloned() else {
            self.add_message("Nothing to play", MessageStyle::Error);
            return;
        };
        if let Err(e) = self.board.apply(&turn) {
            self.add_message(&e.to_string(), MessageStyle::Error);
            return;
        }

        self.rack.remove_played(&turn);
        let drawn = self.bag.fill_rack(&mut self.rack, &mut self.rng);
        self.history.push(PlayedTurn {
            word: turn.word().to_string(),
            score: turn.score(),
        });
        self.add_message(
            &format!(
                "Played {} for {} points, drew {drawn}",
                turn.word().to_uppercase(),
                turn.score()
            ),
            MessageStyle::Success,
        );
        self.refresh_turns();
    }

    /// Return the whole rack to the bag and draw a new one
    pub fn exchange_rack(&mut self) {
        if self.bag.remaining() < self.rack.len() {
            self.add_message("Not enough tiles left to exchange", MessageStyle::Error);
            return;
        }
        let old = std::mem::take(&mut self.rack);
        let mut fresh = Rack::new();
        self.bag.fill_rack(&mut fresh, &mut self.rng);
        self.bag.return_tiles(old.letters().iter().copied());
        self.rack = fresh;
        self.add_message(
            &format!(
                "Exchanged {} for {}",
                letter::render(old.letters()),
                self.rack
            ),
            MessageStyle::Info,
        );
        self.refresh_turns();
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply a key press
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Enter => self.play_selected(),
            KeyCode::Char('x') => self.exchange_rack(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<L: Lexicon>(app: App<'_, L>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, L: Lexicon>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, L>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key.code, key.modifiers);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
