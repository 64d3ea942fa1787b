//! TUI rendering with ratatui
//!
//! Ranked turn list on the left, board preview of the selected turn on the
//! right.

use super::app::{App, MessageStyle};
use crate::dictionary::Lexicon;
use crate::output::formatters::{Square, SquareKind, preview_squares, turn_summary};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
};

/// Main UI rendering function
pub fn ui<L: Lexicon>(f: &mut Frame, app: &App<'_, L>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(17),   // Main content
            Constraint::Length(7), // Messages
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_turns(f, app, main_chunks[0]);
    render_board(f, app, main_chunks[1]);
    render_messages(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("SCRABBLE SOLVER")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_turns<L: Lexicon>(f: &mut Frame, app: &App<'_, L>, area: Rect) {
    let items: Vec<ListItem> = app
        .turns
        .iter()
        .enumerate()
        .map(|(i, turn)| ListItem::new(turn_summary(i + 1, turn)))
        .collect();

    let title = format!(" Turns ({}) ", app.turns.len());
    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default().with_selected(Some(app.selected));
    f.render_stateful_widget(list, area, &mut state);
}

fn square_style(square: Square) -> Style {
    match square.kind {
        SquareKind::Empty => Style::default().fg(Color::DarkGray),
        SquareKind::Premium(modifier) => {
            let color = match (modifier.affects_whole_word(), modifier.multiplier()) {
                (true, 3) => Color::Red,
                (true, _) => Color::Magenta,
                (false, 3) => Color::Blue,
                (false, _) => Color::Cyan,
            };
            Style::default().fg(color)
        }
        SquareKind::Tile => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        SquareKind::Placed => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    }
}

fn render_board<L: Lexicon>(f: &mut Frame, app: &App<'_, L>, area: Rect) {
    let lines: Vec<Line> = preview_squares(&app.board, app.selected_turn())
        .into_iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .into_iter()
                .map(|square| Span::styled(format!("{} ", square.symbol), square_style(square)))
                .collect();
            Line::from(spans)
        })
        .collect();

    let title = app
        .selected_turn()
        .map_or_else(|| " Board ".to_string(), |turn| format!(" {turn} "));
    let board = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_messages<L: Lexicon>(f: &mut Frame, app: &App<'_, L>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<L: Lexicon>(f: &mut Frame, app: &App<'_, L>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let rack = Paragraph::new(format!("Rack: {}", app.rack.to_string().to_uppercase()))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    f.render_widget(rack, chunks[0]);

    let score = Paragraph::new(format!(
        "Score: {} | Bag: {}",
        app.total_score(),
        app.bag.remaining()
    ))
    .alignment(Alignment::Center);
    f.render_widget(score, chunks[1]);

    let help = Paragraph::new("q: Quit | Up/Down: Select | Enter: Play | x: Exchange")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
