//! TUI rendering with ratatui
//!
//! Tile grid, on-screen keyboard and message panel for the game interface.

use super::app::{App, MessageStyle};
use crate::core::Feedback;
use crate::game::{Cell, GameStatus};
use crate::providers::DictionaryValidator;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui<S, V: DictionaryValidator>(f: &mut Frame, app: &App<S, V>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(14),    // Main content
            Constraint::Length(7),  // Messages
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    // Main content area - board left, keyboard and stats right
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);

    let side_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(5)])
        .split(main_chunks[1]);

    render_keyboard(f, app, side_chunks[0]);
    render_stats(f, app, side_chunks[1]);

    render_messages(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W O R D L E")
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

fn tile_span(cell: Cell) -> Span<'static> {
    let text = match cell.letter() {
        Some(letter) => format!(" {letter} "),
        None => " · ".to_string(),
    };

    let style = match cell.feedback() {
        Some(Feedback::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(Feedback::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(Feedback::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None if cell.letter().is_some() => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        None => Style::default().fg(Color::DarkGray),
    };

    Span::styled(text, style)
}

fn render_board<S, V: DictionaryValidator>(f: &mut Frame, app: &App<S, V>, area: Rect) {
    let mut lines = vec![Line::from("")];

    for row in app.session.board().rows() {
        let mut spans = Vec::with_capacity(row.len() * 2);
        for cell in row {
            spans.push(tile_span(*cell));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans).alignment(Alignment::Center));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn key_span(letter: char, hint: Option<Feedback>) -> Span<'static> {
    let style = match hint {
        Some(Feedback::Correct) => Style::default().fg(Color::Black).bg(Color::Green),
        Some(Feedback::Present) => Style::default().fg(Color::Black).bg(Color::Yellow),
        Some(Feedback::Absent) => Style::default().fg(Color::DarkGray),
        None => Style::default().fg(Color::White),
    };
    Span::styled(format!("{letter} "), style)
}

fn render_keyboard<S, V: DictionaryValidator>(f: &mut Frame, app: &App<S, V>, area: Rect) {
    let hints = app.session.hints();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|letters| {
            let spans: Vec<Span> = letters
                .chars()
                .map(|letter| key_span(letter, hints.get(letter)))
                .collect();
            Line::from(spans).alignment(Alignment::Center)
        })
        .collect();

    let keyboard = Paragraph::new(lines).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_stats<S, V: DictionaryValidator>(f: &mut Frame, app: &App<S, V>, area: Rect) {
    let stats = &app.stats;
    let win_rate = if stats.total_games > 0 {
        100.0 * stats.games_won as f64 / stats.total_games as f64
    } else {
        0.0
    };

    let mut lines = vec![
        Line::from(format!(
            "Played: {}   Won: {}   Rate: {win_rate:.0}%",
            stats.total_games, stats.games_won
        )),
        Line::from(""),
    ];

    let max_count = stats.guess_distribution.iter().max().copied().unwrap_or(0);
    for (attempts, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let bar_len = if max_count > 0 { count * 16 / max_count } else { 0 };
        lines.push(Line::from(format!(
            "{attempts}: {}{} {count}",
            "█".repeat(bar_len),
            "░".repeat(16 - bar_len),
        )));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(panel, area);
}

fn render_messages<S, V: DictionaryValidator>(f: &mut Frame, app: &App<S, V>, area: Rect) {
    let items: Vec<ListItem> = app
        .messages
        .iter()
        .map(|message| {
            let style = match message.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(Line::from(Span::styled(message.text.clone(), style)))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Messages ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_status<S, V: DictionaryValidator>(f: &mut Frame, app: &App<S, V>, area: Rect) {
    let controls = match app.session.status() {
        GameStatus::InProgress => {
            let row = app.session.cursor().row() + 1;
            format!("Attempt {row}/6  │  Type letters · Enter submit · Backspace delete · Esc quit")
        }
        GameStatus::Won | GameStatus::Lost => {
            "Game over  │  n new game · q/Esc quit".to_string()
        }
    };

    let status = Paragraph::new(controls)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(status, area);
}
