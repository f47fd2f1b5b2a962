//! TUI rendering with ratatui
//!
//! Reads engine state and the theme; never mutates either.

use super::app::{App, MessageStyle};
use crate::config::Theme;
use crate::core::{CellStatus, KeyStatus, WORD_LENGTH};
use crate::game::{Cell, KeyHints, MAX_ATTEMPTS, QWERTY_ROWS, RoundOutcome};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const TILE_WIDTH: u16 = 7;
const TILE_HEIGHT: u16 = 3;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let keyboard_height = if app.engine.key_hints().is_some() { 5 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                                     // Header
            Constraint::Length(TILE_HEIGHT * MAX_ATTEMPTS as u16 + 2), // Grid
            Constraint::Length(keyboard_height),                       // Keyboard
            Constraint::Min(4),                                        // Messages
            Constraint::Length(1),                                     // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_grid(f, app, chunks[1]);
    if let Some(hints) = app.engine.key_hints() {
        render_keyboard(f, hints, &app.theme, chunks[2]);
    }
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE TILES")
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

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let title = match app.engine.outcome() {
        RoundOutcome::InProgress => format!(
            " Guess {}/{} ",
            app.engine.attempts_used() + 1,
            MAX_ATTEMPTS
        ),
        RoundOutcome::Won => " Solved! ".to_string(),
        RoundOutcome::Lost => format!(
            " The word was {} ",
            app.engine.secret().text().to_uppercase()
        ),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [board] = Layout::horizontal([Constraint::Length(TILE_WIDTH * WORD_LENGTH as u16)])
        .flex(Flex::Center)
        .areas(inner);

    let rows = Layout::vertical([Constraint::Length(TILE_HEIGHT); MAX_ATTEMPTS]).split(board);
    for (row_area, row) in rows.iter().zip(app.engine.grid().rows()) {
        let cols = Layout::horizontal([Constraint::Length(TILE_WIDTH); WORD_LENGTH]).split(*row_area);
        for (tile_area, &cell) in cols.iter().zip(row) {
            render_tile(f, cell, &app.theme, *tile_area);
        }
    }
}

fn render_tile(f: &mut Frame, cell: Cell, theme: &Theme, area: Rect) {
    let letter = cell
        .letter()
        .map(|c| c.to_ascii_uppercase().to_string())
        .unwrap_or_default();

    let (fill, border) = match cell.status() {
        CellStatus::Empty => (None, theme.empty),
        CellStatus::Typed => (None, theme.typed),
        CellStatus::Absent => (Some(theme.absent), theme.absent),
        CellStatus::Present => (Some(theme.present), theme.present),
        CellStatus::Correct => (Some(theme.correct), theme.correct),
    };

    let mut style = Style::default().fg(theme.text).add_modifier(Modifier::BOLD);
    if let Some(bg) = fill {
        style = style.bg(bg);
    }

    let tile = Paragraph::new(letter)
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
    f.render_widget(tile, area);
}

fn key_style(status: KeyStatus, theme: &Theme) -> Style {
    let base = Style::default().fg(theme.text).add_modifier(Modifier::BOLD);
    match status {
        KeyStatus::Untried => base.bg(theme.typed),
        KeyStatus::Absent => base.bg(theme.absent).fg(Color::DarkGray),
        KeyStatus::Present => base.bg(theme.present),
        KeyStatus::Correct => base.bg(theme.correct),
    }
}

fn render_keyboard(f: &mut Frame, hints: &KeyHints, theme: &Theme, area: Rect) {
    let lines: Vec<Line> = QWERTY_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|c| {
                    [
                        Span::styled(
                            format!(" {} ", c.to_ascii_uppercase()),
                            key_style(hints.get(c), theme),
                        ),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}% | Streak: {} (best {})",
        app.stats.total_games,
        app.stats.win_rate(),
        app.stats.current_streak,
        app.stats.best_streak
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help_text = if app.engine.outcome().is_over() {
        "Esc: New Round | Ctrl-C: Quit"
    } else {
        "Enter: Submit | Backspace: Erase | Esc: New Round | Ctrl-C: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
