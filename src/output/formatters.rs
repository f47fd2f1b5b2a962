//! Formatting utilities for terminal output

use crate::core::{CellStatus, KeyStatus};
use crate::game::{KeyHints, QWERTY_ROWS, Row};
use colored::{ColoredString, Colorize};

/// Color one letter the way a tile with `status` is drawn
#[must_use]
pub fn colored_letter(letter: char, status: CellStatus) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match status {
        CellStatus::Correct => text.black().on_green().bold(),
        CellStatus::Present => text.black().on_yellow().bold(),
        CellStatus::Absent => text.white().on_bright_black(),
        CellStatus::Typed | CellStatus::Empty => text.normal(),
    }
}

/// Render a grid row as colored letter tiles followed by its emoji squares
#[must_use]
pub fn format_row(row: &Row) -> String {
    let tiles: String = row
        .iter()
        .map(|cell| colored_letter(cell.letter().unwrap_or(' '), cell.status()).to_string())
        .collect();
    let squares: String = row.iter().map(|cell| cell.status().emoji()).collect();
    format!("{tiles}  {squares}")
}

/// Render the keyboard as three QWERTY lines colored by hint
#[must_use]
pub fn format_keyboard(hints: &KeyHints) -> Vec<String> {
    QWERTY_ROWS
        .iter()
        .map(|row| {
            row.chars()
                .map(|c| {
                    let key = c.to_ascii_uppercase().to_string();
                    let styled = match hints.get(c) {
                        KeyStatus::Untried => key.normal(),
                        KeyStatus::Absent => key.bright_black(),
                        KeyStatus::Present => key.yellow().bold(),
                        KeyStatus::Correct => key.green().bold(),
                    };
                    styled.to_string()
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}
