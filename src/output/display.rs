//! Display functions for command results

use super::formatters::{colored_letter, format_keyboard, format_row};
use crate::commands::ScoreResult;
use crate::core::to_emoji;
use crate::game::GuessEngine;
use colored::Colorize;
use std::io::{self, Write};

/// Print the result of scoring a single guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        result.guess.text().to_uppercase().bright_yellow().bold(),
        result.secret.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    let tiles: String = result
        .guess
        .text()
        .chars()
        .zip(result.feedback)
        .map(|(c, status)| colored_letter(c, status).to_string())
        .collect();
    println!("\n  {tiles}  {}\n", to_emoji(&result.feedback));
}

/// Write the submitted rows and, if enabled, the keyboard
///
/// # Errors
///
/// Returns any error from the writer.
pub fn write_board<W: Write>(out: &mut W, engine: &GuessEngine) -> io::Result<()> {
    writeln!(out)?;
    for row in engine.grid().rows().iter().filter(|row| row[0].status().is_final()) {
        writeln!(out, "  {}", format_row(row))?;
    }

    if let Some(hints) = engine.key_hints() {
        writeln!(out)?;
        for line in format_keyboard(hints) {
            writeln!(out, "    {line}")?;
        }
    }
    writeln!(out)
}
