//! Simple interactive CLI mode
//!
//! Line-based play without the TUI. Each line is either a whole guess or a
//! command; guesses are fed to the engine one letter at a time, the same way
//! the TUI feeds key presses.

use crate::core::WORD_LENGTH;
use crate::game::{EventResponse, GuessEngine, InputEvent, RoundOutcome};
use crate::output::write_board;
use std::io::{self, BufRead, Write};

/// Rounds finished during a line-mode session
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub rounds_won: usize,
    pub rounds_lost: usize,
}

/// Run the simple mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple(engine: &mut GuessEngine) -> io::Result<SessionSummary> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_lines(engine, stdin.lock(), stdout.lock())
}

/// Play rounds reading lines from `input` until it ends or the player quits
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play_lines<R: BufRead, W: Write>(
    engine: &mut GuessEngine,
    input: R,
    mut out: W,
) -> io::Result<SessionSummary> {
    let mut summary = SessionSummary::default();

    writeln!(out, "Guess the five-letter word in six tries.")?;
    writeln!(out, "Commands: 'new' for a new round, 'quit' to exit\n")?;
    prompt(&mut out, engine)?;

    for line in input.lines() {
        let line = line?;
        let command = line.trim().to_lowercase();

        match command.as_str() {
            "" => {}
            "quit" | "q" | "exit" => break,
            "new" | "n" => start_new_round(engine, &mut out)?,
            "yes" | "y" if engine.outcome().is_over() => start_new_round(engine, &mut out)?,
            "no" if engine.outcome().is_over() => break,
            _ if engine.outcome().is_over() => {
                writeln!(out, "The round is over. Type 'new' or 'quit'.")?;
            }
            guess if guess.chars().count() > WORD_LENGTH => {
                writeln!(out, "Guesses are {WORD_LENGTH} letters long.")?;
            }
            guess => submit_guess(engine, guess, &mut out, &mut summary)?,
        }

        prompt(&mut out, engine)?;
    }

    writeln!(out, "\nThanks for playing!")?;
    Ok(summary)
}

fn start_new_round<W: Write>(engine: &mut GuessEngine, out: &mut W) -> io::Result<()> {
    engine.handle(InputEvent::Reset);
    writeln!(out, "\nNew round started!")
}

fn submit_guess<W: Write>(
    engine: &mut GuessEngine,
    guess: &str,
    out: &mut W,
    summary: &mut SessionSummary,
) -> io::Result<()> {
    // Start from an empty row: a rejected guess leaves its letters in place.
    while engine.handle(InputEvent::Backspace) == EventResponse::Edited {}
    for c in guess.chars() {
        engine.handle(InputEvent::Letter(c));
    }

    match engine.handle(InputEvent::Submit) {
        EventResponse::Submitted(submission) => {
            write_board(out, engine)?;
            match submission.outcome {
                RoundOutcome::Won => {
                    summary.rounds_won += 1;
                    writeln!(
                        out,
                        "Solved in {} {}!",
                        submission.row + 1,
                        if submission.row == 0 { "guess" } else { "guesses" }
                    )?;
                }
                RoundOutcome::Lost => {
                    summary.rounds_lost += 1;
                    writeln!(
                        out,
                        "Out of guesses! The word was {}.",
                        engine.secret().text().to_uppercase()
                    )?;
                }
                RoundOutcome::InProgress => {}
            }
        }
        EventResponse::Rejected(err) => writeln!(out, "{err}")?,
        EventResponse::Ignored | EventResponse::Edited | EventResponse::Reset => {}
    }
    Ok(())
}

fn prompt<W: Write>(out: &mut W, engine: &GuessEngine) -> io::Result<()> {
    if engine.outcome().is_over() {
        write!(out, "Play again? (yes/no): ")?;
    } else {
        write!(out, "Guess {}: ", engine.attempts_used() + 1)?;
    }
    out.flush()
}
