//! Game state: grid, keyboard hints and the round state machine

mod engine;
mod grid;
mod keyboard;

pub use engine::GuessEngine;
pub use grid::{Cell, Cursor, Grid, MAX_ATTEMPTS, Row};
pub use keyboard::{KeyHints, QWERTY_ROWS};

use crate::core::{RowFeedback, Word};
use thiserror::Error;

/// Symbolic input produced by a front end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Letter(char),
    Backspace,
    Submit,
    Reset,
}

/// State of the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundOutcome {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl RoundOutcome {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Why a submit was refused. The round is unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Not enough letters ({typed} of 5)")]
    IncompleteRow { typed: usize },
    #[error("'{0}' is not in the word list")]
    IllegalWord(String),
    #[error("The round is over")]
    RoundOver,
}

/// Result of a scored row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Index of the row that was scored
    pub row: usize,
    pub guess: Word,
    pub feedback: RowFeedback,
    /// Outcome after this row
    pub outcome: RoundOutcome,
}

/// What [`GuessEngine::handle`] did with an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResponse {
    /// Event did not apply and nothing changed
    Ignored,
    /// A letter was typed or erased
    Edited,
    Submitted(Submission),
    Rejected(SubmitError),
    Reset,
}
