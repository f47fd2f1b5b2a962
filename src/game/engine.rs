//! Round state machine
//!
//! The engine owns the secret, the grid and the cursor, and accepts exactly
//! four inputs: a letter, backspace, submit and reset. Input that cannot apply
//! (a full row, an empty row, a finished round) is dropped without touching state.

use super::grid::{Cursor, Grid, MAX_ATTEMPTS};
use super::keyboard::KeyHints;
use super::{EventResponse, InputEvent, RoundOutcome, SubmitError, Submission};
use crate::core::{KeyStatus, WORD_LENGTH, Word, is_perfect, score};
use crate::wordlists::Dictionary;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Drives one round at a time against a dictionary
pub struct GuessEngine<'a> {
    dictionary: &'a Dictionary,
    rng: StdRng,
    secret: Word,
    grid: Grid,
    cursor: Cursor,
    outcome: RoundOutcome,
    key_hints: Option<KeyHints>,
}

impl<'a> GuessEngine<'a> {
    /// Start a round with an OS-seeded random source
    ///
    /// `keyboard_hints` enables per-letter hint tracking for an on-screen keyboard.
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, keyboard_hints: bool) -> Self {
        Self::with_rng(dictionary, keyboard_hints, StdRng::from_os_rng())
    }

    /// Start a round with a caller-supplied random source
    ///
    /// # Examples
    /// ```
    /// use rand::{SeedableRng, rngs::StdRng};
    /// use wordle_tiles::game::{GuessEngine, RoundOutcome};
    /// use wordle_tiles::wordlists::Dictionary;
    ///
    /// let dict = Dictionary::embedded().unwrap();
    /// let engine = GuessEngine::with_rng(&dict, true, StdRng::seed_from_u64(1));
    /// assert_eq!(engine.outcome(), RoundOutcome::InProgress);
    /// assert_eq!(engine.cursor().col, 0);
    /// ```
    #[must_use]
    pub fn with_rng(dictionary: &'a Dictionary, keyboard_hints: bool, mut rng: StdRng) -> Self {
        let secret = dictionary.pick_secret(&mut rng).clone();
        tracing::debug!(secret = %secret, "Round started");

        Self {
            dictionary,
            rng,
            secret,
            grid: Grid::new(),
            cursor: Cursor::default(),
            outcome: RoundOutcome::InProgress,
            key_hints: keyboard_hints.then(KeyHints::new),
        }
    }

    /// Dispatch one input event
    pub fn handle(&mut self, event: InputEvent) -> EventResponse {
        match event {
            InputEvent::Letter(c) => {
                if self.type_letter(c) {
                    EventResponse::Edited
                } else {
                    EventResponse::Ignored
                }
            }
            InputEvent::Backspace => {
                if self.backspace() {
                    EventResponse::Edited
                } else {
                    EventResponse::Ignored
                }
            }
            InputEvent::Submit => match self.submit() {
                Ok(submission) => EventResponse::Submitted(submission),
                Err(SubmitError::RoundOver) => EventResponse::Ignored,
                Err(err) => EventResponse::Rejected(err),
            },
            InputEvent::Reset => {
                self.reset();
                EventResponse::Reset
            }
        }
    }

    /// Type a letter into the next free cell of the active row
    ///
    /// Uppercase is folded to lowercase. Returns false (and changes nothing)
    /// for non a-z input, a full row, or a finished round.
    pub fn type_letter(&mut self, c: char) -> bool {
        let letter = c.to_ascii_lowercase();
        if !letter.is_ascii_lowercase() || !self.accepts_input() || self.cursor.row_full() {
            return false;
        }

        self.grid.type_letter(self.cursor, letter);
        self.cursor.col = (self.cursor.col + 1).min(WORD_LENGTH);
        true
    }

    /// Erase the last typed letter of the active row
    ///
    /// A no-op at column 0; it never reaches back into the end of the row.
    pub fn backspace(&mut self) -> bool {
        if !self.accepts_input() || self.cursor.col == 0 {
            return false;
        }

        self.cursor.col -= 1;
        self.grid.clear_cell(self.cursor.row, self.cursor.col);
        true
    }

    /// Score the active row
    ///
    /// # Errors
    /// - `SubmitError::RoundOver` once the round is won or lost
    /// - `SubmitError::IncompleteRow` if fewer than five letters are typed
    /// - `SubmitError::IllegalWord` if the row is not in the guess list
    ///
    /// No state changes on any error.
    pub fn submit(&mut self) -> Result<Submission, SubmitError> {
        if !self.accepts_input() {
            return Err(SubmitError::RoundOver);
        }

        let row = self.cursor.row;
        let letters = self
            .grid
            .row_letters(row)
            .filter(|_| self.cursor.row_full())
            .ok_or(SubmitError::IncompleteRow {
                typed: self.cursor.col,
            })?;

        let guess = Word::from_letters(letters)
            .ok()
            .filter(|w| self.dictionary.contains(w))
            .ok_or_else(|| {
                let word: String = letters.iter().collect();
                tracing::debug!(word = %word, "Rejected guess not in dictionary");
                SubmitError::IllegalWord(word)
            })?;

        let feedback = score(&guess, &self.secret);
        self.grid.apply_feedback(row, &feedback);

        if let Some(hints) = self.key_hints.as_mut() {
            for (&letter, &status) in letters.iter().zip(&feedback) {
                hints.raise(letter, KeyStatus::from(status));
            }
        }

        if is_perfect(&feedback) {
            self.outcome = RoundOutcome::Won;
        } else if row + 1 == MAX_ATTEMPTS {
            self.outcome = RoundOutcome::Lost;
        } else {
            self.cursor.row = row + 1;
        }
        self.cursor.col = 0;

        tracing::debug!(
            guess = %guess,
            attempt = row + 1,
            outcome = ?self.outcome,
            "Guess scored"
        );
        if self.outcome != RoundOutcome::InProgress {
            tracing::info!(outcome = ?self.outcome, attempts = row + 1, "Round finished");
        }

        Ok(Submission {
            row,
            guess,
            feedback,
            outcome: self.outcome,
        })
    }

    /// Throw away the current round and start a fresh one
    ///
    /// Always allowed. The new secret may repeat the old one.
    pub fn reset(&mut self) {
        self.secret = self.dictionary.pick_secret(&mut self.rng).clone();
        self.grid = Grid::new();
        self.cursor = Cursor::default();
        self.outcome = RoundOutcome::InProgress;
        if let Some(hints) = self.key_hints.as_mut() {
            *hints = KeyHints::new();
        }
        tracing::debug!(secret = %self.secret, "Round started");
    }

    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub const fn outcome(&self) -> RoundOutcome {
        self.outcome
    }

    /// Per-letter hints, or `None` when the keyboard feature is off
    #[must_use]
    pub const fn key_hints(&self) -> Option<&KeyHints> {
        self.key_hints.as_ref()
    }

    /// The current secret, for revealing after a loss
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Number of rows submitted this round
    #[must_use]
    pub const fn attempts_used(&self) -> usize {
        match self.outcome {
            RoundOutcome::InProgress => self.cursor.row,
            RoundOutcome::Won | RoundOutcome::Lost => self.cursor.row + 1,
        }
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    const fn accepts_input(&self) -> bool {
        !self.outcome.is_over()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CellStatus::{self, Absent, Correct, Empty, Present, Typed};
    use crate::wordlists::loader::words_from_slice;

    const GUESSES: &[&str] = &[
        "sheep", "speed", "robot", "willy", "crane", "slate", "audio", "pious", "lucky",
    ];

    fn dictionary(secret: &str) -> Dictionary {
        Dictionary::new(
            words_from_slice(GUESSES).into_iter().collect(),
            words_from_slice(&[secret]),
        )
        .unwrap()
    }

    fn engine(dict: &Dictionary) -> GuessEngine<'_> {
        GuessEngine::with_rng(dict, true, StdRng::seed_from_u64(42))
    }

    fn type_word(engine: &mut GuessEngine<'_>, word: &str) {
        for c in word.chars() {
            engine.type_letter(c);
        }
    }

    fn statuses(engine: &GuessEngine<'_>, row: usize) -> Vec<CellStatus> {
        engine.grid().row(row).iter().map(|c| c.status()).collect()
    }

    #[test]
    fn typing_fills_row_and_stops_at_five() {
        let dict = dictionary("sheep");
        let mut engine = engine(&dict);

        type_word(&mut engine, "speed");
        assert_eq!(engine.cursor(), Cursor { row: 0, col: 5 });
        assert!(!engine.type_letter('x'));
        assert_eq!(engine.cursor().col, 5);
        assert_eq!(statuses(&engine, 0), [Typed; 5]);
        assert_eq!(engine.grid().cell(0, 4).letter(), Some('d'));
    }

    #[test]
    fn uppercase_is_folded_and_symbols_ignored() {
        let dict = dictionary("sheep");
        let mut engine = engine(&dict);

        assert!(engine.type_letter('S'));
        assert!(!engine.type_letter('1'));
        assert!(!engine.type_letter(' '));
        assert_eq!(engine.grid().cell(0, 0).letter(), Some('s'));
        assert_eq!(engine.cursor().col, 1);
    }

    #[test]
    fn backspace_clears_previous_cell() {
        let dict = dictionary("sheep");
        let mut engine = engine(&dict);

        type_word(&mut engine, "rob");
        assert!(engine.backspace());
        assert_eq!(engine.cursor().col, 2);
        assert_eq!(engine.grid().cell(0, 2).letter(), None);
        assert_eq!(engine.grid().cell(0, 2).status(), Empty);
        assert_eq!(engine.grid().cell(0, 1).letter(), Some('o'));
    }

    #[test]
    fn backspace_at_column_zero_is_noop() {
        let dict = dictionary("sheep");
        let mut engine = engine(&dict);

        type_word(&mut engine, "speed");
        engine.submit().unwrap();
        let before = engine.grid().clone();

        assert!(!engine.backspace());
        assert_eq!(engine.grid(), &before);
        assert_eq!(engine.cursor(), Cursor { row: 1, col: 0 });
    }

    #[test]
    fn submit_incomplete_row_is_rejected() {
        let dict = dictionary("sheep");
        let mut engine = engine(&dict);

        type_word(&mut engine, "spee");
        assert_eq!(
            engine.submit().unwrap_err(),
            SubmitError::IncompleteRow { typed: 4 }
        );
        assert_eq!(engine.cursor(), Cursor { row: 0, col: 4 });
        assert_eq!(engine.outcome(), RoundOutcome::InProgress);
    }

    #[test]
    fn submit_illegal_word_changes_nothing() {
        let dict = dictionary("sheep");
        let mut engine = engine(&dict);

        type_word(&mut engine, "zzzzz");
        let grid_before = engine.grid().clone();
        let hints_before = engine.key_hints().cloned();

        assert_eq!(
            engine.submit().unwrap_err(),
            SubmitError::IllegalWord("zzzzz".to_string())
        );
        assert_eq!(engine.grid(), &grid_before);
        assert_eq!(engine.key_hints().cloned(), hints_before);
        assert_eq!(engine.cursor(), Cursor { row: 0, col: 5 });
        assert_eq!(engine.outcome(), RoundOutcome::InProgress);
    }

    #[test]
    fn submit_scores_row_and_advances() {
        let dict = dictionary("sheep");
        let mut engine = engine(&dict);

        type_word(&mut engine, "speed");
        let submission = engine.submit().unwrap();

        assert_eq!(submission.row, 0);
        assert_eq!(submission.guess.text(), "speed");
        assert_eq!(
            submission.feedback,
            [Correct, Present, Correct, Correct, Absent]
        );
        assert_eq!(submission.outcome, RoundOutcome::InProgress);
        assert_eq!(statuses(&engine, 0), submission.feedback);
        assert_eq!(engine.cursor(), Cursor { row: 1, col: 0 });
        assert_eq!(engine.attempts_used(), 1);
    }

    #[test]
    fn exact_match_wins_and_locks_round() {
        let dict = dictionary("robot");
        let mut engine = engine(&dict);

        type_word(&mut engine, "willy");
        assert_eq!(engine.submit().unwrap().feedback, [Absent; 5]);
        type_word(&mut engine, "robot");
        let submission = engine.submit().unwrap();

        assert_eq!(submission.feedback, [Correct; 5]);
        assert_eq!(engine.outcome(), RoundOutcome::Won);
        assert_eq!(engine.attempts_used(), 2);

        assert!(!engine.type_letter('a'));
        assert!(!engine.backspace());
        assert_eq!(engine.submit().unwrap_err(), SubmitError::RoundOver);
        assert_eq!(engine.handle(InputEvent::Submit), EventResponse::Ignored);
    }

    #[test]
    fn six_misses_lose() {
        let dict = dictionary("sheep");
        let mut engine = engine(&dict);

        for attempt in 0..MAX_ATTEMPTS {
            assert_eq!(engine.outcome(), RoundOutcome::InProgress);
            type_word(&mut engine, "robot");
            let submission = engine.submit().unwrap();
            assert_eq!(submission.row, attempt);
        }

        assert_eq!(engine.outcome(), RoundOutcome::Lost);
        assert_eq!(engine.cursor(), Cursor { row: MAX_ATTEMPTS - 1, col: 0 });
        assert_eq!(engine.attempts_used(), MAX_ATTEMPTS);
        assert!(engine.grid().rows().iter().all(|row| row.iter().all(|c| c.status().is_final())));
        assert!(!engine.type_letter('s'));
    }

    #[test]
    fn win_on_last_row_is_a_win() {
        let dict = dictionary("sheep");
        let mut engine = engine(&dict);

        for _ in 0..MAX_ATTEMPTS - 1 {
            type_word(&mut engine, "crane");
            engine.submit().unwrap();
        }
        type_word(&mut engine, "sheep");
        assert_eq!(engine.submit().unwrap().outcome, RoundOutcome::Won);
    }

    #[test]
    fn key_hints_never_decrease() {
        let dict = dictionary("sheep");
        let mut engine = engine(&dict);

        type_word(&mut engine, "speed");
        engine.submit().unwrap();
        let hints = engine.key_hints().unwrap();
        assert_eq!(hints.get('s'), KeyStatus::Correct);
        assert_eq!(hints.get('p'), KeyStatus::Present);
        assert_eq!(hints.get('d'), KeyStatus::Absent);

        // `s` lands off-position in "pious": still Correct on the keyboard.
        type_word(&mut engine, "pious");
        engine.submit().unwrap();
        let hints = engine.key_hints().unwrap();
        assert_eq!(hints.get('s'), KeyStatus::Correct);
        assert_eq!(hints.get('p'), KeyStatus::Present);
        assert_eq!(hints.get('i'), KeyStatus::Absent);
        assert_eq!(hints.get('z'), KeyStatus::Untried);
    }

    #[test]
    fn key_hints_disabled() {
        let dict = dictionary("sheep");
        let mut engine = GuessEngine::with_rng(&dict, false, StdRng::seed_from_u64(1));

        type_word(&mut engine, "speed");
        engine.submit().unwrap();
        assert!(engine.key_hints().is_none());
    }

    #[test]
    fn reset_restores_fresh_round() {
        let dict = dictionary("robot");
        let mut engine = engine(&dict);

        type_word(&mut engine, "robot");
        engine.submit().unwrap();
        assert_eq!(engine.outcome(), RoundOutcome::Won);

        assert_eq!(engine.handle(InputEvent::Reset), EventResponse::Reset);
        assert_eq!(engine.outcome(), RoundOutcome::InProgress);
        assert_eq!(engine.cursor(), Cursor::default());
        assert_eq!(engine.grid(), &Grid::new());
        assert_eq!(engine.secret().text(), "robot");
        assert!(engine.key_hints().unwrap().iter().all(|(_, s)| s == KeyStatus::Untried));
    }

    #[test]
    fn handle_maps_events() {
        let dict = dictionary("sheep");
        let mut engine = engine(&dict);

        assert_eq!(engine.handle(InputEvent::Backspace), EventResponse::Ignored);
        assert_eq!(engine.handle(InputEvent::Letter('s')), EventResponse::Edited);
        assert_eq!(engine.handle(InputEvent::Backspace), EventResponse::Edited);
        assert_eq!(
            engine.handle(InputEvent::Submit),
            EventResponse::Rejected(SubmitError::IncompleteRow { typed: 0 })
        );

        type_word(&mut engine, "sheep");
        assert!(matches!(
            engine.handle(InputEvent::Submit),
            EventResponse::Submitted(Submission {
                outcome: RoundOutcome::Won,
                ..
            })
        ));
    }
}
