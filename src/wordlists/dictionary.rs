//! Guess and answer dictionary

use super::embedded::{ALLOWED, ANSWERS};
use super::loader::{load_answer_list, load_guess_list, words_from_slice};
use super::DictionaryError;
use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::path::Path;

/// Legal guesses plus the pool of possible secrets
///
/// Construction guarantees the answer list is non-empty and that every answer
/// is also a legal guess, so the winning word can always be submitted.
#[derive(Debug, Clone)]
pub struct Dictionary {
    guesses: FxHashSet<Word>,
    answers: Vec<Word>,
}

impl Dictionary {
    /// Build a dictionary from already-parsed lists
    ///
    /// # Errors
    /// - `DictionaryError::EmptyAnswers` if `answers` is empty
    /// - `DictionaryError::AnswerNotGuessable` for the first answer missing from `guesses`
    ///
    /// # Examples
    /// ```
    /// use wordle_tiles::core::Word;
    /// use wordle_tiles::wordlists::Dictionary;
    ///
    /// let words = vec![Word::new("crane").unwrap(), Word::new("slate").unwrap()];
    /// let dict = Dictionary::new(words.iter().cloned().collect(), words).unwrap();
    /// assert!(dict.is_legal_guess("SLATE"));
    /// assert!(!dict.is_legal_guess("robot"));
    /// ```
    pub fn new(guesses: FxHashSet<Word>, answers: Vec<Word>) -> Result<Self, DictionaryError> {
        if answers.is_empty() {
            return Err(DictionaryError::EmptyAnswers);
        }

        if let Some(missing) = answers.iter().find(|a| !guesses.contains(*a)) {
            return Err(DictionaryError::AnswerNotGuessable(missing.text().to_string()));
        }

        Ok(Self { guesses, answers })
    }

    /// Dictionary backed by the lists compiled into the binary
    ///
    /// # Errors
    /// Only fails if the embedded lists violate the subset invariant.
    pub fn embedded() -> Result<Self, DictionaryError> {
        Self::new(
            words_from_slice(ALLOWED).into_iter().collect(),
            words_from_slice(ANSWERS),
        )
    }

    /// Load either list from a file, falling back to the embedded list when no
    /// path is given
    ///
    /// # Errors
    /// Propagates load failures and the invariants checked by [`Dictionary::new`].
    pub fn load(guesses: Option<&Path>, answers: Option<&Path>) -> Result<Self, DictionaryError> {
        let guess_set = match guesses {
            Some(path) => load_guess_list(path)?,
            None => words_from_slice(ALLOWED).into_iter().collect(),
        };
        let answer_list = match answers {
            Some(path) => load_answer_list(path)?,
            None => words_from_slice(ANSWERS),
        };

        let dictionary = Self::new(guess_set, answer_list)?;
        tracing::info!(
            guesses = dictionary.guess_count(),
            answers = dictionary.answers.len(),
            "Loaded word lists"
        );
        Ok(dictionary)
    }

    /// True iff `word`, lowercased, is in the guess list
    #[must_use]
    pub fn is_legal_guess(&self, word: &str) -> bool {
        Word::new(word).is_ok_and(|w| self.contains(&w))
    }

    /// Membership check for an already-validated word
    ///
    /// This is the only guess-list lookup; [`Dictionary::is_legal_guess`] and
    /// the engine's submit both go through it.
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.guesses.contains(word)
    }

    /// Draw one answer uniformly at random
    ///
    /// Every call is an independent draw; the same word may come up twice in a row.
    ///
    /// # Panics
    /// Will not panic - the answer list is checked to be non-empty on construction.
    pub fn pick_secret<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        self.answers
            .choose(rng)
            .expect("answer list is never empty")
    }

    /// The ordered answer list
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Number of legal guesses
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.guesses.len()
    }
}
