//! Score command
//!
//! Evaluates one guess against a chosen secret without playing a round.

use crate::core::{RowFeedback, Word, WordError, score};
use crate::wordlists::Dictionary;
use thiserror::Error;

/// Result of scoring a guess
#[derive(Debug)]
pub struct ScoreResult {
    pub guess: Word,
    pub secret: Word,
    pub feedback: RowFeedback,
}

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("Invalid word '{word}': {source}")]
    InvalidWord {
        word: String,
        #[source]
        source: WordError,
    },
    #[error("Word '{0}' not in word list")]
    NotInWordList(String),
}

/// Score `guess` against `secret`
///
/// # Errors
///
/// Returns an error if:
/// - Either word is not 5 ASCII letters
/// - The guess is not in the dictionary's guess list
pub fn score_word(guess: &str, secret: &str, dictionary: &Dictionary) -> Result<ScoreResult, ScoreError> {
    let parse = |word: &str| {
        Word::new(word).map_err(|source| ScoreError::InvalidWord {
            word: word.to_string(),
            source,
        })
    };
    let guess = parse(guess)?;
    let secret = parse(secret)?;

    if !dictionary.contains(&guess) {
        return Err(ScoreError::NotInWordList(guess.text().to_string()));
    }

    let feedback = score(&guess, &secret);
    tracing::debug!(guess = %guess, secret = %secret, ?feedback, "Scored word");

    Ok(ScoreResult {
        guess,
        secret,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CellStatus::{Absent, Correct, Present};

    #[test]
    fn score_valid_pair() {
        let dict = Dictionary::embedded().unwrap();
        let result = score_word("SPEED", "sheep", &dict).unwrap();

        assert_eq!(result.guess.text(), "speed");
        assert_eq!(result.secret.text(), "sheep");
        assert_eq!(result.feedback, [Correct, Present, Correct, Correct, Absent]);
    }

    #[test]
    fn score_rejects_unknown_guess() {
        let dict = Dictionary::embedded().unwrap();
        let err = score_word("zzzzz", "sheep", &dict).unwrap_err();
        assert!(matches!(err, ScoreError::NotInWordList(ref w) if w == "zzzzz"));
    }

    #[test]
    fn score_rejects_malformed_words() {
        let dict = Dictionary::embedded().unwrap();
        assert!(matches!(
            score_word("spe", "sheep", &dict),
            Err(ScoreError::InvalidWord { .. })
        ));
        assert!(matches!(
            score_word("speed", "sh33p", &dict),
            Err(ScoreError::InvalidWord { .. })
        ));
    }
}
