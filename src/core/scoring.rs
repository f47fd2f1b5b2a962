//! Guess scoring
//!
//! Each column is scored on its own against the secret:
//! - Correct when the letters match at that position
//! - Present when the guessed letter occurs anywhere in the secret
//! - Absent otherwise
//!
//! This is a containment check, not the count-limited matching of the
//! newspaper game: guessing `speed` against `sheep` marks both `e`s even though
//! a count-limited scorer would stop at the secret's letter count. Repeated
//! letters can therefore earn more Present marks than the secret has copies.

use super::{CellStatus, WORD_LENGTH, Word};

/// Feedback for one submitted row
pub type RowFeedback = [CellStatus; WORD_LENGTH];

/// Score `guess` against `secret`
///
/// # Examples
/// ```
/// use wordle_tiles::core::{CellStatus, Word, score};
///
/// let secret = Word::new("sheep").unwrap();
/// let guess = Word::new("speed").unwrap();
///
/// assert_eq!(
///     score(&guess, &secret),
///     [
///         CellStatus::Correct,
///         CellStatus::Present,
///         CellStatus::Correct,
///         CellStatus::Correct,
///         CellStatus::Absent,
///     ]
/// );
/// ```
#[must_use]
pub fn score(guess: &Word, secret: &Word) -> RowFeedback {
    let mut result = [CellStatus::Absent; WORD_LENGTH];

    for (i, (&g, &s)) in guess.chars().iter().zip(secret.chars()).enumerate() {
        result[i] = if g == s {
            CellStatus::Correct
        } else if secret.has_letter(g) {
            CellStatus::Present
        } else {
            CellStatus::Absent
        };
    }

    result
}

/// True when every cell in the row is Correct
#[must_use]
pub fn is_perfect(feedback: &RowFeedback) -> bool {
    feedback.iter().all(|&s| s == CellStatus::Correct)
}

/// Convert a row to an emoji string like "🟩🟨🟩🟩⬛"
#[must_use]
pub fn to_emoji(feedback: &RowFeedback) -> String {
    feedback.iter().map(|s| s.emoji()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use CellStatus::{Absent, Correct, Present};

    fn w(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn score_all_absent() {
        assert_eq!(score(&w("willy"), &w("robot")), [Absent; 5]);
    }

    #[test]
    fn score_all_correct() {
        let word = w("crane");
        let feedback = score(&word, &word);
        assert_eq!(feedback, [Correct; 5]);
        assert!(is_perfect(&feedback));
    }

    #[test]
    fn score_sheep_speed() {
        assert_eq!(
            score(&w("speed"), &w("sheep")),
            [Correct, Present, Correct, Correct, Absent]
        );
    }

    #[test]
    fn score_repeated_letters_not_capped() {
        // One `e` in the secret, three in the guess: every `e` counts.
        assert_eq!(
            score(&w("geese"), &w("crane")),
            [Absent, Present, Present, Absent, Correct]
        );
    }

    #[test]
    fn score_is_deterministic() {
        let guess = w("robot");
        let secret = w("floor");
        let first = score(&guess, &secret);
        for _ in 0..10 {
            assert_eq!(score(&guess, &secret), first);
        }
        assert_eq!(first, [Present, Present, Absent, Correct, Absent]);
    }

    #[test]
    fn emoji_row() {
        let feedback = score(&w("speed"), &w("sheep"));
        assert_eq!(to_emoji(&feedback), "🟩🟨🟩🟩⬛");
        assert!(!is_perfect(&feedback));
    }
}
