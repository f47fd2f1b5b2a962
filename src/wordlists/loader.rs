//! Word list loading utilities
//!
//! Word list files hold one word per line. Surrounding whitespace is stripped
//! and blank lines are skipped; anything else that is not a 5-letter word is
//! rejected with the offending line number.

use super::DictionaryError;
use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;

/// Load an ordered word list from a file
///
/// # Errors
///
/// Returns `DictionaryError::Io` if the file cannot be read and
/// `DictionaryError::Malformed` if a line is not a valid word.
///
/// # Examples
/// ```no_run
/// use wordle_tiles::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_word_list(&content, &path.display().to_string())
}

/// Load the answer list: the ordered pool secrets are drawn from
///
/// # Errors
///
/// See [`load_from_file`].
pub fn load_answer_list<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, DictionaryError> {
    load_from_file(path)
}

/// Load the guess list as a set for membership lookups
///
/// # Errors
///
/// See [`load_from_file`].
pub fn load_guess_list<P: AsRef<Path>>(path: P) -> Result<FxHashSet<Word>, DictionaryError> {
    Ok(load_from_file(path)?.into_iter().collect())
}

/// Parse newline-delimited words
///
/// `origin` names the source in error messages.
///
/// # Errors
///
/// Returns `DictionaryError::Malformed` for the first invalid line.
pub fn parse_word_list(content: &str, origin: &str) -> Result<Vec<Word>, DictionaryError> {
    content
        .lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let trimmed = line.trim();
            (!trimmed.is_empty()).then_some((i + 1, trimmed))
        })
        .map(|(line, text)| {
            Word::new(text).map_err(|source| DictionaryError::Malformed {
                origin: origin.to_string(),
                line,
                text: text.to_string(),
                source,
            })
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_tiles::wordlists::loader::words_from_slice;
/// use wordle_tiles::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
