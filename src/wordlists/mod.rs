//! Word lists and the dictionary built from them
//!
//! Embedded lists are compiled into the binary; files on disk can replace
//! either of them at startup.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{ALLOWED, ANSWERS};

use crate::core::WordError;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to build a usable dictionary. Always fatal at startup.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("Failed to read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{origin}:{line}: invalid word '{text}': {source}")]
    Malformed {
        origin: String,
        line: usize,
        text: String,
        #[source]
        source: WordError,
    },
    #[error("Answer list is empty")]
    EmptyAnswers,
    #[error("Answer '{0}' is not in the guess list")]
    AnswerNotGuessable(String),
}
