//! Core domain types for the game
//!
//! Pure value types and the scoring rule, with no I/O and no randomness.

mod scoring;
mod status;
mod word;

pub use scoring::{RowFeedback, is_perfect, score, to_emoji};
pub use status::{CellStatus, KeyStatus};
pub use word::{WORD_LENGTH, Word, WordError};
