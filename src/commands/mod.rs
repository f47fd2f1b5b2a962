//! Command implementations

pub mod score;
pub mod simple;

pub use score::{ScoreError, ScoreResult, score_word};
pub use simple::{SessionSummary, play_lines, run_simple};
