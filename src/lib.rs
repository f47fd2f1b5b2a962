//! Wordle Tiles
//!
//! A terminal Wordle game: six tries to find a hidden five-letter word, with
//! per-letter feedback and an optional on-screen keyboard of letter hints.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_tiles::game::{GuessEngine, InputEvent, EventResponse};
//! use wordle_tiles::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::embedded().unwrap();
//! let mut engine = GuessEngine::new(&dictionary, true);
//!
//! for c in "crane".chars() {
//!     engine.handle(InputEvent::Letter(c));
//! }
//! if let EventResponse::Submitted(submission) = engine.handle(InputEvent::Submit) {
//!     println!("{:?}", submission.feedback);
//! }
//! ```

// Core domain types
pub mod core;

// Round state machine
pub mod game;

// Word lists
pub mod wordlists;

// Config file
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
