//! Interactive TUI front end

mod app;
mod rendering;

pub use app::{Action, App, Message, MessageStyle, Statistics, map_key, run_tui};
