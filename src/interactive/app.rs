//! TUI application state and logic

use crate::config::Theme;
use crate::core::to_emoji;
use crate::game::{EventResponse, GuessEngine, InputEvent, MAX_ATTEMPTS, RoundOutcome};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub engine: GuessEngine<'a>,
    pub theme: Theme,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

/// What a key press asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Input(InputEvent),
    Quit,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Results of finished rounds in this session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub best_streak: usize,
    /// Wins by number of guesses; index 0 is unused
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
}

impl Statistics {
    pub fn record(&mut self, outcome: RoundOutcome, attempts: usize) {
        match outcome {
            RoundOutcome::Won => {
                self.total_games += 1;
                self.games_won += 1;
                self.current_streak += 1;
                self.best_streak = self.best_streak.max(self.current_streak);
                if let Some(slot) = self.guess_distribution.get_mut(attempts) {
                    *slot += 1;
                }
            }
            RoundOutcome::Lost => {
                self.total_games += 1;
                self.current_streak = 0;
            }
            RoundOutcome::InProgress => {}
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

/// Translate a key press into an app action
///
/// Letters type, Backspace erases, Enter submits, Esc starts a new round.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char(c) if c.is_ascii_alphabetic() => {
            Some(Action::Input(InputEvent::Letter(c.to_ascii_lowercase())))
        }
        KeyCode::Backspace => Some(Action::Input(InputEvent::Backspace)),
        KeyCode::Enter => Some(Action::Input(InputEvent::Submit)),
        KeyCode::Esc => Some(Action::Input(InputEvent::Reset)),
        _ => None,
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(engine: GuessEngine<'a>, theme: Theme) -> Self {
        Self {
            engine,
            theme,
            messages: vec![Message {
                text: "Guess the five-letter word. Enter submits, Esc starts over.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Input(event) => self.handle_input(event),
        }
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        match self.engine.handle(event) {
            EventResponse::Ignored | EventResponse::Edited => {}
            EventResponse::Rejected(err) => self.add_message(&err.to_string(), MessageStyle::Error),
            EventResponse::Reset => self.add_message("New round started!", MessageStyle::Info),
            EventResponse::Submitted(submission) => {
                let attempts = submission.row + 1;
                self.stats.record(submission.outcome, attempts);

                match submission.outcome {
                    RoundOutcome::Won => {
                        let celebration = match attempts {
                            1 => "HOLE IN ONE! Extraordinary!",
                            2 => "MAGNIFICENT! Two guesses!",
                            3 => "SPLENDID! Three guesses!",
                            4 => "GREAT JOB! Four guesses!",
                            5 => "NICE WORK! Five guesses!",
                            _ => "PHEW! Got it in six!",
                        };
                        self.add_message(celebration, MessageStyle::Success);
                        self.add_message("Press Esc for a new round.", MessageStyle::Info);
                    }
                    RoundOutcome::Lost => {
                        let reveal = format!(
                            "Out of guesses! The word was {}.",
                            self.engine.secret().text().to_uppercase()
                        );
                        self.add_message(&reveal, MessageStyle::Error);
                        self.add_message("Press Esc for a new round.", MessageStyle::Info);
                    }
                    RoundOutcome::InProgress => {
                        let line = format!(
                            "{} {}",
                            submission.guess.text().to_uppercase(),
                            to_emoji(&submission.feedback)
                        );
                        self.add_message(&line, MessageStyle::Info);
                    }
                }
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "TUI exited with error");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if let Some(action) = map_key(key) {
                app.apply(action);
            }
        }

        if app.should_quit {
            break;
        }
    }

    tracing::info!(
        games = app.stats.total_games,
        won = app.stats.games_won,
        "Session ended"
    );
    Ok(())
}
