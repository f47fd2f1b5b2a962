//! Wordle Tiles - CLI
//!
//! Terminal Wordle game with TUI and line-based modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use wordle_tiles::{
    commands::{run_simple, score_word},
    config::GameConfig,
    game::GuessEngine,
    interactive::{App, run_tui},
    output::print_score_result,
    wordlists::Dictionary,
};

#[derive(Parser)]
#[command(
    name = "wordle_tiles",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Guess list file (one word per line); defaults to the built-in list
    #[arg(short, long, global = true, value_name = "FILE")]
    guesses: Option<PathBuf>,

    /// Answer list file (one word per line); defaults to the built-in list
    #[arg(short, long, global = true, value_name = "FILE")]
    answers: Option<PathBuf>,

    /// Config file (default: ./wordle_tiles.toml if present)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Hide the on-screen keyboard hints
    #[arg(long, global = true)]
    no_keyboard: bool,

    /// Log file (level via RUST_LOG)
    #[arg(long, global = true, value_name = "FILE", default_value = "wordle_tiles.log")]
    log_file: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Score a guess against a given secret word
    Score {
        /// The guessed word
        guess: String,

        /// The secret word to score against
        secret: String,
    },
}

fn init_logging(path: &Path) -> Result<()> {
    // TUI owns the terminal, so logs go to a file
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    let mut config = GameConfig::load(cli.config.as_deref()).context("Failed to load config")?;

    // CLI flags override the config file
    if cli.guesses.is_some() {
        config.words.guesses.clone_from(&cli.guesses);
    }
    if cli.answers.is_some() {
        config.words.answers.clone_from(&cli.answers);
    }
    if cli.no_keyboard {
        config.keyboard_hints = false;
    }

    let dictionary = Dictionary::load(
        config.words.guesses.as_deref(),
        config.words.answers.as_deref(),
    )
    .context("Failed to load word lists")?;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let engine = GuessEngine::new(&dictionary, config.keyboard_hints);
            run_tui(App::new(engine, config.theme))
        }
        Commands::Simple => {
            let mut engine = GuessEngine::new(&dictionary, config.keyboard_hints);
            let summary = run_simple(&mut engine)?;
            tracing::info!(
                won = summary.rounds_won,
                lost = summary.rounds_lost,
                "Session ended"
            );
            Ok(())
        }
        Commands::Score { guess, secret } => {
            let result = score_word(&guess, &secret, &dictionary)?;
            print_score_result(&result);
            Ok(())
        }
    }
}
