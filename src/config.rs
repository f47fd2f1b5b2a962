//! External configuration loader
//!
//! Reads `wordle_tiles.toml` from the working directory unless another path is
//! given. Missing keys fall back to defaults; a missing default file is not an
//! error. Once loaded the config is immutable and handed to the front ends.

use ratatui::style::Color;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// File looked up when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "wordle_tiles.toml";

// ── Public Config Struct ──

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub words: WordsConfig,
    pub keyboard_hints: bool,
    pub theme: Theme,
}

/// Optional word list overrides; `None` means the embedded list
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordsConfig {
    pub guesses: Option<PathBuf>,
    pub answers: Option<PathBuf>,
}

/// Tile and key colors used by the TUI
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub correct: Color,
    pub present: Color,
    pub absent: Color,
    pub typed: Color,
    pub empty: Color,
    pub text: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            correct: Color::Rgb(10, 143, 39),
            present: Color::Rgb(173, 161, 24),
            absent: Color::Rgb(50, 50, 50),
            typed: Color::Rgb(130, 130, 130),
            empty: Color::Rgb(50, 50, 50),
            text: Color::Rgb(220, 220, 220),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            words: WordsConfig::default(),
            keyboard_hints: true,
            theme: Theme::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Invalid color for theme.{key}: '{value}'")]
    InvalidColor { key: &'static str, value: String },
}

// ── TOML Schema (with serde defaults) ──

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    #[serde(default)]
    words: TomlWords,
    #[serde(default)]
    game: TomlGame,
    #[serde(default)]
    theme: TomlTheme,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct TomlWords {
    guesses: Option<PathBuf>,
    answers: Option<PathBuf>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct TomlGame {
    #[serde(default = "default_keyboard_hints")]
    keyboard_hints: bool,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct TomlTheme {
    correct: Option<String>,
    present: Option<String>,
    absent: Option<String>,
    typed: Option<String>,
    empty: Option<String>,
    text: Option<String>,
}

const fn default_keyboard_hints() -> bool {
    true
}

impl Default for TomlGame {
    fn default() -> Self {
        Self {
            keyboard_hints: default_keyboard_hints(),
        }
    }
}

// ── Loading ──

impl GameConfig {
    /// Load config from `path`, or from [`DEFAULT_CONFIG_FILE`] when `None`
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly named file is missing, if the file is
    /// not valid TOML for this schema, or if a theme color cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        if !explicit && !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let config = Self::from_toml(&text).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.clone(),
                source,
            },
            other => other,
        })?;

        tracing::info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Parse config from TOML text
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` or `ConfigError::InvalidColor`.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let toml_cfg: TomlConfig = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;

        let defaults = Theme::default();
        let t = &toml_cfg.theme;
        let theme = Theme {
            correct: parse_color("correct", t.correct.as_deref(), defaults.correct)?,
            present: parse_color("present", t.present.as_deref(), defaults.present)?,
            absent: parse_color("absent", t.absent.as_deref(), defaults.absent)?,
            typed: parse_color("typed", t.typed.as_deref(), defaults.typed)?,
            empty: parse_color("empty", t.empty.as_deref(), defaults.empty)?,
            text: parse_color("text", t.text.as_deref(), defaults.text)?,
        };

        Ok(Self {
            words: WordsConfig {
                guesses: toml_cfg.words.guesses,
                answers: toml_cfg.words.answers,
            },
            keyboard_hints: toml_cfg.game.keyboard_hints,
            theme,
        })
    }
}

/// Accepts names ("green", "darkgray") and hex ("#0a8f27")
fn parse_color(key: &'static str, value: Option<&str>, default: Color) -> Result<Color, ConfigError> {
    value.map_or(Ok(default), |v| {
        Color::from_str(v).map_err(|_| ConfigError::InvalidColor {
            key,
            value: v.to_string(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        assert_eq!(GameConfig::from_toml("").unwrap(), GameConfig::default());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config = GameConfig::from_toml(
            r##"
            [game]
            keyboard_hints = false

            [words]
            answers = "lists/answers.txt"

            [theme]
            correct = "green"
            present = "#ffcc00"
            "##,
        )
        .unwrap();

        assert!(!config.keyboard_hints);
        assert_eq!(config.words.answers, Some(PathBuf::from("lists/answers.txt")));
        assert_eq!(config.words.guesses, None);
        assert_eq!(config.theme.correct, Color::Green);
        assert_eq!(config.theme.present, Color::Rgb(0xff, 0xcc, 0x00));
        assert_eq!(config.theme.absent, Theme::default().absent);
    }

    #[test]
    fn bad_color_is_rejected() {
        let err = GameConfig::from_toml("[theme]\nabsent = \"not-a-color\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidColor { key: "absent", .. }));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = GameConfig::from_toml("[game]\ndifficulty = 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn missing_explicit_file_is_error() {
        let err = GameConfig::load(Some(Path::new("no/such/config.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
