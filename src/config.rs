//! Configuration file support
//!
//! Settings are read from `config.toml` in the platform config directory
//! (`~/.config/mastermind/config.toml` on Linux). Every key is optional.
//!
//! ```toml
//! log_file = "/tmp/mastermind.log"
//!
//! [game]
//! problem_size = 6
//! players = 2
//! attempts = 10
//! ```

use crate::core::ProblemSize;
use crate::game::{DEFAULT_ATTEMPTS, PlayerCount, Settings};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Most guess rows the board has room for
pub const MAX_ATTEMPTS: u8 = 12;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// File to write logs to; logging is off when unset
    pub log_file: Option<PathBuf>,
    pub game: GameConfig,
}

/// Defaults for the setup menu
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub problem_size: u8,
    pub players: u8,
    pub attempts: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            problem_size: 4,
            players: 1,
            attempts: DEFAULT_ATTEMPTS,
        }
    }
}

impl Config {
    /// Returns the path to the default configuration file.
    ///
    /// Falls back to the current directory if the platform has no config
    /// directory.
    #[must_use]
    pub fn default_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("mastermind").join("config.toml")
    }

    /// Load configuration from `path`, or from the default location
    ///
    /// A missing default file yields `Config::default()`. A missing file that
    /// was asked for explicitly is an error.
    ///
    /// # Errors
    /// Returns an error if reading, parsing, or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let path = Self::default_path();
                if !path.exists() {
                    return Ok(Self::default());
                }
                path
            }
        };

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
            path: path.clone(),
            source: e,
        })?;

        Self::from_toml(&content).map_err(|e| match e {
            ConfigError::ParseError { source, .. } => ConfigError::ParseError { path, source },
            other => other,
        })
    }

    /// Parse and validate configuration text
    ///
    /// # Errors
    /// Returns an error if the text is not valid TOML or fails validation.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: PathBuf::new(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - `problem_size` is 4, 6 or 8
    /// - `players` is 1 or 2
    /// - `attempts` is between 1 and `MAX_ATTEMPTS`
    ///
    /// # Errors
    /// Returns `ConfigError::ValidationError` describing the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.game.settings().map(|_| ())
    }
}

impl GameConfig {
    /// Convert to menu settings
    ///
    /// # Errors
    /// Returns `ConfigError::ValidationError` if any value is out of range.
    pub fn settings(&self) -> Result<Settings, ConfigError> {
        let size = ProblemSize::from_pegs(usize::from(self.problem_size)).ok_or_else(|| {
            ConfigError::ValidationError {
                message: format!("problem_size must be 4, 6 or 8, got {}", self.problem_size),
            }
        })?;

        let players =
            PlayerCount::from_count(self.players).ok_or_else(|| ConfigError::ValidationError {
                message: format!("players must be 1 or 2, got {}", self.players),
            })?;

        if !(1..=MAX_ATTEMPTS).contains(&self.attempts) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "attempts must be between 1 and {MAX_ATTEMPTS}, got {}",
                    self.attempts
                ),
            });
        }

        Ok(Settings {
            size,
            players,
            attempts: self.attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());

        let settings = config.game.settings().unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn full_file_parses() {
        let config = Config::from_toml(
            r#"
            log_file = "/tmp/mastermind.log"

            [game]
            problem_size = 8
            players = 2
            attempts = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/mastermind.log")));
        let settings = config.game.settings().unwrap();
        assert_eq!(settings.size, ProblemSize::Eight);
        assert_eq!(settings.players, PlayerCount::Two);
        assert_eq!(settings.attempts, 10);
    }

    #[test]
    fn partial_game_section_keeps_other_defaults() {
        let config = Config::from_toml("[game]\nproblem_size = 6\n").unwrap();
        assert_eq!(config.game.problem_size, 6);
        assert_eq!(config.game.players, 1);
        assert_eq!(config.game.attempts, DEFAULT_ATTEMPTS);
    }

    #[test]
    fn rejects_unsupported_problem_size() {
        let err = Config::from_toml("[game]\nproblem_size = 5\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
        assert!(err.to_string().contains("problem_size"));
    }

    #[test]
    fn rejects_bad_player_count() {
        let err = Config::from_toml("[game]\nplayers = 3\n").unwrap_err();
        assert!(err.to_string().contains("players"));
    }

    #[test]
    fn rejects_attempts_out_of_range() {
        assert!(Config::from_toml("[game]\nattempts = 0\n").is_err());
        assert!(Config::from_toml("[game]\nattempts = 13\n").is_err());
        assert!(Config::from_toml("[game]\nattempts = 12\n").is_ok());
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = Config::from_toml("[game]\ncolours = 9\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = Config::load(Some(Path::new("/nonexistent/mastermind.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }
}
