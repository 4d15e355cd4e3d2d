//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, instrument};

/// User-configurable settings for a play session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Clear the terminal before drawing the board.
    #[serde(default = "default_clear_screen")]
    clear_screen: bool,

    /// Stop after one game instead of offering another.
    #[serde(default)]
    single_game: bool,
}

fn default_clear_screen() -> bool {
    true
}

impl GameConfig {
    /// Creates a configuration.
    pub fn new(clear_screen: bool, single_game: bool) -> Self {
        Self {
            clear_screen,
            single_game,
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Returns a copy with screen clearing turned off.
    pub fn without_clear_screen(self) -> Self {
        Self {
            clear_screen: false,
            ..self
        }
    }

    /// Returns a copy that stops after one game.
    pub fn with_single_game(self) -> Self {
        Self {
            single_game: true,
            ..self
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(default_clear_screen(), false)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
