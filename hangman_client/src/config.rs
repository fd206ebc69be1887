//! Client configuration management.
//!
//! Consolidates environment variable reads, applies CLI overrides, and
//! validates the result.

use hangman::{Catalog, CatalogError, GameSettings, SequencingMode};
use std::path::PathBuf;

/// Values taken from command-line flags. They win over the environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub tui: bool,
    pub json: bool,
    pub random: bool,
    pub seed: Option<u64>,
    pub words: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
}

/// Complete client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Run the full-screen TUI instead of plain line mode
    pub tui: bool,
    /// Print JSON snapshots in plain mode
    pub json: bool,
    pub settings: GameSettings,
    /// JSON word list replacing the built-in catalog
    pub words_path: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
}

impl ClientConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns error if a variable is present but cannot be parsed
    pub fn from_env(overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        Self::from_lookup(overrides, |key| std::env::var(key).ok())
    }

    /// Load configuration using `lookup` in place of the environment
    pub fn from_lookup<F>(overrides: ConfigOverrides, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let sequencing = if overrides.random {
            SequencingMode::Random
        } else {
            match lookup("HANGMAN_SEQUENCING") {
                Some(value) => value.parse::<SequencingMode>().map_err(|e| ConfigError::Invalid {
                    var: "HANGMAN_SEQUENCING".to_string(),
                    reason: format!("{e}"),
                })?,
                None => SequencingMode::default(),
            }
        };

        let seed = match overrides.seed {
            Some(seed) => Some(seed),
            None => lookup("HANGMAN_SEED")
                .map(|value| {
                    value.trim().parse::<u64>().map_err(|_| ConfigError::Invalid {
                        var: "HANGMAN_SEED".to_string(),
                        reason: format!("'{value}' is not an unsigned integer"),
                    })
                })
                .transpose()?,
        };

        let words_path = overrides
            .words
            .or_else(|| lookup("HANGMAN_WORDS").map(PathBuf::from));
        let log_file = overrides
            .log_file
            .or_else(|| lookup("HANGMAN_LOG_FILE").map(PathBuf::from));

        Ok(ClientConfig {
            tui: overrides.tui,
            json: overrides.json,
            settings: GameSettings::new(sequencing, seed),
            words_path,
            log_file,
        })
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tui && self.json {
            return Err(ConfigError::Invalid {
                var: "--json".to_string(),
                reason: "Cannot be combined with --tui".to_string(),
            });
        }

        if self.settings.seed.is_some() && self.settings.sequencing == SequencingMode::Sequential
        {
            return Err(ConfigError::Invalid {
                var: "HANGMAN_SEED".to_string(),
                reason: "Only applies to random sequencing (use --random)".to_string(),
            });
        }

        Ok(())
    }

    /// The configured word list, or the built-in tech words
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.words_path {
            Some(path) => Catalog::from_path(path),
            None => Ok(Catalog::tech_words()),
        }
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}
