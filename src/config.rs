//! Configuration loaded from TOML files.
//!
//! Every key is optional; anything missing falls back to the defaults below.
//!
//! ```toml
//! seed = 42
//! top = 5
//!
//! [session]
//! max_attempts = 6
//! rank_on_reset = true
//!
//! [rewards]
//! win = 10.0
//! loss = -10.0
//! invalid = -2.0
//! time_cost = 0.1
//!
//! [words]
//! answers = "data/answers.txt"
//! guesses = "data/guesses.txt"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Reward signal returned by each step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rewards {
    /// Valid guess equal to the target
    pub win: f64,
    /// Last allowed valid guess missed
    pub loss: f64,
    /// Guess absent or not accepted
    pub invalid: f64,
    /// Subtracted from the information gain on every other round
    pub time_cost: f64,
}

impl Default for Rewards {
    fn default() -> Self {
        Self {
            win: 10.0,
            loss: -10.0,
            invalid: -2.0,
            time_cost: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Valid guesses allowed per episode. Invalid guesses do not count.
    pub max_attempts: usize,
    /// Rank every accepted guess on reset. This is the slowest step of an
    /// episode, so callers that do not need the opening ranking can skip it.
    pub rank_on_reset: bool,
    pub rewards: Rewards,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_attempts: 6,
            rank_on_reset: true,
            rewards: Rewards::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordPaths {
    pub answers: Option<PathBuf>,
    pub guesses: Option<PathBuf>,
}

/// Top-level configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// RNG seed for target selection; seeded from the OS when absent
    pub seed: Option<u64>,
    /// Number of ranked guesses to display
    pub top: usize,
    #[serde(rename = "session")]
    session_table: SessionTable,
    pub rewards: Rewards,
    pub words: WordPaths,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
struct SessionTable {
    max_attempts: usize,
    rank_on_reset: bool,
}

impl Default for SessionTable {
    fn default() -> Self {
        let defaults = SessionConfig::default();
        Self {
            max_attempts: defaults.max_attempts,
            rank_on_reset: defaults.rank_on_reset,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            top: 5,
            session_table: SessionTable::default(),
            rewards: Rewards::default(),
            words: WordPaths::default(),
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.session_table.max_attempts == 0 {
            return Err(ConfigError::Invalid("max_attempts must be at least 1".into()));
        }
        if self.top == 0 {
            return Err(ConfigError::Invalid("top must be at least 1".into()));
        }
        let rewards = [
            self.rewards.win,
            self.rewards.loss,
            self.rewards.invalid,
            self.rewards.time_cost,
        ];
        if rewards.iter().any(|r| !r.is_finite()) {
            return Err(ConfigError::Invalid("rewards must be finite".into()));
        }
        Ok(())
    }

    pub fn set_max_attempts(&mut self, max_attempts: usize) {
        self.session_table.max_attempts = max_attempts;
    }

    pub fn set_rank_on_reset(&mut self, rank_on_reset: bool) {
        self.session_table.rank_on_reset = rank_on_reset;
    }

    /// Settings handed to a [`Session`](crate::Session).
    pub fn session(&self) -> SessionConfig {
        SessionConfig {
            max_attempts: self.session_table.max_attempts,
            rank_on_reset: self.session_table.rank_on_reset,
            rewards: self.rewards,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.session(), SessionConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = Config::from_toml_str(
            r#"
            seed = 7

            [session]
            max_attempts = 4

            [rewards]
            invalid = -5.0
            "#,
        )
        .unwrap();

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.top, 5);

        let session = config.session();
        assert_eq!(session.max_attempts, 4);
        assert!(session.rank_on_reset);
        assert_eq!(session.rewards.invalid, -5.0);
        assert_eq!(session.rewards.win, 10.0);
        assert_eq!(session.rewards.time_cost, 0.1);
    }

    #[test]
    fn test_word_paths() {
        let config = Config::from_toml_str(
            r#"
            [words]
            answers = "answers.json"
            "#,
        )
        .unwrap();
        assert_eq!(config.words.answers, Some(PathBuf::from("answers.json")));
        assert_eq!(config.words.guesses, None);
    }

    #[test]
    fn test_rejects_zero_attempts() {
        let err = Config::from_toml_str("[session]\nmax_attempts = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_bad_toml() {
        let err = Config::from_toml_str("top = \"five\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }
}
