//! Game rules and limits.
//!
//! A `GameConfig` can be built in code or read from YAML. Every field has a default, so a YAML
//! document only needs the fields it changes.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::error::ConfigurationError;

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    Invalid(#[from] ConfigurationError),
}

#[derive(Debug, Clone, Eq, PartialEq, Deserialize, Serialize)]
pub struct GameConfig {
    /// How many times the dice may be rolled in one turn, the first roll included.
    #[serde(default = "default_rolls_per_turn")]
    pub rolls_per_turn: u8,
    /// Fewest players a game accepts. Never lower than two.
    #[serde(default = "default_min_players")]
    pub min_players: usize,
    /// Seed for the dice. `None` draws one from the operating system.
    #[serde(default)]
    pub seed: Option<u64>,
}

pub const ABSOLUTE_MIN_PLAYERS: usize = 2;

fn default_rolls_per_turn() -> u8 {
    3
}

fn default_min_players() -> usize {
    ABSOLUTE_MIN_PLAYERS
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rolls_per_turn: default_rolls_per_turn(),
            min_players: default_min_players(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Load configuration from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.rolls_per_turn == 0 {
            return Err(ConfigurationError::InvalidRollLimit(self.rolls_per_turn));
        }
        Ok(())
    }

    pub fn effective_min_players(&self) -> usize {
        self.min_players.max(ABSOLUTE_MIN_PLAYERS)
    }
}
