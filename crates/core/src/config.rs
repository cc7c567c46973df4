//! Config module - tunable rules for a run
//!
//! Defaults reproduce the standard ruleset. Every field may be omitted from
//! JSON input; missing fields keep their default.
//!
//! ```
//! use blockfall_core::{GameConfig, Randomizer};
//!
//! let config = GameConfig::from_json_str(r#"{ "randomizer": "seven_bag", "seed": 7 }"#).unwrap();
//! assert_eq!(config.randomizer, Randomizer::SevenBag);
//! assert_eq!(config.base_drop_ms, 1000);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_STEP_MS, LINES_PER_LEVEL, LINE_SCORES,
};

/// Piece generation scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Randomizer {
    /// Independent uniform choice among the seven kinds
    #[default]
    Uniform,
    /// Shuffled bag of all seven kinds, refilled when empty
    SevenBag,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Gravity interval at level 1
    pub base_drop_ms: u32,
    /// Interval reduction per level above 1
    pub drop_step_ms: u32,
    /// Fastest gravity interval
    pub min_drop_ms: u32,
    pub lines_per_level: u32,
    /// Points per lock, indexed by rows cleared, multiplied by level
    pub line_scores: [u32; 5],
    pub randomizer: Randomizer,
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            base_drop_ms: BASE_DROP_MS,
            drop_step_ms: DROP_STEP_MS,
            min_drop_ms: DROP_INTERVAL_MIN_MS,
            lines_per_level: LINES_PER_LEVEL,
            line_scores: LINE_SCORES,
            randomizer: Randomizer::Uniform,
            seed: 1,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "config parse error: {}", e),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl GameConfig {
    /// Default rules with a specific seed
    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lines_per_level == 0 {
            return Err(ConfigError::Invalid("lines_per_level must be positive"));
        }
        if self.min_drop_ms == 0 {
            return Err(ConfigError::Invalid("min_drop_ms must be positive"));
        }
        if self.line_scores[0] != 0 {
            return Err(ConfigError::Invalid("a lock without clears must score 0"));
        }
        Ok(())
    }
}
