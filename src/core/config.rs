//! Scoring configuration.
//!
//! Every tunable constant the engine uses lives in `ScoringConfig`.
//! `ScoringConfig::default()` is the shipped rule set; hosts may load
//! overrides from TOML:
//!
//! ```
//! use story_map_game::core::ScoringConfig;
//!
//! let config = ScoringConfig::from_toml_str("hint_penalty = 8").unwrap();
//! assert_eq!(config.hint_penalty, 8);
//! assert_eq!(config.partial_credit_percent, 30);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Scoring rules for placements, hints and level completion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Share of a card's points awarded for an incorrect placement, in percent.
    pub partial_credit_percent: u32,

    /// Points deducted per hint (score floors at 0).
    pub hint_penalty: u32,

    /// Completion bonus when no hints were used.
    pub bonus_base: u32,

    /// Bonus lost per hint used.
    pub bonus_decay_per_hint: u32,

    /// Accuracy needed to pass a level, in percent.
    pub pass_threshold_percent: u32,

    /// Accuracy needed for two stars, in percent. Three stars needs 100.
    pub two_star_percent: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            partial_credit_percent: 30,
            hint_penalty: 5,
            bonus_base: 50,
            bonus_decay_per_hint: 10,
            pass_threshold_percent: 70,
            two_star_percent: 80,
        }
    }
}

impl ScoringConfig {
    /// Parse a config from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: ScoringConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every percentage lies in `0..=100` and that two stars
    /// never come below the pass mark.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let percents = [
            ("partial_credit_percent", self.partial_credit_percent),
            ("pass_threshold_percent", self.pass_threshold_percent),
            ("two_star_percent", self.two_star_percent),
        ];

        for (field, value) in percents {
            if value > 100 {
                return Err(ConfigError::InvalidPercent { field, value });
            }
        }

        if self.two_star_percent < self.pass_threshold_percent {
            return Err(ConfigError::ThresholdOrder {
                pass: self.pass_threshold_percent,
                two_star: self.two_star_percent,
            });
        }
        Ok(())
    }

    /// Set the partial credit share (builder pattern).
    ///
    /// Not checked here; `validate` (or `GameSession::with_config`) rejects
    /// values above 100.
    #[must_use]
    pub fn with_partial_credit_percent(mut self, percent: u32) -> Self {
        self.partial_credit_percent = percent;
        self
    }

    /// Set the per-hint penalty (builder pattern).
    #[must_use]
    pub fn with_hint_penalty(mut self, penalty: u32) -> Self {
        self.hint_penalty = penalty;
        self
    }
}
