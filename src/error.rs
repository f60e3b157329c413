//! Errors for the fallible construction paths.
//!
//! Session operations never fail; they no-op on unknown identifiers.
//! Only loading a catalog or a scoring config can be rejected.

use thiserror::Error;

use crate::core::{ActivityId, CardId, LevelId};

/// A level catalog that the engine cannot play.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog contains no levels")]
    Empty,
    #[error("level ids must run 1..=n in order (expected {expected}, found {found})")]
    NonSequentialLevel { expected: LevelId, found: LevelId },
    #[error("{level} lists card '{card}' more than once")]
    DuplicateCard { level: LevelId, card: CardId },
    #[error("{level} lists activity '{activity}' more than once")]
    DuplicateActivity { level: LevelId, activity: ActivityId },
    #[error("{level}: card '{card}' expects unknown activity '{activity}'")]
    UnknownActivity {
        level: LevelId,
        card: CardId,
        activity: ActivityId,
    },
    #[error("{level} has no tips")]
    NoTips { level: LevelId },
    #[error("{level} has no cards")]
    EmptyDeck { level: LevelId },
    #[error("failed to parse catalog: {0}")]
    Toml(#[from] toml::de::Error),
}

/// A scoring config that failed to load.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse scoring config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("{field} must be a percentage in 0..=100 (got {value})")]
    InvalidPercent { field: &'static str, value: u32 },
    #[error("two_star_percent ({two_star}) is below pass_threshold_percent ({pass})")]
    ThresholdOrder { pass: u32, two_star: u32 },
}
