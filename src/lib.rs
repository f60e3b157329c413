//! # story-map-game
//!
//! Level and scoring engine for a user story mapping training game.
//!
//! Players drag story cards from a bank onto an activity × release board and
//! are scored on how well the placement matches the intended story map.
//!
//! ## Design Principles
//!
//! 1. **Owned Session**: One `GameSession` owns all state for a play-through.
//!    No globals; hosts hold the session and render from `state()`.
//!
//! 2. **Total Operations**: Operations never fail. Unknown ids leave the
//!    state untouched and the call returns `false`.
//!
//! 3. **Content Is Data**: Levels come from a `LevelSource`. The built-in
//!    catalog and TOML catalogs are validated once, up front.
//!
//! ## Architecture
//!
//! - **Deterministic Shuffles**: A seeded ChaCha8 RNG deals each level with
//!   an unbiased Fisher-Yates shuffle.
//!
//! - **Persistent Data Structures**: Bank and board are `im` vectors, so a
//!   state snapshot clones in O(1).
//!
//! ## Modules
//!
//! - `core`: Identifiers, RNG, scoring configuration, session state
//! - `cards`: Story cards and board placements
//! - `catalog`: Levels, activities, built-in content, TOML loading
//! - `zones`: Bank and board contents
//! - `rules`: Scoring, bonus, validation and grading
//! - `engine`: The game session
//! - `error`: Catalog and configuration load errors

pub mod core;
pub mod cards;
pub mod catalog;
pub mod zones;
pub mod rules;
pub mod engine;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    ActivityId, CardId, LevelId,
    GameRng, GameRngState,
    ScoringConfig,
    Feedback, SessionState,
};

pub use crate::cards::{CardKind, PlacedCard, Release, StoryCard};

pub use crate::catalog::{
    Activity, Difficulty, Level, LevelCatalog, LevelSource,
    card_category, release_label,
};

pub use crate::zones::CardZones;

pub use crate::rules::{CardVerdict, LevelGrade, ValidationReport};

pub use crate::engine::GameSession;

pub use crate::error::{CatalogError, ConfigError};
