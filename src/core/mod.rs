//! Core engine types: identifiers, RNG, scoring configuration, session state.
//!
//! This module contains the building blocks every other module uses.
//! Content lives in `catalog`; rules live in `rules`.

pub mod ids;
pub mod rng;
pub mod config;
pub mod state;

pub use ids::{ActivityId, CardId, LevelId};
pub use rng::{GameRng, GameRngState};
pub use config::ScoringConfig;
pub use state::{Feedback, SessionState};
