//! Game engine: level lifecycle, card placement, hints and scoring.
//!
//! `GameSession` owns all mutable state for one play-through and reads
//! level content through `LevelSource`. It never renders and never tracks
//! pointers; hosts resolve drops into `(card, activity, release)` first.

pub mod feedback;
pub mod session;

pub use session::GameSession;
