//! Zone system for card locations.
//!
//! A level has exactly two zones: the bank (cards waiting to be placed)
//! and the board (cards on the activity × release grid).
//!
//! ## Key Types
//!
//! - `CardZones`: Card location tracking and movement

pub mod manager;

pub use manager::CardZones;
