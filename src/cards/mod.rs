//! Card system: catalog templates and board placements.
//!
//! ## Key Types
//!
//! - `StoryCard`: Immutable card template with its correct location
//! - `PlacedCard`: A card on the board, with the location the player chose
//! - `CardKind`: Display category (epic, task, user story)
//! - `Release`: Board row (MVP, Release 1, Release 2)

pub mod definition;
pub mod placed;

pub use definition::{CardKind, Release, StoryCard};
pub use placed::PlacedCard;
