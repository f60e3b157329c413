//! Level catalog: the read-only content the engine plays.
//!
//! ## Key Types
//!
//! - `Level`: Activities, deck, explanation and tips for one level
//! - `Activity`: A board column
//! - `LevelSource`: Trait the engine reads levels through
//! - `LevelCatalog`: Validated, ordered level list (built-in or TOML)

pub mod builtin;
pub mod level;
pub mod registry;

pub use builtin::builtin_levels;
pub use level::{Activities, Activity, Difficulty, Level};
pub use registry::{LevelCatalog, LevelSource};

use crate::cards::{CardKind, Release};

/// Display label for a release bucket.
#[must_use]
pub const fn release_label(release: Release) -> &'static str {
    release.label()
}

/// Display category for a card type.
#[must_use]
pub const fn card_category(kind: CardKind) -> &'static str {
    kind.category()
}
