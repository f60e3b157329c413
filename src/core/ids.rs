//! Identifier newtypes.
//!
//! ## ID Scopes
//!
//! - `LevelId`: 1-based ordinal, defines the catalog sequence
//! - `CardId`: unique within a single level
//! - `ActivityId`: unique within a single level
//!
//! Card and activity ids are reused across levels (`card1`, `act1`, ...),
//! so they are only meaningful together with the active level.
//!
//! ## Usage
//!
//! ```
//! use story_map_game::core::{ActivityId, CardId, LevelId};
//!
//! let level = LevelId::FIRST;
//! assert_eq!(level.next(), LevelId::new(2));
//!
//! let card = CardId::new("card1");
//! assert_eq!(card.as_str(), "card1");
//! assert_eq!(ActivityId::from("act1"), ActivityId::new("act1"));
//! ```

use serde::{Deserialize, Serialize};

/// Level identifier. Also the level's position in the catalog (1-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelId(pub u32);

impl LevelId {
    /// The level every play-through starts on.
    pub const FIRST: LevelId = LevelId(1);

    /// Create a new level ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The level that follows this one in catalog order.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl std::fmt::Display for LevelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Level({})", self.0)
    }
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the raw ID value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Story card identifier, unique within a level.
    CardId
);

string_id!(
    /// Activity (board column) identifier, unique within a level.
    ActivityId
);
