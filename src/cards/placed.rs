//! Placed cards - a story card plus the location the player chose.
//!
//! A `PlacedCard` only exists while the card is on the board. Returning
//! it to the bank discards the location via `into_card`.

use serde::{Deserialize, Serialize};

use super::definition::{Release, StoryCard};
use crate::core::{ActivityId, CardId};

/// A card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedCard {
    /// The catalog card.
    #[serde(flatten)]
    pub card: StoryCard,

    /// Column the player dropped the card in.
    pub placed_activity: ActivityId,

    /// Row the player dropped the card in.
    pub placed_release: Release,
}

impl PlacedCard {
    /// Put a card at a location.
    #[must_use]
    pub fn new(card: StoryCard, activity: ActivityId, release: Release) -> Self {
        Self {
            card,
            placed_activity: activity,
            placed_release: release,
        }
    }

    /// The card's id.
    #[must_use]
    pub fn id(&self) -> &CardId {
        &self.card.id
    }

    /// Whether the current location matches the card's answer.
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.card.is_correct_at(&self.placed_activity, self.placed_release)
    }

    /// Move the card without touching anything else.
    pub fn relocate(&mut self, activity: ActivityId, release: Release) {
        self.placed_activity = activity;
        self.placed_release = release;
    }

    /// Strip the location, yielding the plain catalog card.
    #[must_use]
    pub fn into_card(self) -> StoryCard {
        self.card
    }
}
