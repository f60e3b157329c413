//! Story card definitions - static card data from the catalog.
//!
//! `StoryCard` holds the immutable properties of a card, including the
//! location it *should* be placed at. Where the player actually put it
//! is tracked separately by `PlacedCard`.

use serde::{Deserialize, Serialize};

use crate::core::{ActivityId, CardId};

/// Categorical tag shown on a card. Not a structural role: the engine
/// scores every kind the same way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    Activity,
    Task,
    Story,
}

impl CardKind {
    /// Display category for the card badge.
    #[must_use]
    pub const fn category(self) -> &'static str {
        match self {
            CardKind::Activity => "Epic",
            CardKind::Task => "Task",
            CardKind::Story => "User Story",
        }
    }
}

/// Release bucket (board row). Ordered: MVP ships first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Release {
    Mvp,
    Release1,
    Release2,
}

impl Release {
    /// All releases in board order.
    pub const ALL: [Release; 3] = [Release::Mvp, Release::Release1, Release::Release2];

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Release::Mvp => "MVP",
            Release::Release1 => "Release 1",
            Release::Release2 => "Release 2",
        }
    }
}

impl std::fmt::Display for Release {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A story card template.
///
/// ## Example
///
/// ```
/// use story_map_game::cards::{CardKind, Release, StoryCard};
/// use story_map_game::core::ActivityId;
///
/// let card = StoryCard::new("card1", "Create a task", CardKind::Story, 10)
///     .with_answer("act1", Release::Mvp);
///
/// let act1 = ActivityId::new("act1");
/// assert!(card.is_correct_at(&act1, Release::Mvp));
/// assert!(!card.is_correct_at(&act1, Release::Release1));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryCard {
    /// Unique within the level.
    pub id: CardId,

    /// Display text.
    pub content: String,

    /// Card category.
    #[serde(rename = "type")]
    pub kind: CardKind,

    /// Activity the card belongs under. `None` when no single answer exists.
    #[serde(default)]
    pub correct_activity: Option<ActivityId>,

    /// Release the card belongs in.
    #[serde(default)]
    pub correct_release: Option<Release>,

    /// Reward for a correct placement.
    pub points: u32,
}

impl StoryCard {
    /// Create a card with no correct location.
    #[must_use]
    pub fn new(
        id: impl Into<CardId>,
        content: impl Into<String>,
        kind: CardKind,
        points: u32,
    ) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            kind,
            correct_activity: None,
            correct_release: None,
            points,
        }
    }

    /// Set the correct location (builder pattern).
    #[must_use]
    pub fn with_answer(mut self, activity: impl Into<ActivityId>, release: Release) -> Self {
        self.correct_activity = Some(activity.into());
        self.correct_release = Some(release);
        self
    }

    /// Whether placing this card at `(activity, release)` is correct.
    ///
    /// Both coordinates must match. A card without an answer is never correct.
    #[must_use]
    pub fn is_correct_at(&self, activity: &ActivityId, release: Release) -> bool {
        self.correct_activity.as_ref() == Some(activity) && self.correct_release == Some(release)
    }
}
