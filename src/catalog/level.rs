//! Level records: activities, deck, explanation and tips.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::StoryCard;
use crate::core::{ActivityId, LevelId};

/// A board column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    pub name: String,
    /// Column position, display only.
    pub order: u32,
}

impl Activity {
    #[must_use]
    pub fn new(id: impl Into<ActivityId>, name: impl Into<String>, order: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            order,
        }
    }
}

/// Level difficulty tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Activity lists are short; most levels fit inline.
pub type Activities = SmallVec<[Activity; 6]>;

/// One level of the catalog.
///
/// ## Example
///
/// ```
/// use story_map_game::catalog::{Activity, Difficulty, Level};
/// use story_map_game::cards::{CardKind, Release, StoryCard};
/// use story_map_game::core::{ActivityId, LevelId};
///
/// let level = Level::new(LevelId::new(1), "Intro", Difficulty::Easy)
///     .with_activity(Activity::new("act1", "Sign up", 1))
///     .with_card(StoryCard::new("card1", "Register", CardKind::Story, 10)
///         .with_answer("act1", Release::Mvp))
///     .with_tip("Start with the happy path");
///
/// assert_eq!(level.activity(&ActivityId::new("act1")).unwrap().name, "Sign up");
/// assert_eq!(level.cards.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    /// 1-based position in the catalog.
    pub id: LevelId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub project_name: String,
    pub difficulty: Difficulty,
    pub activities: Activities,
    /// The full deck for this level.
    pub cards: Vec<StoryCard>,
    /// Shown when the level is passed.
    #[serde(default)]
    pub explanation: String,
    /// Hint texts, handed out cyclically.
    pub tips: Vec<String>,
}

impl Level {
    /// Create an empty level.
    #[must_use]
    pub fn new(id: LevelId, name: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            project_name: String::new(),
            difficulty,
            activities: SmallVec::new(),
            cards: Vec::new(),
            explanation: String::new(),
            tips: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_project(mut self, project_name: impl Into<String>) -> Self {
        self.project_name = project_name.into();
        self
    }

    #[must_use]
    pub fn with_activity(mut self, activity: Activity) -> Self {
        self.activities.push(activity);
        self
    }

    #[must_use]
    pub fn with_card(mut self, card: StoryCard) -> Self {
        self.cards.push(card);
        self
    }

    #[must_use]
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = explanation.into();
        self
    }

    #[must_use]
    pub fn with_tip(mut self, tip: impl Into<String>) -> Self {
        self.tips.push(tip.into());
        self
    }

    /// Look up an activity by id.
    #[must_use]
    pub fn activity(&self, id: &ActivityId) -> Option<&Activity> {
        self.activities.iter().find(|a| &a.id == id)
    }

    /// Activities sorted by their column position.
    #[must_use]
    pub fn activities_in_order(&self) -> Vec<&Activity> {
        let mut ordered: Vec<_> = self.activities.iter().collect();
        ordered.sort_by_key(|a| a.order);
        ordered
    }

    /// The tip handed out after `hints_used` earlier hints, cycling.
    #[must_use]
    pub fn tip_for(&self, hints_used: u32) -> Option<&str> {
        if self.tips.is_empty() {
            return None;
        }
        let index = hints_used as usize % self.tips.len();
        Some(self.tips[index].as_str())
    }
}
