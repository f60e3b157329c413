//! Session state: the snapshot the host renders from.
//!
//! ## Domain fields
//!
//! - Active level, level score, banked total, hints used
//! - Bank and board contents (`CardZones`)
//! - Level completion flag, derived from the bank being empty
//!
//! ## Presentation fields
//!
//! `show_hint`, `current_hint` and `feedback` only tell the host what to
//! display. They carry no invariants and the host may clear them at any time.
//!
//! Cloning is O(1): the card zones are persistent `im` vectors.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::ids::{CardId, LevelId};
use crate::cards::{PlacedCard, StoryCard};
use crate::zones::CardZones;

/// Outcome message for the most recent placement.
///
/// Only produced for incorrect placements; the placement still counts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    /// The card that was placed.
    pub card_id: CardId,
    /// Always `false` today; kept so hosts can render one toast type.
    pub is_correct: bool,
    /// Human-readable hint naming the correct location.
    pub message: String,
}

/// Complete state of one play-through.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Active level.
    pub current_level: LevelId,

    /// Points earned in the active level. Never negative.
    pub score: u32,

    /// Points banked from completed levels.
    pub total_score: u32,

    /// Hints requested in the active level.
    pub hints_used: u32,

    /// Bank and board.
    pub zones: CardZones,

    /// True exactly when the bank is empty after a level has been dealt.
    pub is_level_complete: bool,

    /// Whether the hint panel is open.
    pub show_hint: bool,

    /// Last hint handed out. Kept after the panel closes.
    pub current_hint: String,

    /// Pending placement feedback.
    pub feedback: Option<Feedback>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            current_level: LevelId::FIRST,
            score: 0,
            total_score: 0,
            hints_used: 0,
            zones: CardZones::new(),
            is_level_complete: false,
            show_hint: false,
            current_hint: String::new(),
            feedback: None,
        }
    }
}

impl SessionState {
    /// Create the state of a session that has not dealt a level yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards on the board, in placement order.
    #[must_use]
    pub fn placed_cards(&self) -> &Vector<PlacedCard> {
        self.zones.board()
    }

    /// Cards in the bank.
    #[must_use]
    pub fn unplaced_cards(&self) -> &Vector<StoryCard> {
        self.zones.bank()
    }

    /// Banked total plus the active level's score.
    #[must_use]
    pub fn running_total(&self) -> u32 {
        self.total_score.saturating_add(self.score)
    }

    /// Replace every per-level field with a freshly dealt level.
    ///
    /// Scores are left alone. The completion flag follows the dealt bank, so
    /// it is `false` for any level with cards.
    pub(crate) fn reset_level(&mut self, level: LevelId, zones: CardZones) {
        self.current_level = level;
        self.is_level_complete = zones.is_bank_empty();
        self.zones = zones;
        self.hints_used = 0;
        self.show_hint = false;
        self.current_hint.clear();
        self.feedback = None;
    }

    /// Recompute the derived completion flag.
    pub(crate) fn refresh_completion(&mut self) {
        self.is_level_complete = self.zones.is_bank_empty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardKind, Release};
    use crate::core::{ActivityId, GameRng};

    fn zones() -> CardZones {
        let deck = vec![
            StoryCard::new("a", "x", CardKind::Story, 10),
            StoryCard::new("b", "y", CardKind::Story, 10),
        ];
        CardZones::deal(deck, &mut GameRng::new(5))
    }

    #[test]
    fn test_initial_state() {
        let state = SessionState::new();
        assert_eq!(state.current_level, LevelId::FIRST);
        assert_eq!(state.score, 0);
        assert_eq!(state.total_score, 0);
        assert!(state.placed_cards().is_empty());
        assert!(state.unplaced_cards().is_empty());
        assert!(!state.is_level_complete);
        assert!(state.feedback.is_none());
    }

    #[test]
    fn test_reset_level_keeps_scores() {
        let mut state = SessionState::new();
        state.score = 40;
        state.total_score = 100;
        state.hints_used = 3;
        state.show_hint = true;
        state.current_hint = "tip".into();
        state.feedback = Some(Feedback {
            card_id: CardId::new("a"),
            is_correct: false,
            message: "nope".into(),
        });

        state.reset_level(LevelId::new(2), zones());

        assert_eq!(state.current_level, LevelId::new(2));
        assert_eq!((state.score, state.total_score), (40, 100));
        assert_eq!(state.hints_used, 0);
        assert!(!state.show_hint);
        assert!(state.current_hint.is_empty());
        assert!(state.feedback.is_none());
        assert_eq!(state.unplaced_cards().len(), 2);
    }

    #[test]
    fn test_reset_level_derives_completion_from_bank() {
        let mut state = SessionState::new();
        state.is_level_complete = true;
        state.reset_level(LevelId::FIRST, zones());
        assert!(!state.is_level_complete);

        state.reset_level(LevelId::new(2), CardZones::new());
        assert!(state.is_level_complete);
    }

    #[test]
    fn test_refresh_completion() {
        let mut state = SessionState::new();
        state.reset_level(LevelId::FIRST, zones());
        state.refresh_completion();
        assert!(!state.is_level_complete);

        for id in ["a", "b"] {
            state.zones.place(&CardId::new(id), ActivityId::new("act1"), Release::Mvp);
        }
        state.refresh_completion();
        assert!(state.is_level_complete);
    }

    #[test]
    fn test_running_total() {
        let mut state = SessionState::new();
        state.score = 25;
        state.total_score = 120;
        assert_eq!(state.running_total(), 145);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut state = SessionState::new();
        state.reset_level(LevelId::FIRST, zones());

        let json = serde_json::to_string(&state).unwrap();
        let back: SessionState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
