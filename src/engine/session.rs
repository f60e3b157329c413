//! Game session: the single owner of a play-through's state.
//!
//! The host calls one operation per UI event (a resolved drop, a button
//! click) and re-renders from `state()` afterwards. Operations run to
//! completion and either apply fully or leave the state untouched. Unknown
//! ids are not errors: the operation returns `false` and nothing changes.
//!
//! ## Usage
//!
//! ```
//! use story_map_game::catalog::LevelCatalog;
//! use story_map_game::cards::Release;
//! use story_map_game::core::{ActivityId, CardId, LevelId};
//! use story_map_game::engine::GameSession;
//!
//! let mut session = GameSession::new(LevelCatalog::builtin(), 42);
//! session.initialize_level(LevelId::FIRST);
//!
//! // card1 of level 1 belongs in "act1" for the MVP
//! session.place_card(&CardId::new("card1"), ActivityId::new("act1"), Release::Mvp);
//! assert_eq!(session.state().score, 10);
//! assert!(session.state().feedback.is_none());
//! ```

use tracing::{debug, trace};

use super::feedback;
use crate::cards::Release;
use crate::catalog::{Level, LevelCatalog, LevelSource};
use crate::core::{ActivityId, CardId, GameRng, GameRngState, LevelId, ScoringConfig, SessionState};
use crate::error::ConfigError;
use crate::rules::{self, LevelGrade, ValidationReport};
use crate::zones::CardZones;

/// One player's run through a level catalog.
#[derive(Clone, Debug)]
pub struct GameSession<S = LevelCatalog> {
    catalog: S,
    config: ScoringConfig,
    rng: GameRng,
    state: SessionState,
}

impl<S: LevelSource> GameSession<S> {
    /// Create a session with the default scoring rules.
    ///
    /// No level is dealt yet; call `initialize_level(LevelId::FIRST)`.
    #[must_use]
    pub fn new(catalog: S, seed: u64) -> Self {
        Self::build(catalog, ScoringConfig::default(), GameRng::new(seed))
    }

    /// Create a session with custom scoring rules.
    ///
    /// Fails if `config` does not pass `ScoringConfig::validate`.
    pub fn with_config(catalog: S, config: ScoringConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(catalog, config, GameRng::new(seed)))
    }

    /// Create a session whose shuffles are seeded from OS entropy.
    #[must_use]
    pub fn from_entropy(catalog: S) -> Self {
        Self::build(catalog, ScoringConfig::default(), GameRng::from_entropy())
    }

    fn build(catalog: S, config: ScoringConfig, rng: GameRng) -> Self {
        Self {
            catalog,
            config,
            rng,
            state: SessionState::new(),
        }
    }

    // === Read access ===

    /// Current snapshot. Cheap to clone.
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &S {
        &self.catalog
    }

    /// RNG position, enough to replay the remaining shuffles.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// The active level, if the catalog has it.
    #[must_use]
    pub fn current_level(&self) -> Option<&Level> {
        self.catalog.level(self.state.current_level)
    }

    /// Whether a level follows the active one.
    #[must_use]
    pub fn has_next_level(&self) -> bool {
        (self.state.current_level.next().raw() as usize) <= self.catalog.level_count()
    }

    /// Whether the bank is empty, so validating is meaningful.
    #[must_use]
    pub fn can_validate(&self) -> bool {
        self.state.zones.is_bank_empty()
    }

    /// Cards placed and cards in the level.
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        (self.state.zones.board_len(), self.state.zones.total_cards())
    }

    /// Banked total plus the active level's score.
    #[must_use]
    pub fn running_total(&self) -> u32 {
        self.state.running_total()
    }

    // === Level lifecycle ===

    /// Deal a level: shuffle its deck into the bank and reset per-level state.
    ///
    /// Scores are kept. Returns `false` (and changes nothing) for an unknown level.
    pub fn initialize_level(&mut self, level_id: LevelId) -> bool {
        let Some(level) = self.catalog.level(level_id) else {
            debug!(level = %level_id, "initialize ignored: unknown level");
            return false;
        };

        let zones = CardZones::deal(level.cards.clone(), &mut self.rng);
        debug!(level = %level_id, cards = zones.bank_len(), "level initialized");
        self.state.reset_level(level_id, zones);
        true
    }

    /// Deal the active level again.
    pub fn retry_level(&mut self) -> bool {
        self.initialize_level(self.state.current_level)
    }

    /// Bank the level score and deal the next level.
    ///
    /// Returns `false` (and changes nothing) on the last level.
    pub fn next_level(&mut self) -> bool {
        let next = self.state.current_level.next();
        if !self.has_next_level() || !self.catalog.contains(next) {
            debug!(level = %self.state.current_level, "next level ignored: already on last level");
            return false;
        }

        self.state.total_score = self.state.total_score.saturating_add(self.state.score);
        self.state.score = 0;
        debug!(level = %next, total = self.state.total_score, "advancing level");
        self.initialize_level(next)
    }

    // === Card movement ===

    /// Move a card from the bank onto the board at `(activity, release)`.
    ///
    /// A correct placement earns the card's points and clears feedback. An
    /// incorrect one earns partial credit and sets feedback naming the right
    /// spot; the card stays where it was dropped.
    pub fn place_card(&mut self, card_id: &CardId, activity: ActivityId, release: Release) -> bool {
        let Some(placed) = self.state.zones.place(card_id, activity, release) else {
            debug!(card = %card_id, "place ignored: card not in bank");
            return false;
        };

        let correct = placed.is_correct();
        let award = rules::placement_award(&placed.card, correct, &self.config);
        let feedback = if correct {
            None
        } else {
            Some(feedback::misplaced(
                &placed.card,
                self.catalog.level(self.state.current_level),
            ))
        };

        debug!(card = %card_id, correct, award, "card placed");
        self.state.score = self.state.score.saturating_add(award);
        self.state.feedback = feedback;
        self.state.refresh_completion();
        true
    }

    /// Relocate a card already on the board. Never changes the score.
    pub fn move_card(&mut self, card_id: &CardId, activity: ActivityId, release: Release) -> bool {
        if !self.state.zones.relocate(card_id, activity, release) {
            debug!(card = %card_id, "move ignored: card not on board");
            return false;
        }
        trace!(card = %card_id, "card moved");
        true
    }

    /// Take a card off the board and put it back in the bank.
    ///
    /// Deducts the card's full point value, whatever the placement earned,
    /// flooring the score at zero.
    pub fn return_card_to_bank(&mut self, card_id: &CardId) -> bool {
        let Some(removed) = self.state.zones.unplace(card_id) else {
            debug!(card = %card_id, "return ignored: card not on board");
            return false;
        };

        let penalty = removed.points;
        self.state.score = rules::apply_penalty(self.state.score, penalty);
        self.state.refresh_completion();
        debug!(card = %card_id, penalty, score = self.state.score, "card returned to bank");
        true
    }

    // === Hints and feedback ===

    /// Show the next tip, cycling through the level's tips, for a flat penalty.
    pub fn use_hint(&mut self) -> bool {
        let Some(tip) = self
            .catalog
            .level(self.state.current_level)
            .and_then(|level| level.tip_for(self.state.hints_used))
        else {
            debug!(level = %self.state.current_level, "hint ignored: no tips available");
            return false;
        };

        self.state.current_hint = tip.to_string();
        self.state.hints_used = self.state.hints_used.saturating_add(1);
        self.state.show_hint = true;
        self.state.score = rules::apply_penalty(self.state.score, self.config.hint_penalty);
        debug!(hints_used = self.state.hints_used, score = self.state.score, "hint used");
        true
    }

    /// Close the hint panel. The last hint text is kept.
    pub fn hide_hint(&mut self) {
        self.state.show_hint = false;
    }

    /// Drop any pending feedback.
    pub fn clear_feedback(&mut self) {
        self.state.feedback = None;
    }

    // === Level results ===

    /// Correctness of every card on the board, in placement order.
    #[must_use]
    pub fn validate_level(&self) -> ValidationReport {
        ValidationReport::evaluate(self.state.zones.board())
    }

    /// Completion bonus for the hints used so far.
    #[must_use]
    pub fn calculate_bonus(&self) -> u32 {
        rules::completion_bonus(self.state.hints_used, &self.config)
    }

    /// Pass/fail verdict and stars for the current board.
    #[must_use]
    pub fn grade(&self) -> LevelGrade {
        LevelGrade::from_report(&self.validate_level(), &self.config)
    }
}
