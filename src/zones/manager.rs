//! Card locations for the active level: the bank and the board.
//!
//! `CardZones` is the only place cards move between zones, and every move
//! is a single remove-then-insert, so a card id is always in exactly one
//! zone. Both zones keep insertion order: the bank in dealt order with
//! returned cards appended, the board in placement order.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{PlacedCard, Release, StoryCard};
use crate::core::{ActivityId, CardId, GameRng};

/// Bank and board contents.
///
/// Backed by `im` vectors so session snapshots clone in O(1).
///
/// ## Usage
///
/// ```
/// use story_map_game::cards::{CardKind, Release, StoryCard};
/// use story_map_game::core::{ActivityId, CardId, GameRng};
/// use story_map_game::zones::CardZones;
///
/// let deck = vec![
///     StoryCard::new("a", "first", CardKind::Story, 10),
///     StoryCard::new("b", "second", CardKind::Story, 10),
/// ];
/// let mut zones = CardZones::deal(deck, &mut GameRng::new(1));
///
/// zones.place(&CardId::new("a"), ActivityId::new("act1"), Release::Mvp);
/// assert!(zones.placed(&CardId::new("a")).is_some());
/// assert_eq!(zones.bank_len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardZones {
    unplaced: Vector<StoryCard>,
    placed: Vector<PlacedCard>,
}

impl CardZones {
    /// Create empty zones.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shuffle a deck into the bank, leaving the board empty.
    #[must_use]
    pub fn deal(mut deck: Vec<StoryCard>, rng: &mut GameRng) -> Self {
        rng.shuffle(&mut deck);
        Self {
            unplaced: deck.into_iter().collect(),
            placed: Vector::new(),
        }
    }

    /// Move a card from the bank to the board.
    ///
    /// Returns the new placement, or `None` if the card is not in the bank.
    pub fn place(&mut self, id: &CardId, activity: ActivityId, release: Release) -> Option<&PlacedCard> {
        let index = self.bank_index(id)?;
        let card = self.unplaced.remove(index);
        self.placed.push_back(PlacedCard::new(card, activity, release));
        self.placed.back()
    }

    /// Change the location of a card already on the board.
    ///
    /// Returns `false` if the card is not on the board.
    pub fn relocate(&mut self, id: &CardId, activity: ActivityId, release: Release) -> bool {
        let Some(index) = self.board_index(id) else {
            return false;
        };
        match self.placed.get_mut(index) {
            Some(placed) => {
                placed.relocate(activity, release);
                true
            }
            None => false,
        }
    }

    /// Move a card from the board back to the end of the bank.
    ///
    /// The placement is discarded. Returns the plain card now in the bank,
    /// or `None` if the card is not on the board.
    pub fn unplace(&mut self, id: &CardId) -> Option<&StoryCard> {
        let index = self.board_index(id)?;
        let card = self.placed.remove(index).into_card();
        self.unplaced.push_back(card);
        self.unplaced.back()
    }

    /// Cards in the bank, in order.
    #[must_use]
    pub fn bank(&self) -> &Vector<StoryCard> {
        &self.unplaced
    }

    /// Cards on the board, in placement order.
    #[must_use]
    pub fn board(&self) -> &Vector<PlacedCard> {
        &self.placed
    }

    /// Look up a card on the board.
    #[must_use]
    pub fn placed(&self, id: &CardId) -> Option<&PlacedCard> {
        self.placed.iter().find(|p| p.id() == id)
    }

    #[must_use]
    pub fn bank_len(&self) -> usize {
        self.unplaced.len()
    }

    #[must_use]
    pub fn board_len(&self) -> usize {
        self.placed.len()
    }

    /// Whether every card has left the bank.
    #[must_use]
    pub fn is_bank_empty(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// Get total number of cards tracked.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.unplaced.len() + self.placed.len()
    }

    fn bank_index(&self, id: &CardId) -> Option<usize> {
        self.unplaced.iter().position(|c| &c.id == id)
    }

    fn board_index(&self, id: &CardId) -> Option<usize> {
        self.placed.iter().position(|p| p.id() == id)
    }
}
