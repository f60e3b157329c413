//! Point awards for placements, hints and level completion.

use crate::cards::StoryCard;
use crate::core::ScoringConfig;

/// Points earned by placing `card`.
///
/// A correct placement earns the card's full value; an incorrect one earns
/// `partial_credit_percent` of it, rounded down.
#[must_use]
pub fn placement_award(card: &StoryCard, correct: bool, config: &ScoringConfig) -> u32 {
    if correct {
        card.points
    } else {
        partial_credit(card.points, config.partial_credit_percent)
    }
}

/// `points * percent / 100`, rounded down, in integer arithmetic.
///
/// Saturates at `u32::MAX` for percentages above 100.
#[must_use]
pub fn partial_credit(points: u32, percent: u32) -> u32 {
    let credit = u64::from(points) * u64::from(percent) / 100;
    u32::try_from(credit).unwrap_or(u32::MAX)
}

/// Bonus for finishing a level after `hints_used` hints.
///
/// Full bonus with no hints, then a linear decay that bottoms out at zero.
#[must_use]
pub fn completion_bonus(hints_used: u32, config: &ScoringConfig) -> u32 {
    if hints_used == 0 {
        return config.bonus_base;
    }
    config
        .bonus_base
        .saturating_sub(hints_used.saturating_mul(config.bonus_decay_per_hint))
}

/// Subtract a penalty, flooring at zero.
#[must_use]
pub fn apply_penalty(score: u32, penalty: u32) -> u32 {
    score.saturating_sub(penalty)
}
