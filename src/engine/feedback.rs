//! Feedback text for incorrect placements.

use crate::cards::StoryCard;
use crate::catalog::Level;
use crate::core::Feedback;

/// Placeholder when a card has no (known) correct activity.
const NO_ACTIVITY: &str = "no single activity";

/// Build the feedback for a card placed somewhere other than its answer.
///
/// Names the correct activity by its display name and the correct release
/// by its label.
#[must_use]
pub fn misplaced(card: &StoryCard, level: Option<&Level>) -> Feedback {
    let activity = card
        .correct_activity
        .as_ref()
        .and_then(|id| level.and_then(|l| l.activity(id)))
        .map_or(NO_ACTIVITY, |a| a.name.as_str());

    let message = match card.correct_release {
        Some(release) => format!(
            "This story fits better in \"{}\" during {}.",
            activity,
            release.label()
        ),
        None => format!("This story fits better in \"{}\".", activity),
    };

    Feedback {
        card_id: card.id.clone(),
        is_correct: false,
        message,
    }
}
