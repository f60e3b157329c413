//! Board validation and level grading.
//!
//! `ValidationReport` is a pure read of the board. `LevelGrade` turns a
//! report into the pass/fail verdict and star rating shown at level end.

use serde::{Deserialize, Serialize};

use crate::cards::PlacedCard;
use crate::core::ScoringConfig;

/// One board card and whether it sits where it belongs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardVerdict {
    pub card: PlacedCard,
    pub is_correct: bool,
}

/// Correctness of every card currently on the board.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Cards at their correct location.
    pub correct: usize,
    /// Cards on the board.
    pub total: usize,
    /// Per-card verdicts, in placement order.
    pub details: Vec<CardVerdict>,
}

impl ValidationReport {
    /// Evaluate board cards in the order given.
    #[must_use]
    pub fn evaluate<'a>(board: impl IntoIterator<Item = &'a PlacedCard>) -> Self {
        let details: Vec<_> = board
            .into_iter()
            .map(|card| CardVerdict {
                is_correct: card.is_correct(),
                card: card.clone(),
            })
            .collect();

        Self {
            correct: details.iter().filter(|d| d.is_correct).count(),
            total: details.len(),
            details,
        }
    }

    /// Share of correct cards, rounded half up. Zero for an empty board.
    #[must_use]
    pub fn accuracy_percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let correct = self.correct as u64;
        let total = self.total as u64;
        ((correct * 200 + total) / (total * 2)) as u32
    }
}

/// End-of-level verdict.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelGrade {
    /// Accuracy, 0..=100.
    pub percentage: u32,
    /// 0 to 3.
    pub stars: u8,
    pub passed: bool,
    pub perfect: bool,
}

impl LevelGrade {
    /// Grade a validation report.
    #[must_use]
    pub fn from_report(report: &ValidationReport, config: &ScoringConfig) -> Self {
        let percentage = report.accuracy_percent();
        let stars = if percentage == 100 {
            3
        } else if percentage >= config.two_star_percent {
            2
        } else if percentage >= config.pass_threshold_percent {
            1
        } else {
            0
        };

        Self {
            percentage,
            stars,
            passed: percentage >= config.pass_threshold_percent,
            perfect: percentage == 100,
        }
    }
}
