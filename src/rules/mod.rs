//! Game rules: placement scoring, bonuses, validation and grading.
//!
//! Everything here is a pure function of its inputs. The engine decides
//! when to apply a rule; this module decides what the rule yields.

pub mod scoring;
pub mod validation;

pub use scoring::{apply_penalty, completion_bonus, partial_credit, placement_award};
pub use validation::{CardVerdict, LevelGrade, ValidationReport};
