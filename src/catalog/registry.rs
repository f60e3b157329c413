//! Level catalog: the ordered, read-only list of levels.
//!
//! The engine only reads levels through the `LevelSource` trait, so hosts
//! can supply their own content. `LevelCatalog` is the stock implementation
//! and validates its levels once, at construction.

use rustc_hash::FxHashSet;
use serde::Deserialize;

use super::level::Level;
use crate::core::LevelId;
use crate::error::CatalogError;

/// Read-only access to levels by id.
pub trait LevelSource {
    /// Get a level by id.
    fn level(&self, id: LevelId) -> Option<&Level>;

    /// Number of levels. Ids run `1..=level_count()`.
    fn level_count(&self) -> usize;

    /// Whether `id` names a level.
    fn contains(&self, id: LevelId) -> bool {
        self.level(id).is_some()
    }
}

/// Validated, ordered list of levels.
///
/// ## Example
///
/// ```
/// use story_map_game::catalog::{LevelCatalog, LevelSource};
/// use story_map_game::core::LevelId;
///
/// let catalog = LevelCatalog::builtin();
/// assert_eq!(catalog.level_count(), 3);
/// assert_eq!(catalog.level(LevelId::new(2)).unwrap().project_name, "ShopSimple");
/// assert!(catalog.level(LevelId::new(4)).is_none());
/// ```
#[derive(Clone, Debug)]
pub struct LevelCatalog {
    levels: Vec<Level>,
}

#[derive(Deserialize)]
struct CatalogFile {
    levels: Vec<Level>,
}

impl LevelCatalog {
    /// Build a catalog, rejecting levels the engine cannot play.
    pub fn new(levels: Vec<Level>) -> Result<Self, CatalogError> {
        if levels.is_empty() {
            return Err(CatalogError::Empty);
        }

        for (index, level) in levels.iter().enumerate() {
            let expected = LevelId::new(index as u32 + 1);
            if level.id != expected {
                return Err(CatalogError::NonSequentialLevel {
                    expected,
                    found: level.id,
                });
            }
            validate_level(level)?;
        }

        Ok(Self { levels })
    }

    /// Parse a catalog of `[[levels]]` tables from TOML.
    pub fn from_toml_str(source: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(source)?;
        Self::new(file.levels)
    }

    /// Iterate levels in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter()
    }
}

fn validate_level(level: &Level) -> Result<(), CatalogError> {
    let mut activities = FxHashSet::default();
    for activity in &level.activities {
        if !activities.insert(&activity.id) {
            return Err(CatalogError::DuplicateActivity {
                level: level.id,
                activity: activity.id.clone(),
            });
        }
    }

    if level.cards.is_empty() {
        return Err(CatalogError::EmptyDeck { level: level.id });
    }

    let mut cards = FxHashSet::default();
    for card in &level.cards {
        if !cards.insert(&card.id) {
            return Err(CatalogError::DuplicateCard {
                level: level.id,
                card: card.id.clone(),
            });
        }
        if let Some(activity) = &card.correct_activity {
            if !activities.contains(activity) {
                return Err(CatalogError::UnknownActivity {
                    level: level.id,
                    card: card.id.clone(),
                    activity: activity.clone(),
                });
            }
        }
    }

    if level.tips.is_empty() {
        return Err(CatalogError::NoTips { level: level.id });
    }

    Ok(())
}

impl LevelSource for LevelCatalog {
    fn level(&self, id: LevelId) -> Option<&Level> {
        let index = (id.raw() as usize).checked_sub(1)?;
        self.levels.get(index)
    }

    fn level_count(&self) -> usize {
        self.levels.len()
    }
}

impl<S: LevelSource + ?Sized> LevelSource for std::sync::Arc<S> {
    fn level(&self, id: LevelId) -> Option<&Level> {
        (**self).level(id)
    }

    fn level_count(&self) -> usize {
        (**self).level_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardKind, Release, StoryCard};
    use crate::catalog::{Activity, Difficulty};

    fn level(id: u32) -> Level {
        Level::new(LevelId::new(id), format!("Level {}", id), Difficulty::Easy)
            .with_activity(Activity::new("act1", "Only", 1))
            .with_card(StoryCard::new("card1", "x", CardKind::Story, 10).with_answer("act1", Release::Mvp))
            .with_tip("tip")
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = LevelCatalog::new(vec![level(1), level(2)]).unwrap();

        assert_eq!(catalog.level_count(), 2);
        assert_eq!(catalog.level(LevelId::new(2)).unwrap().name, "Level 2");
        assert!(catalog.level(LevelId::new(0)).is_none());
        assert!(catalog.level(LevelId::new(3)).is_none());
        assert!(catalog.contains(LevelId::new(1)));
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(LevelCatalog::new(vec![]), Err(CatalogError::Empty)));
    }

    #[test]
    fn test_non_sequential_rejected() {
        let err = LevelCatalog::new(vec![level(1), level(3)]).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::NonSequentialLevel { expected: LevelId(2), found: LevelId(3) }
        ));
    }

    #[test]
    fn test_duplicate_card_rejected() {
        let bad = level(1).with_card(StoryCard::new("card1", "dup", CardKind::Task, 5));
        let err = LevelCatalog::new(vec![bad]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateCard { .. }));
    }

    #[test]
    fn test_duplicate_activity_rejected() {
        let bad = level(1).with_activity(Activity::new("act1", "Again", 2));
        let err = LevelCatalog::new(vec![bad]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateActivity { .. }));
    }

    #[test]
    fn test_unknown_activity_rejected() {
        let bad = level(1).with_card(
            StoryCard::new("card2", "x", CardKind::Story, 10).with_answer("act7", Release::Mvp),
        );
        let err = LevelCatalog::new(vec![bad]).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownActivity { .. }));
    }

    #[test]
    fn test_card_without_answer_accepted() {
        let ok = level(1).with_card(StoryCard::new("card2", "open", CardKind::Activity, 5));
        assert!(LevelCatalog::new(vec![ok]).is_ok());
    }

    #[test]
    fn test_missing_tips_rejected() {
        let mut bad = level(1);
        bad.tips.clear();
        let err = LevelCatalog::new(vec![bad]).unwrap_err();
        assert!(matches!(err, CatalogError::NoTips { level: LevelId(1) }));
    }

    #[test]
    fn test_empty_deck_rejected() {
        let mut bad = level(2);
        bad.cards.clear();
        let err = LevelCatalog::new(vec![level(1), bad]).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyDeck { level: LevelId(2) }));
    }

    #[test]
    fn test_from_toml() {
        let source = r#"
            [[levels]]
            id = 1
            name = "Notes"
            project_name = "Jotter"
            difficulty = "easy"
            tips = ["Write first, organize later"]

            [[levels.activities]]
            id = "act1"
            name = "Write"
            order = 1

            [[levels.cards]]
            id = "card1"
            content = "As a user I want to write a note"
            type = "story"
            correct_activity = "act1"
            correct_release = "mvp"
            points = 10
        "#;

        let catalog = LevelCatalog::from_toml_str(source).unwrap();
        let level = catalog.level(LevelId::new(1)).unwrap();

        assert_eq!(level.project_name, "Jotter");
        assert_eq!(level.activities.len(), 1);
        assert_eq!(level.cards[0].correct_release, Some(Release::Mvp));
        assert_eq!(level.description, "");
    }

    #[test]
    fn test_from_toml_parse_error() {
        let err = LevelCatalog::from_toml_str("levels = 3").unwrap_err();
        assert!(matches!(err, CatalogError::Toml(_)));
    }
}
