//! Card templates - static card data.
//!
//! `CardTemplate` holds the immutable properties of a card kind: its cost,
//! category, quiz mode and level-1 numbers. "Slash costs 1 and deals 6" is
//! part of the template; the 8 damage a leveled-up Slash deals lives on the
//! `CardInstance`.

use serde::{Deserialize, Serialize};

use super::stats::CardStats;
use crate::effects::effect::CardEffect;

/// Unique identifier for a card template.
///
/// This identifies the kind of card (e.g. "Slash"), not a copy in a deck.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Card category. Skill cards are exhausted after use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardCategory {
    Attack,
    Defense,
    Skill,
}

/// How a card's quiz is asked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuizMode {
    /// One four-way multiple-choice question.
    #[default]
    Choice,
    /// One typed answer.
    Typed,
    /// `hits` multiple-choice questions in a row, one effect per correct answer.
    DoubleChoice,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
}

/// Static card template.
///
/// ## Example
///
/// ```
/// use quiz_battle::cards::{CardCategory, CardTemplate, QuizMode};
///
/// let strike = CardTemplate::new("double_strike", "Double Strike", CardCategory::Attack, 2)
///     .with_damage(5)
///     .with_hits(2)
///     .with_quiz_mode(QuizMode::DoubleChoice);
///
/// assert_eq!(strike.stats.damage, 5);
/// assert_eq!(strike.stats.hits, 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardTemplate {
    /// Assigned by the registry on registration.
    pub id: CardId,

    /// Stable content key (e.g. "slash").
    pub key: String,

    /// Display name.
    pub name: String,

    pub category: CardCategory,

    /// Energy paid when the card is consumed.
    pub cost: i64,

    /// Level-1 numbers.
    pub stats: CardStats,

    pub quiz_mode: QuizMode,

    pub rarity: Rarity,
}

impl CardTemplate {
    /// Create a template with no numbers and a single-choice quiz.
    pub fn new(key: impl Into<String>, name: impl Into<String>, category: CardCategory, cost: i64) -> Self {
        Self {
            id: CardId::default(),
            key: key.into(),
            name: name.into(),
            category,
            cost,
            stats: CardStats::new(),
            quiz_mode: QuizMode::default(),
            rarity: Rarity::default(),
        }
    }

    #[must_use]
    pub fn with_damage(mut self, damage: i64) -> Self {
        self.stats.damage = damage;
        self
    }

    #[must_use]
    pub fn with_block(mut self, block: i64) -> Self {
        self.stats.block = block;
        self
    }

    #[must_use]
    pub fn with_heal(mut self, heal: i64) -> Self {
        self.stats.heal = heal;
        self
    }

    #[must_use]
    pub fn with_draw(mut self, draw: usize) -> Self {
        self.stats.draw = draw;
        self
    }

    #[must_use]
    pub fn with_poison(mut self, poison: i64) -> Self {
        self.stats.poison = poison;
        self
    }

    #[must_use]
    pub fn with_hits(mut self, hits: u32) -> Self {
        self.stats.hits = hits.max(1);
        self
    }

    /// Attach a special-effect descriptor.
    #[must_use]
    pub fn with_effect(mut self, effect: CardEffect) -> Self {
        self.stats.effects.push(effect);
        self
    }

    #[must_use]
    pub fn with_quiz_mode(mut self, quiz_mode: QuizMode) -> Self {
        self.quiz_mode = quiz_mode;
        self
    }

    #[must_use]
    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    /// Correct answers needed before the card is consumed.
    #[must_use]
    pub fn required_hits(&self) -> u32 {
        match self.quiz_mode {
            QuizMode::DoubleChoice => self.stats.hits.max(1),
            QuizMode::Choice | QuizMode::Typed => 1,
        }
    }

    /// Skill cards go to the exhaust pile instead of discard.
    #[must_use]
    pub fn exhausts(&self) -> bool {
        self.category == CardCategory::Skill
    }

    #[must_use]
    pub fn is_mirror(&self) -> bool {
        self.stats.effects.contains(&CardEffect::Mirror)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(5);
        assert_eq!(id.raw(), 5);
        assert_eq!(format!("{}", id), "Card(5)");
    }

    #[test]
    fn test_builder() {
        let card = CardTemplate::new("poison_blade", "Poison Blade", CardCategory::Attack, 1)
            .with_damage(3)
            .with_poison(3)
            .with_rarity(Rarity::Uncommon);

        assert_eq!(card.key, "poison_blade");
        assert_eq!(card.stats.damage, 3);
        assert_eq!(card.stats.poison, 3);
        assert_eq!(card.rarity, Rarity::Uncommon);
        assert_eq!(card.quiz_mode, QuizMode::Choice);
    }

    #[test]
    fn test_required_hits() {
        let single = CardTemplate::new("a", "A", CardCategory::Attack, 1).with_hits(3);
        assert_eq!(single.required_hits(), 1);

        let double = single.with_quiz_mode(QuizMode::DoubleChoice);
        assert_eq!(double.required_hits(), 3);
    }

    #[test]
    fn test_exhausts_skills_only() {
        assert!(CardTemplate::new("heal", "Heal", CardCategory::Skill, 1).exhausts());
        assert!(!CardTemplate::new("shield", "Shield", CardCategory::Defense, 1).exhausts());
    }

    #[test]
    fn test_serialization() {
        let card = CardTemplate::new("mirror", "Mirror", CardCategory::Attack, 1)
            .with_effect(CardEffect::Mirror);
        let json = serde_json::to_string(&card).unwrap();
        let back: CardTemplate = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
        assert!(back.is_mirror());
    }
}
