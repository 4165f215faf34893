//! Card instances - one copy of a card in a run deck.
//!
//! An instance starts as a copy of its template's level-1 stats and then
//! diverges: level-ups and snowball growth replace the current stats with a
//! new version. Earlier versions are kept in a persistent vector, so cloning
//! an instance (every battle clones the deck) stays cheap and the template
//! is never touched.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::definition::{CardId, CardTemplate};
use super::stats::CardStats;
use crate::core::InstanceId;

/// Highest card level.
pub const MAX_LEVEL: u8 = 3;

/// Experience needed per level step; the threshold at level `n` is `n * 3`.
pub const EXPERIENCE_STEP: u32 = 3;

/// A card in a deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique ID for this copy.
    pub id: InstanceId,

    /// The template this copy was made from.
    pub template: CardId,

    /// 1..=3.
    pub level: u8,

    /// Experience accumulated toward the next level.
    pub experience: u32,

    /// Experience required for the next level.
    pub experience_to_next: u32,

    current: CardStats,

    /// Superseded stat versions, oldest first.
    history: Vector<CardStats>,
}

impl CardInstance {
    /// Copy a template into a fresh level-1 instance.
    #[must_use]
    pub fn new(id: InstanceId, template: &CardTemplate) -> Self {
        Self {
            id,
            template: template.id,
            level: 1,
            experience: 0,
            experience_to_next: EXPERIENCE_STEP,
            current: template.stats.clone(),
            history: Vector::new(),
        }
    }

    /// Current numbers.
    #[must_use]
    pub fn stats(&self) -> &CardStats {
        &self.current
    }

    /// Number of stat versions this instance has gone through (starts at 1).
    #[must_use]
    pub fn version(&self) -> usize {
        self.history.len() + 1
    }

    /// All superseded versions, oldest first.
    #[must_use]
    pub fn previous_versions(&self) -> &Vector<CardStats> {
        &self.history
    }

    #[must_use]
    pub fn is_max_level(&self) -> bool {
        self.level >= MAX_LEVEL
    }

    /// Award experience for a correct answer.
    ///
    /// Crossing the threshold levels the card up once, resets experience to
    /// zero and raises the threshold to `level * 3`. Returns whether the card
    /// leveled. No-op at max level.
    pub fn gain_experience(&mut self, amount: u32) -> bool {
        if self.is_max_level() || amount == 0 {
            return false;
        }

        self.experience += amount;
        if self.experience < self.experience_to_next {
            return false;
        }

        self.level += 1;
        self.experience = 0;
        self.experience_to_next = u32::from(self.level) * EXPERIENCE_STEP;
        let next = self.current.leveled();
        self.push_version(next);
        tracing::debug!(card = %self.id, level = self.level, "card leveled up");
        true
    }

    /// Permanently raise this copy's base damage.
    pub fn grow_damage(&mut self, amount: i64) {
        if amount == 0 {
            return;
        }
        let mut next = self.current.clone();
        next.damage = (next.damage + amount).max(0);
        self.push_version(next);
    }

    fn push_version(&mut self, next: CardStats) {
        let previous = std::mem::replace(&mut self.current, next);
        self.history.push_back(previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardCategory;

    fn slash() -> CardTemplate {
        let mut t = CardTemplate::new("slash", "Slash", CardCategory::Attack, 1).with_damage(6);
        t.id = CardId::new(1);
        t
    }

    #[test]
    fn test_new_instance() {
        let card = CardInstance::new(InstanceId(10), &slash());
        assert_eq!(card.template, CardId::new(1));
        assert_eq!(card.level, 1);
        assert_eq!(card.experience, 0);
        assert_eq!(card.experience_to_next, 3);
        assert_eq!(card.stats().damage, 6);
        assert_eq!(card.version(), 1);
    }

    #[test]
    fn test_level_up_at_threshold() {
        let mut card = CardInstance::new(InstanceId(1), &slash());
        assert!(!card.gain_experience(1));
        assert!(!card.gain_experience(1));
        assert!(card.gain_experience(1));

        assert_eq!(card.level, 2);
        assert_eq!(card.experience, 0);
        assert_eq!(card.experience_to_next, 6);
        assert_eq!(card.stats().damage, 8);
        assert_eq!(card.previous_versions()[0].damage, 6);
    }

    #[test]
    fn test_capped_at_max_level() {
        let mut card = CardInstance::new(InstanceId(1), &slash());
        assert!(card.gain_experience(3));
        assert!(card.gain_experience(6));
        assert_eq!(card.level, 3);

        let before = card.stats().clone();
        assert!(!card.gain_experience(100));
        assert_eq!(card.level, 3);
        assert_eq!(card.stats(), &before);
    }

    #[test]
    fn test_one_level_per_award() {
        let mut card = CardInstance::new(InstanceId(1), &slash());
        assert!(card.gain_experience(20));
        assert_eq!(card.level, 2);
        assert_eq!(card.experience, 0);
    }

    #[test]
    fn test_grow_damage_keeps_template() {
        let template = slash();
        let mut card = CardInstance::new(InstanceId(1), &template);
        card.grow_damage(2);
        card.grow_damage(2);

        assert_eq!(card.stats().damage, 10);
        assert_eq!(card.version(), 3);
        assert_eq!(template.stats.damage, 6);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut card = CardInstance::new(InstanceId(1), &slash());
        let snapshot = card.clone();
        card.grow_damage(4);
        assert_eq!(snapshot.stats().damage, 6);
        assert_eq!(card.stats().damage, 10);
    }
}
