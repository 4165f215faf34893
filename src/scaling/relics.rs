//! Relics: run-long passive bonuses, at most one per kind.

use serde::{Deserialize, Serialize};

use crate::core::InventoryError;

/// What a relic modifies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelicKind {
    /// Flat damage on every attack.
    AttackBonus,
    /// Flat block on every block-granting card.
    BlockBonus,
    /// Extra card experience per correct answer.
    XpBonus,
    /// Combo multiplier percent points per tier.
    ComboBonus,
    /// Extra cards on the opening draw.
    FirstDrawBonus,
    /// Extra maximum energy.
    EnergyBonus,
    /// Wrong choices eliminated on every multiple-choice question.
    Hint,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relic {
    pub key: String,
    pub name: String,
    pub kind: RelicKind,
    pub value: i64,
}

impl Relic {
    pub fn new(key: impl Into<String>, name: impl Into<String>, kind: RelicKind, value: i64) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            kind,
            value,
        }
    }
}

/// The built-in relics.
#[must_use]
pub fn standard_relics() -> Vec<Relic> {
    vec![
        Relic::new("sharp_blade", "Sharp Blade", RelicKind::AttackBonus, 2),
        Relic::new("thick_armor", "Thick Armor", RelicKind::BlockBonus, 2),
        Relic::new("word_scroll", "Word Scroll", RelicKind::XpBonus, 1),
        Relic::new("combo_ring", "Combo Ring", RelicKind::ComboBonus, 10),
        Relic::new("speed_boots", "Speed Boots", RelicKind::FirstDrawBonus, 1),
        Relic::new("magic_book", "Magic Book", RelicKind::EnergyBonus, 1),
        Relic::new("wisdom_gem", "Wisdom Gem", RelicKind::Hint, 1),
    ]
}

/// Look up a built-in relic by key.
pub fn standard_relic(key: &str) -> Result<Relic, InventoryError> {
    standard_relics()
        .into_iter()
        .find(|r| r.key == key)
        .ok_or_else(|| InventoryError::UnknownRelic(key.to_string()))
}

/// Held relics.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelicSet {
    relics: Vec<Relic>,
}

impl RelicSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire a relic. A second relic of a held kind is refused.
    pub fn add(&mut self, relic: Relic) -> Result<(), InventoryError> {
        if self.has(relic.kind) {
            return Err(InventoryError::DuplicateRelic(relic.kind));
        }
        tracing::debug!(relic = %relic.key, "relic acquired");
        self.relics.push(relic);
        Ok(())
    }

    #[must_use]
    pub fn has(&self, kind: RelicKind) -> bool {
        self.relics.iter().any(|r| r.kind == kind)
    }

    /// Sum of the values of held relics of `kind`.
    #[must_use]
    pub fn bonus(&self, kind: RelicKind) -> i64 {
        self.relics.iter().filter(|r| r.kind == kind).map(|r| r.value).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Relic> {
        self.relics.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.relics.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.relics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bonus_by_kind() {
        let mut set = RelicSet::new();
        set.add(standard_relic("sharp_blade").unwrap()).unwrap();
        set.add(standard_relic("combo_ring").unwrap()).unwrap();

        assert_eq!(set.bonus(RelicKind::AttackBonus), 2);
        assert_eq!(set.bonus(RelicKind::ComboBonus), 10);
        assert_eq!(set.bonus(RelicKind::BlockBonus), 0);
    }

    #[test]
    fn test_duplicate_kind_rejected() {
        let mut set = RelicSet::new();
        set.add(standard_relic("sharp_blade").unwrap()).unwrap();
        let other = Relic::new("rusty_blade", "Rusty Blade", RelicKind::AttackBonus, 1);

        assert_eq!(set.add(other), Err(InventoryError::DuplicateRelic(RelicKind::AttackBonus)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_unknown_relic() {
        assert_eq!(
            standard_relic("lucky_sock"),
            Err(InventoryError::UnknownRelic("lucky_sock".into()))
        );
    }
}
