//! Numeric card fields and their level-up growth.

use serde::{Deserialize, Serialize};

use crate::core::ceil_percent;
use crate::effects::effect::{CardEffect, LEVEL_GROWTH_PERCENT, POISON_GROWTH_PERCENT};

/// The mutable numbers of a card.
///
/// A template holds the level-1 values; every instance keeps its own copies
/// and replaces them wholesale when it levels up or snowballs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardStats {
    pub damage: i64,
    pub block: i64,
    pub heal: i64,
    pub draw: usize,
    pub poison: i64,
    /// Correct answers a double-choice activation asks for.
    pub hits: u32,
    pub effects: Vec<CardEffect>,
}

impl CardStats {
    #[must_use]
    pub fn new() -> Self {
        Self {
            hits: 1,
            ..Self::default()
        }
    }

    /// Whether a successful cast runs the damage pipeline.
    #[must_use]
    pub fn is_attack_bearing(&self) -> bool {
        self.damage > 0 || self.effects.iter().any(CardEffect::is_damage_bonus)
    }

    #[must_use]
    pub fn has_effect(&self, tag: &str) -> bool {
        self.effects.iter().any(|e| e.tag() == tag)
    }

    /// Sum the magnitudes of every descriptor matching `select`.
    pub fn sum_effects<F>(&self, select: F) -> i64
    where
        F: Fn(&CardEffect) -> Option<i64>,
    {
        self.effects.iter().filter_map(select).sum()
    }

    /// The stats one level higher.
    #[must_use]
    pub fn leveled(&self) -> Self {
        let grow = |v: i64| ceil_percent(v, LEVEL_GROWTH_PERCENT);
        Self {
            damage: grow(self.damage),
            block: grow(self.block),
            heal: grow(self.heal),
            draw: if self.draw > 0 { self.draw + 1 } else { 0 },
            poison: ceil_percent(self.poison, POISON_GROWTH_PERCENT),
            hits: self.hits,
            effects: self.effects.iter().map(CardEffect::leveled).collect(),
        }
    }

    /// True when no scalable field of `self` is below the same field of `other`.
    #[must_use]
    pub fn dominates(&self, other: &CardStats) -> bool {
        self.damage >= other.damage
            && self.block >= other.block
            && self.heal >= other.heal
            && self.draw >= other.draw
            && self.poison >= other.poison
            && self.effects.len() == other.effects.len()
            && self
                .effects
                .iter()
                .zip(&other.effects)
                .all(|(a, b)| a.magnitude() >= b.magnitude())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaling::StatusKind;

    fn sample() -> CardStats {
        CardStats {
            damage: 6,
            block: 5,
            heal: 5,
            draw: 2,
            poison: 3,
            hits: 1,
            effects: vec![CardEffect::ComboBonus(5)],
        }
    }

    #[test]
    fn test_leveled_growth_rules() {
        let up = sample().leveled();
        assert_eq!(up.damage, 8); // 7.8
        assert_eq!(up.block, 7); // 6.5
        assert_eq!(up.heal, 7);
        assert_eq!(up.draw, 3);
        assert_eq!(up.poison, 5); // 4.2
        assert_eq!(up.effects, vec![CardEffect::ComboBonus(7)]);
    }

    #[test]
    fn test_zero_fields_stay_zero() {
        let up = CardStats::new().leveled();
        assert_eq!(up.damage, 0);
        assert_eq!(up.draw, 0);
        assert_eq!(up.hits, 1);
    }

    #[test]
    fn test_attack_bearing() {
        assert!(sample().is_attack_bearing());

        let mut burst = CardStats::new();
        assert!(!burst.is_attack_bearing());
        burst.effects.push(CardEffect::LengthSynergy(3));
        assert!(burst.is_attack_bearing());

        let mut focus = CardStats::new();
        focus.effects.push(CardEffect::Buff {
            kind: StatusKind::NextTurnEnergy,
            value: 1,
            turns: 1,
        });
        assert!(!focus.is_attack_bearing());
    }

    #[test]
    fn test_dominates() {
        let base = sample();
        assert!(base.leveled().dominates(&base));
        assert!(!base.dominates(&base.leveled()));
    }
}
