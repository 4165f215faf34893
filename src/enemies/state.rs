//! Per-battle enemy state.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::definition::{AwakeningRule, Encounter, EnemyTemplate, IntentTemplate, STRENGTH};
use crate::core::ceil_div;
use crate::scaling::StatusSet;

/// Result of subtracting an attack from a block pool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mitigation {
    /// Damage that reached HP.
    pub hp_damage: i64,
    /// Damage soaked by block.
    pub blocked: i64,
    /// Block left afterwards.
    pub remaining_block: i64,
}

/// Subtract `total` from `block`; the excess is HP damage. Both floor at 0.
#[must_use]
pub fn mitigate(total: i64, block: i64) -> Mitigation {
    let total = total.max(0);
    let block = block.max(0);
    let hp_damage = (total - block).max(0);
    Mitigation {
        hp_damage,
        blocked: total - hp_damage,
        remaining_block: (block - total).max(0),
    }
}

/// A live enemy.
///
/// ## Buffs (i64 only)
///
/// Named buffs live in `FxHashMap<String, i64>`; intents read `"strength"`
/// and add it to attack damage. Debuffs the player installs (weakened) are
/// turn-limited entries in `debuffs`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyState {
    pub key: String,
    pub name: String,
    pub hp: i64,
    pub max_hp: i64,
    pub block: i64,
    #[serde(default)]
    pub buffs: FxHashMap<String, i64>,
    #[serde(default)]
    pub debuffs: StatusSet,
    /// Damage dealt at the start of the next enemy turn, then decays by 1.
    pub poison: i64,
    pub cycle_index: usize,
    pub patterns: Vec<IntentTemplate>,
    pub is_elite: bool,
    pub is_boss: bool,
    /// Run scaling in percent (100 = ×1.0).
    pub scaling_percent: i64,
    pub awakening: Option<AwakeningRule>,
    pub awakened: bool,
}

impl EnemyState {
    /// Build battle state from a template met at `encounter`.
    #[must_use]
    pub fn spawn(template: &EnemyTemplate, encounter: Encounter) -> Self {
        let hp = encounter.scaled_hp(template.base_hp).max(1);
        Self {
            key: template.key.clone(),
            name: template.name.clone(),
            hp,
            max_hp: hp,
            block: 0,
            buffs: FxHashMap::default(),
            debuffs: StatusSet::new(),
            poison: 0,
            cycle_index: 0,
            patterns: template.patterns.clone(),
            is_elite: encounter.elite,
            is_boss: template.is_boss,
            scaling_percent: encounter.scaling_percent(),
            awakening: template.awakening,
            awakened: false,
        }
    }

    /// Get a buff value, or 0.
    #[must_use]
    pub fn get_buff(&self, name: &str) -> i64 {
        self.buffs.get(name).copied().unwrap_or(0)
    }

    /// Modify a buff value by delta.
    pub fn modify_buff(&mut self, name: &str, delta: i64) {
        *self.buffs.entry(name.to_string()).or_insert(0) += delta;
    }

    #[must_use]
    pub fn strength(&self) -> i64 {
        self.get_buff(STRENGTH)
    }

    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }

    /// Quiz difficulty cap: the ceiling for bosses, otherwise
    /// `min(ceiling, ceil(scaling))`.
    #[must_use]
    pub fn difficulty_cap(&self, ceiling: u8) -> u8 {
        if self.is_boss {
            return ceiling;
        }
        let scaled = ceil_div(self.scaling_percent, 100).clamp(1, i64::from(ceiling));
        u8::try_from(scaled).unwrap_or(ceiling)
    }

    /// Take a hit through block.
    pub fn absorb(&mut self, total: i64) -> Mitigation {
        let m = mitigate(total, self.block);
        self.block = m.remaining_block;
        self.lose_hp(m.hp_damage);
        m
    }

    /// Lose HP directly, ignoring block. Floors at 0.
    pub fn lose_hp(&mut self, amount: i64) {
        self.hp = (self.hp - amount.max(0)).max(0);
    }

    /// Percent applied to incoming card damage while awakened.
    #[must_use]
    pub fn damage_taken_percent(&self) -> Option<i64> {
        if self.awakened {
            self.awakening.map(|rule| rule.damage_taken_percent)
        } else {
            None
        }
    }

    /// Awaken if HP has fallen to the rule's threshold. Returns true the
    /// moment it happens; the strength gain is applied once.
    pub fn check_awakening(&mut self) -> bool {
        let Some(rule) = self.awakening else {
            return false;
        };
        if self.awakened || self.is_dead() {
            return false;
        }
        if self.hp * 100 > self.max_hp * rule.threshold_percent {
            return false;
        }
        self.awakened = true;
        self.modify_buff(STRENGTH, rule.strength);
        tracing::info!(enemy = %self.key, hp = self.hp, "enemy awakened");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemies::EnemyRegistry;

    fn slime() -> EnemyState {
        EnemyRegistry::standard().spawn("slime", Encounter::new(1, 0)).unwrap()
    }

    #[test]
    fn test_mitigate() {
        assert_eq!(
            mitigate(6, 4),
            Mitigation { hp_damage: 2, blocked: 4, remaining_block: 0 }
        );
        assert_eq!(
            mitigate(3, 10),
            Mitigation { hp_damage: 0, blocked: 3, remaining_block: 7 }
        );
        assert_eq!(mitigate(-2, 5).remaining_block, 5);
    }

    #[test]
    fn test_spawn() {
        let enemy = slime();
        assert_eq!(enemy.hp, 20);
        assert_eq!(enemy.max_hp, 20);
        assert_eq!(enemy.patterns.len(), 3);
        assert!(!enemy.is_boss);
    }

    #[test]
    fn test_absorb_uses_block_first() {
        let mut enemy = slime();
        enemy.block = 4;
        let m = enemy.absorb(6);
        assert_eq!(m.hp_damage, 2);
        assert_eq!(enemy.block, 0);
        assert_eq!(enemy.hp, 18);
    }

    #[test]
    fn test_hp_floors_at_zero() {
        let mut enemy = slime();
        enemy.lose_hp(500);
        assert_eq!(enemy.hp, 0);
        assert!(enemy.is_dead());
    }

    #[test]
    fn test_buffs() {
        let mut enemy = slime();
        assert_eq!(enemy.strength(), 0);
        enemy.modify_buff(STRENGTH, 2);
        enemy.modify_buff(STRENGTH, 3);
        assert_eq!(enemy.strength(), 5);
    }

    #[test]
    fn test_difficulty_cap() {
        let registry = EnemyRegistry::standard();
        let early = registry.spawn("slime", Encounter::new(1, 0)).unwrap();
        assert_eq!(early.difficulty_cap(3), 1);

        let later = registry.spawn("skeleton", Encounter::new(2, 2)).unwrap();
        assert_eq!(later.difficulty_cap(3), 2);

        let deep = registry.spawn("phantom", Encounter::new(3, 9)).unwrap();
        assert_eq!(deep.difficulty_cap(3), 3);

        let boss = registry.spawn("forest_guardian", Encounter::new(1, 0)).unwrap();
        assert_eq!(boss.difficulty_cap(3), 3);
    }

    #[test]
    fn test_awakening_once() {
        let mut archive = EnemyRegistry::standard()
            .spawn("evolving_archive", Encounter::new(3, 0))
            .unwrap();
        let max = archive.max_hp;

        archive.lose_hp(max / 4);
        assert!(!archive.check_awakening());
        assert_eq!(archive.damage_taken_percent(), None);

        archive.lose_hp(max / 4 + 1);
        assert!(archive.check_awakening());
        assert!(!archive.check_awakening());
        assert_eq!(archive.strength(), 4);
        assert_eq!(archive.damage_taken_percent(), Some(125));
    }
}
