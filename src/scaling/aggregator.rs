//! The scaling aggregator: combo, relics, potions and player buffs.
//!
//! Relics and potions belong to the run and outlive any battle. The combo
//! streak and player buffs are per battle; `reset_for_battle` clears them.

use serde::{Deserialize, Serialize};

use super::combo::{combo_label, combo_multiplier_percent, ComboState};
use super::potions::{PotionBelt, PotionKind};
use super::relics::{RelicKind, RelicSet};
use super::status::{StatusKind, StatusSet};
use crate::battle::CombatantState;
use crate::cards::CardStats;
use crate::core::ceil_percent;

/// What drinking a potion did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PotionOutcome {
    Healed { amount: i64 },
    Energized { amount: i64 },
    DamageBoost { percent: i64 },
    HintsArmed { count: u32 },
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalingAggregator {
    pub combo: ComboState,
    pub relics: RelicSet,
    pub potions: PotionBelt,
    /// Player-side statuses: strength, potion damage, thorns, next-turn energy.
    pub buffs: StatusSet,
    /// Hint-potion eliminations waiting for the next choice question.
    pending_hints: u32,
}

impl ScalingAggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear per-battle state, keeping relics and potions.
    pub fn reset_for_battle(&mut self) {
        self.combo.start_battle();
        self.buffs.clear();
        self.pending_hints = 0;
    }

    pub fn increment_combo(&mut self) -> u32 {
        self.combo.increment()
    }

    pub fn reset_combo(&mut self) {
        self.combo.reset();
    }

    /// Sum of held relic values of `kind`.
    #[must_use]
    pub fn relic_bonus(&self, kind: RelicKind) -> i64 {
        self.relics.bonus(kind)
    }

    /// Current combo multiplier in percent.
    #[must_use]
    pub fn combo_multiplier(&self) -> i64 {
        combo_multiplier_percent(self.combo.streak(), self.relic_bonus(RelicKind::ComboBonus))
    }

    #[must_use]
    pub fn combo_text(&self) -> String {
        combo_label(self.combo.streak(), self.relic_bonus(RelicKind::ComboBonus))
    }

    /// Card damage before card-specific bonuses.
    ///
    /// `(base + attack relic)`, then × combo, then × strength, then × potion,
    /// rounding up after each multiplication.
    #[must_use]
    pub fn calculate_damage(&self, stats: &CardStats) -> i64 {
        let mut damage = stats.damage + self.relic_bonus(RelicKind::AttackBonus);
        damage = ceil_percent(damage, self.combo_multiplier());
        if let Some(strength) = self.buffs.get(StatusKind::Strength) {
            damage = ceil_percent(damage, strength.value);
        }
        if let Some(potion) = self.buffs.get(StatusKind::DamageMultiplier) {
            damage = ceil_percent(damage, potion.value);
        }
        damage.max(0)
    }

    /// Card block: base + block relic.
    #[must_use]
    pub fn calculate_block(&self, stats: &CardStats) -> i64 {
        (stats.block + self.relic_bonus(RelicKind::BlockBonus)).max(0)
    }

    /// Drink the potion in `slot`. `None` if the slot is empty.
    pub fn apply_potion(&mut self, slot: usize, player: &mut CombatantState) -> Option<PotionOutcome> {
        let potion = self.potions.take(slot)?;
        tracing::debug!(potion = %potion.key, "potion used");
        Some(match potion.kind {
            PotionKind::Heal(amount) => PotionOutcome::Healed {
                amount: player.heal(amount),
            },
            PotionKind::Energy(amount) => {
                player.energy += amount;
                PotionOutcome::Energized { amount }
            }
            PotionKind::DamageMultiplier(percent) => {
                self.buffs.apply(StatusKind::DamageMultiplier, percent, None);
                PotionOutcome::DamageBoost { percent }
            }
            PotionKind::Hint(count) => {
                self.pending_hints += count;
                PotionOutcome::HintsArmed { count }
            }
        })
    }

    #[must_use]
    pub fn pending_hints(&self) -> u32 {
        self.pending_hints
    }

    /// Eliminations for the next choice question: the hint relic every time,
    /// plus any armed hint potions, which are used up.
    pub fn take_hints(&mut self) -> u32 {
        let relic = u32::try_from(self.relic_bonus(RelicKind::Hint).max(0)).unwrap_or(0);
        relic + std::mem::take(&mut self.pending_hints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerProfile;
    use crate::scaling::{standard_potion, standard_relic};

    fn stats(damage: i64, block: i64) -> CardStats {
        CardStats {
            damage,
            block,
            ..CardStats::new()
        }
    }

    #[test]
    fn test_damage_without_modifiers() {
        let agg = ScalingAggregator::new();
        assert_eq!(agg.calculate_damage(&stats(6, 0)), 6);
    }

    #[test]
    fn test_damage_order() {
        let mut agg = ScalingAggregator::new();
        agg.relics.add(standard_relic("sharp_blade").unwrap()).unwrap();
        agg.increment_combo();
        agg.increment_combo();
        agg.buffs.apply(StatusKind::Strength, 150, Some(1));
        agg.buffs.apply(StatusKind::DamageMultiplier, 150, None);

        // (6 + 2) = 8 -> ×1.4 = 11.2 -> 12 -> ×1.5 = 18 -> ×1.5 = 27
        assert_eq!(agg.calculate_damage(&stats(6, 0)), 27);
    }

    #[test]
    fn test_block_relic() {
        let mut agg = ScalingAggregator::new();
        agg.relics.add(standard_relic("thick_armor").unwrap()).unwrap();
        assert_eq!(agg.calculate_block(&stats(0, 5)), 7);
    }

    #[test]
    fn test_potions() {
        let mut agg = ScalingAggregator::new();
        let mut player = CombatantState::from_profile(&PlayerProfile::default().with_hp(50));
        player.energy = 1;
        for key in ["health_potion", "energy_potion", "power_potion"] {
            agg.potions.add(standard_potion(key).unwrap()).unwrap();
        }

        assert_eq!(agg.apply_potion(0, &mut player), Some(PotionOutcome::Healed { amount: 10 }));
        assert_eq!(player.hp, 60);

        assert_eq!(agg.apply_potion(0, &mut player), Some(PotionOutcome::Energized { amount: 2 }));
        assert_eq!(player.energy, 3);

        assert_eq!(
            agg.apply_potion(0, &mut player),
            Some(PotionOutcome::DamageBoost { percent: 150 })
        );
        assert_eq!(agg.calculate_damage(&stats(6, 0)), 9);

        assert_eq!(agg.apply_potion(0, &mut player), None);
    }

    #[test]
    fn test_hints() {
        let mut agg = ScalingAggregator::new();
        agg.relics.add(standard_relic("wisdom_gem").unwrap()).unwrap();
        agg.potions.add(standard_potion("hint_potion").unwrap()).unwrap();
        let mut player = CombatantState::from_profile(&PlayerProfile::default());

        agg.apply_potion(0, &mut player);
        assert_eq!(agg.pending_hints(), 2);
        assert_eq!(agg.take_hints(), 3);
        assert_eq!(agg.take_hints(), 1);
    }

    #[test]
    fn test_reset_for_battle_keeps_inventory() {
        let mut agg = ScalingAggregator::new();
        agg.relics.add(standard_relic("magic_book").unwrap()).unwrap();
        agg.potions.add(standard_potion("hint_potion").unwrap()).unwrap();
        agg.increment_combo();
        agg.buffs.apply(StatusKind::ThornArmor, 3, Some(1));

        agg.reset_for_battle();
        assert_eq!(agg.combo.streak(), 0);
        assert!(agg.buffs.is_empty());
        assert_eq!(agg.relics.len(), 1);
        assert_eq!(agg.potions.len(), 1);
    }
}
