//! Summaries of what a resolution step actually did.
//!
//! Every card hit, enemy action and poison tick reports a list of
//! `AppliedEffect`s. They travel in `quiz_result` and `enemy_turn` events so a
//! presentation layer can animate them without re-deriving the numbers.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::InstanceId;
use crate::scaling::StatusKind;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppliedEffect {
    /// Card damage against the enemy.
    Damage { total: i64, hp_damage: i64, blocked: i64 },
    Block { amount: i64 },
    PersistentBlock { amount: i64 },
    Heal { amount: i64 },
    Draw { cards: Vec<InstanceId> },
    PlayerStatus { kind: StatusKind, value: i64, turns: u32 },
    EnemyStatus { kind: StatusKind, value: i64, turns: u32 },
    Poison { added: i64, total: i64 },
    PoisonCatalyzed { total: i64 },
    DamageBuff { added: i64, total: i64 },
    WeakPointArmed,
    /// Weak point needed more poison on the enemy.
    WeakPointMissed { poison: i64 },
    Mirrored { template: CardId },
    /// Mirror had nothing to copy.
    MirrorFizzled,
    Snowball { damage: i64 },
    MaxEnergy { max: i64 },
    LevelUp { card: InstanceId, level: u8 },
    Awakened,

    // Enemy turn
    PoisonTick { damage: i64, remaining: i64 },
    EnemyHit { damage: i64, hp_damage: i64, blocked: i64 },
    /// Thorn armor returning damage for one hit.
    Thorns { damage: i64, hp_damage: i64 },
    EnemyBlock { amount: i64 },
    EnemyBuff { buff: String, value: i64 },
}

impl AppliedEffect {
    /// HP damage dealt to the enemy by this step.
    #[must_use]
    pub fn enemy_hp_damage(&self) -> i64 {
        match self {
            AppliedEffect::Damage { hp_damage, .. } | AppliedEffect::Thorns { hp_damage, .. } => *hp_damage,
            AppliedEffect::PoisonTick { damage, .. } => *damage,
            _ => 0,
        }
    }

    /// HP damage dealt to the player by this step.
    #[must_use]
    pub fn player_hp_damage(&self) -> i64 {
        match self {
            AppliedEffect::EnemyHit { hp_damage, .. } => *hp_damage,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_accessors() {
        let hit = AppliedEffect::Damage { total: 6, hp_damage: 2, blocked: 4 };
        let tick = AppliedEffect::PoisonTick { damage: 3, remaining: 2 };
        let enemy = AppliedEffect::EnemyHit { damage: 8, hp_damage: 5, blocked: 3 };

        assert_eq!(hit.enemy_hp_damage(), 2);
        assert_eq!(tick.enemy_hp_damage(), 3);
        assert_eq!(enemy.player_hp_damage(), 5);
        assert_eq!(enemy.enemy_hp_damage(), 0);
        assert_eq!(AppliedEffect::MirrorFizzled.player_hp_damage(), 0);
    }
}
