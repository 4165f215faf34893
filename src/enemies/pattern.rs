//! Enemy intent cycle.
//!
//! Deterministic: the intent for the coming enemy turn is always known one
//! turn ahead, so the battle can show it as a preview.

use serde::{Deserialize, Serialize};

use super::definition::IntentTemplate;
use super::state::EnemyState;

/// An enemy's declared next action, with buffs already applied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    Attack { damage: i64 },
    MultiAttack { damage: i64, hits: u32 },
    Defend { block: i64 },
    Buff { buff: String, value: i64 },
}

impl Intent {
    /// Per-hit damage, 0 for non-attacks.
    #[must_use]
    pub fn damage(&self) -> i64 {
        match self {
            Intent::Attack { damage } | Intent::MultiAttack { damage, .. } => *damage,
            Intent::Defend { .. } | Intent::Buff { .. } => 0,
        }
    }

    /// Hit count; 1 for a single attack and for non-attacks.
    #[must_use]
    pub fn hits(&self) -> u32 {
        match self {
            Intent::MultiAttack { hits, .. } => (*hits).max(1),
            _ => 1,
        }
    }

    #[must_use]
    pub fn is_attack(&self) -> bool {
        matches!(self, Intent::Attack { .. } | Intent::MultiAttack { .. })
    }
}

/// Materialize the intent at the current cycle position.
///
/// Adds the enemy's strength to attack damage. `None` only for an enemy
/// with an empty pattern.
#[must_use]
pub fn intent_for(enemy: &EnemyState) -> Option<Intent> {
    if enemy.patterns.is_empty() {
        return None;
    }
    let step = &enemy.patterns[enemy.cycle_index % enemy.patterns.len()];
    let strength = enemy.strength();

    Some(match step {
        IntentTemplate::Attack { damage } => Intent::Attack {
            damage: damage + strength,
        },
        IntentTemplate::MultiAttack { damage, hits } => Intent::MultiAttack {
            damage: damage + strength,
            hits: (*hits).max(1),
        },
        IntentTemplate::Defend { block } => Intent::Defend { block: *block },
        IntentTemplate::Buff { buff, value } => Intent::Buff {
            buff: buff.clone(),
            value: *value,
        },
    })
}

/// Step the cycle pointer forward, wrapping at the pattern length.
pub fn advance_pattern(enemy: &mut EnemyState) {
    if enemy.patterns.is_empty() {
        return;
    }
    enemy.cycle_index = (enemy.cycle_index + 1) % enemy.patterns.len();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemies::{Encounter, EnemyRegistry, STRENGTH};

    fn spawn(key: &str) -> EnemyState {
        EnemyRegistry::standard().spawn(key, Encounter::new(1, 0)).unwrap()
    }

    #[test]
    fn test_cycle_wraps() {
        let mut slime = spawn("slime");
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(intent_for(&slime).unwrap());
            advance_pattern(&mut slime);
        }
        assert_eq!(seen[0], Intent::Attack { damage: 5 });
        assert_eq!(seen[1], Intent::Attack { damage: 7 });
        assert_eq!(seen[2], Intent::Defend { block: 4 });
        assert_eq!(seen[3], seen[0]);
    }

    #[test]
    fn test_strength_applies_to_attacks() {
        let mut goblin = spawn("goblin");
        goblin.modify_buff(STRENGTH, 2);
        assert_eq!(intent_for(&goblin), Some(Intent::Attack { damage: 8 }));

        goblin.cycle_index = 2;
        let multi = intent_for(&goblin).unwrap();
        assert_eq!(multi, Intent::MultiAttack { damage: 5, hits: 2 });
        assert_eq!(multi.hits(), 2);
    }

    #[test]
    fn test_buff_intent() {
        let mut mushroom = spawn("mushroom");
        advance_pattern(&mut mushroom);
        let intent = intent_for(&mushroom).unwrap();
        assert_eq!(intent, Intent::Buff { buff: STRENGTH.into(), value: 2 });
        assert!(!intent.is_attack());
        assert_eq!(intent.hits(), 1);
    }

    #[test]
    fn test_reading_does_not_advance() {
        let slime = spawn("slime");
        assert_eq!(intent_for(&slime), intent_for(&slime));
        assert_eq!(slime.cycle_index, 0);
    }
}
