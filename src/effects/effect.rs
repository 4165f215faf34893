//! Card effect descriptors.
//!
//! A card template carries a list of `CardEffect`s next to its plain numeric
//! fields. Descriptors are pure data: the damage pipeline reads the bonus
//! descriptors at their fixed stage, and the battle resolves the rest as side
//! effects after damage.
//!
//! ## Damage bonuses (read by the pipeline)
//!
//! - `ComboBonus`: flat bonus while the combo streak is at least 2
//! - `ComboScaling`: bonus per combo point
//! - `LengthSynergy`: bonus per character of the answer, also granted as block
//! - `Soul`: bonus per correct answer this battle
//! - `Rage`: percent of HP lost so far
//! - `Vortex`: bonus per other card in hand
//!
//! ## Side effects (resolved after damage)
//!
//! Everything else: persistent block, statuses, poison catalysts, permanent
//! damage accumulation, weak-point arming, mirroring, snowballing and energy.

use serde::{Deserialize, Serialize};

use crate::core::ceil_percent;
use crate::scaling::StatusKind;

/// Growth applied to most magnitudes on level-up (×1.3, rounded up).
pub const LEVEL_GROWTH_PERCENT: i64 = 130;

/// Growth applied to poison on level-up (×1.4, rounded up).
pub const POISON_GROWTH_PERCENT: i64 = 140;

/// A tagged special-effect descriptor attached to a card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardEffect {
    /// Flat damage while combo streak >= 2.
    ComboBonus(i64),
    /// Damage per combo point.
    ComboScaling(i64),
    /// Damage (and block) per character of the answer text.
    LengthSynergy(i64),
    /// Damage per correct answer this battle.
    Soul(i64),
    /// Damage equal to `percent` of the HP lost so far.
    Rage { percent: i64 },
    /// Damage per other card in hand.
    Vortex(i64),
    /// Permanent base damage growth on this instance after each use.
    Snowball(i64),
    /// Replay the damage and poison of the last card played.
    Mirror,
    /// Double the enemy's poison after this card's poison is added.
    Catalyst,
    /// Add permanently to the in-battle damage buff.
    Accumulate(i64),
    /// Arm the double-next-attack flag when the enemy is poisoned enough.
    WeakPoint,
    /// Return damage to the enemy for every connecting hit.
    ThornArmor { value: i64, turns: u32 },
    /// Status installed on the enemy.
    Debuff { kind: StatusKind, value: i64, turns: u32 },
    /// Status installed on the player.
    Buff { kind: StatusKind, value: i64, turns: u32 },
    /// Block carried into the next turn.
    PersistentBlock(i64),
    /// Maximum energy raised for the rest of the battle.
    EnergyBonus(i64),
}

impl CardEffect {
    /// Whether this descriptor contributes to the damage pipeline.
    #[must_use]
    pub fn is_damage_bonus(&self) -> bool {
        matches!(
            self,
            CardEffect::ComboBonus(_)
                | CardEffect::ComboScaling(_)
                | CardEffect::LengthSynergy(_)
                | CardEffect::Soul(_)
                | CardEffect::Rage { .. }
                | CardEffect::Vortex(_)
        )
    }

    /// Stable snake_case tag.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            CardEffect::ComboBonus(_) => "combo_bonus",
            CardEffect::ComboScaling(_) => "combo_scaling",
            CardEffect::LengthSynergy(_) => "length_synergy",
            CardEffect::Soul(_) => "soul",
            CardEffect::Rage { .. } => "rage",
            CardEffect::Vortex(_) => "vortex",
            CardEffect::Snowball(_) => "snowball",
            CardEffect::Mirror => "mirror",
            CardEffect::Catalyst => "catalyst",
            CardEffect::Accumulate(_) => "accumulate",
            CardEffect::WeakPoint => "weak_point",
            CardEffect::ThornArmor { .. } => "thorn_armor",
            CardEffect::Debuff { .. } => "debuff",
            CardEffect::Buff { .. } => "buff",
            CardEffect::PersistentBlock(_) => "persistent_block",
            CardEffect::EnergyBonus(_) => "energy_bonus",
        }
    }

    /// The descriptor one level higher.
    ///
    /// Magnitudes grow ×1.3 rounded up; next-turn energy and energy bonuses
    /// grow +1; flags and durations are unchanged.
    #[must_use]
    pub fn leveled(&self) -> Self {
        let grow = |v: i64| ceil_percent(v, LEVEL_GROWTH_PERCENT);
        match *self {
            CardEffect::ComboBonus(v) => CardEffect::ComboBonus(grow(v)),
            CardEffect::ComboScaling(v) => CardEffect::ComboScaling(grow(v)),
            CardEffect::LengthSynergy(v) => CardEffect::LengthSynergy(grow(v)),
            CardEffect::Soul(v) => CardEffect::Soul(grow(v)),
            CardEffect::Rage { percent } => CardEffect::Rage { percent: grow(percent) },
            CardEffect::Vortex(v) => CardEffect::Vortex(grow(v)),
            CardEffect::Snowball(v) => CardEffect::Snowball(grow(v)),
            CardEffect::Accumulate(v) => CardEffect::Accumulate(grow(v)),
            CardEffect::ThornArmor { value, turns } => CardEffect::ThornArmor {
                value: grow(value),
                turns,
            },
            CardEffect::Debuff { kind, value, turns } => CardEffect::Debuff {
                kind,
                value: grow(value),
                turns,
            },
            CardEffect::Buff { kind, value, turns } => CardEffect::Buff {
                kind,
                value: if kind.is_additive() { value + 1 } else { grow(value) },
                turns,
            },
            CardEffect::PersistentBlock(v) => CardEffect::PersistentBlock(grow(v)),
            CardEffect::EnergyBonus(v) => CardEffect::EnergyBonus(v + 1),
            CardEffect::Mirror => CardEffect::Mirror,
            CardEffect::Catalyst => CardEffect::Catalyst,
            CardEffect::WeakPoint => CardEffect::WeakPoint,
        }
    }

    /// Every scalable magnitude carried by this descriptor.
    ///
    /// Used to check that leveling never weakens a card.
    #[must_use]
    pub fn magnitude(&self) -> i64 {
        match *self {
            CardEffect::ComboBonus(v)
            | CardEffect::ComboScaling(v)
            | CardEffect::LengthSynergy(v)
            | CardEffect::Soul(v)
            | CardEffect::Vortex(v)
            | CardEffect::Snowball(v)
            | CardEffect::Accumulate(v)
            | CardEffect::PersistentBlock(v)
            | CardEffect::EnergyBonus(v) => v,
            CardEffect::Rage { percent } => percent,
            CardEffect::ThornArmor { value, .. }
            | CardEffect::Debuff { value, .. }
            | CardEffect::Buff { value, .. } => value,
            CardEffect::Mirror | CardEffect::Catalyst | CardEffect::WeakPoint => 0,
        }
    }
}
