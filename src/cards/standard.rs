//! The built-in card set.

use super::definition::{CardCategory, CardTemplate, QuizMode, Rarity};
use super::registry::CardRegistry;
use crate::effects::effect::CardEffect;
use crate::scaling::StatusKind;

use CardCategory::{Attack, Defense, Skill};

/// Every built-in template, in registration order.
#[must_use]
pub fn standard_cards() -> Vec<CardTemplate> {
    vec![
        // Attacks
        CardTemplate::new("slash", "Slash", Attack, 1).with_damage(6),
        CardTemplate::new("fireball", "Fireball", Attack, 2)
            .with_damage(14)
            .with_quiz_mode(QuizMode::Typed)
            .with_rarity(Rarity::Uncommon),
        CardTemplate::new("double_strike", "Double Strike", Attack, 2)
            .with_damage(5)
            .with_hits(2)
            .with_quiz_mode(QuizMode::DoubleChoice)
            .with_rarity(Rarity::Uncommon),
        CardTemplate::new("thunder", "Thunder", Attack, 2)
            .with_damage(10)
            .with_effect(CardEffect::ComboBonus(5))
            .with_rarity(Rarity::Uncommon),
        CardTemplate::new("ice_lance", "Ice Lance", Attack, 1)
            .with_damage(4)
            .with_effect(CardEffect::Debuff {
                kind: StatusKind::Weakened,
                value: 2,
                turns: 1,
            }),
        CardTemplate::new("meteor", "Meteor", Attack, 3)
            .with_damage(24)
            .with_quiz_mode(QuizMode::Typed)
            .with_rarity(Rarity::Rare),
        CardTemplate::new("quick_slash", "Quick Slash", Attack, 0).with_damage(3),
        CardTemplate::new("poison_blade", "Poison Blade", Attack, 1)
            .with_damage(3)
            .with_poison(3),
        CardTemplate::new("combo_blade", "Combo Blade", Attack, 2)
            .with_damage(10)
            .with_effect(CardEffect::ComboScaling(5))
            .with_quiz_mode(QuizMode::Typed)
            .with_rarity(Rarity::Rare),
        CardTemplate::new("longword_burst", "Longword Burst", Attack, 2)
            .with_effect(CardEffect::LengthSynergy(3))
            .with_quiz_mode(QuizMode::Typed)
            .with_rarity(Rarity::Rare),
        CardTemplate::new("soul_strike", "Soul Strike", Attack, 1)
            .with_damage(4)
            .with_effect(CardEffect::Soul(2))
            .with_rarity(Rarity::Uncommon),
        CardTemplate::new("berserk", "Berserk", Attack, 2)
            .with_damage(6)
            .with_effect(CardEffect::Rage { percent: 50 })
            .with_quiz_mode(QuizMode::Typed)
            .with_rarity(Rarity::Rare),
        CardTemplate::new("vortex_slash", "Vortex Slash", Attack, 1)
            .with_damage(3)
            .with_effect(CardEffect::Vortex(2))
            .with_rarity(Rarity::Uncommon),
        CardTemplate::new("snowball", "Snowball", Attack, 1)
            .with_damage(4)
            .with_effect(CardEffect::Snowball(2))
            .with_rarity(Rarity::Uncommon),
        CardTemplate::new("mirror_image", "Mirror Image", Attack, 1)
            .with_effect(CardEffect::Mirror)
            .with_rarity(Rarity::Rare),
        CardTemplate::new("weak_point", "Weak Point", Attack, 1)
            .with_damage(3)
            .with_effect(CardEffect::WeakPoint)
            .with_rarity(Rarity::Uncommon),
        // Defense
        CardTemplate::new("shield", "Shield", Defense, 1).with_block(5),
        CardTemplate::new("iron_wall", "Iron Wall", Defense, 2)
            .with_block(12)
            .with_quiz_mode(QuizMode::Typed)
            .with_rarity(Rarity::Uncommon),
        CardTemplate::new("counter", "Counter", Defense, 1)
            .with_block(3)
            .with_damage(3),
        CardTemplate::new("barrier", "Barrier", Defense, 2)
            .with_block(8)
            .with_effect(CardEffect::PersistentBlock(4))
            .with_rarity(Rarity::Uncommon),
        CardTemplate::new("thorn_mail", "Thorn Mail", Defense, 1)
            .with_block(4)
            .with_effect(CardEffect::ThornArmor { value: 3, turns: 1 })
            .with_rarity(Rarity::Uncommon),
        // Skills
        CardTemplate::new("heal", "Heal", Skill, 1).with_heal(5),
        CardTemplate::new("power_up", "Power Up", Skill, 1).with_effect(CardEffect::Buff {
            kind: StatusKind::Strength,
            value: 150,
            turns: 1,
        }),
        CardTemplate::new("draw_card", "Insight", Skill, 1).with_draw(2),
        CardTemplate::new("focus", "Focus", Skill, 0).with_effect(CardEffect::Buff {
            kind: StatusKind::NextTurnEnergy,
            value: 1,
            turns: 1,
        }),
        CardTemplate::new("mega_heal", "Mega Heal", Skill, 2)
            .with_heal(12)
            .with_quiz_mode(QuizMode::Typed)
            .with_rarity(Rarity::Uncommon),
        CardTemplate::new("poison_catalyst", "Poison Catalyst", Skill, 2)
            .with_poison(5)
            .with_effect(CardEffect::Catalyst)
            .with_quiz_mode(QuizMode::Typed)
            .with_rarity(Rarity::Rare),
        CardTemplate::new("meditate", "Meditate", Skill, 1)
            .with_effect(CardEffect::Accumulate(2))
            .with_rarity(Rarity::Uncommon),
        CardTemplate::new("overcharge", "Overcharge", Skill, 1)
            .with_effect(CardEffect::EnergyBonus(1))
            .with_quiz_mode(QuizMode::Typed)
            .with_rarity(Rarity::Rare),
    ]
}

impl CardRegistry {
    /// A registry holding the built-in card set.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for template in standard_cards() {
            // Built-in keys are unique.
            if let Err(err) = registry.register(template) {
                tracing::warn!(%err, "skipping built-in card");
            }
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardCatalog;

    #[test]
    fn test_standard_keys_unique() {
        let registry = CardRegistry::standard();
        assert_eq!(registry.len(), standard_cards().len());
    }

    #[test]
    fn test_reference_numbers() {
        let registry = CardRegistry::standard();
        let slash = registry.lookup("slash").unwrap();
        assert_eq!((slash.cost, slash.stats.damage), (1, 6));

        let strike = registry.lookup("double_strike").unwrap();
        assert_eq!(strike.required_hits(), 2);

        let quick = registry.lookup("quick_slash").unwrap();
        assert_eq!(quick.cost, 0);
    }

    #[test]
    fn test_every_special_effect_is_represented() {
        let registry = CardRegistry::standard();
        for tag in [
            "combo_bonus",
            "combo_scaling",
            "length_synergy",
            "soul",
            "rage",
            "vortex",
            "snowball",
            "mirror",
            "catalyst",
            "accumulate",
            "weak_point",
            "thorn_armor",
            "debuff",
            "buff",
            "persistent_block",
            "energy_bonus",
        ] {
            assert!(
                registry.iter().any(|c| c.stats.has_effect(tag)),
                "no card carries {tag}"
            );
        }
    }

    #[test]
    fn test_mirror_card_is_not_attack_bearing() {
        let registry = CardRegistry::standard();
        let mirror = registry.template_by_key("mirror_image").unwrap();
        assert!(mirror.is_mirror());
        assert!(!mirror.stats.is_attack_bearing());
    }
}
