//! Card progression and combo scaling tests.

use proptest::prelude::*;

use quiz_battle::cards::{standard_cards, CardRegistry, CardStats, MAX_LEVEL};
use quiz_battle::core::InstanceId;
use quiz_battle::scaling::{combo_label, combo_multiplier_percent, ComboState};

proptest! {
    /// Experience only ever moves a card up, never past the cap, and a
    /// higher level never has a weaker number.
    #[test]
    fn test_levels_are_monotonic(card in 0usize..29, awards in prop::collection::vec(0u32..5, 0..40)) {
        let registry = CardRegistry::standard();
        let templates = standard_cards();
        let key = &templates[card % templates.len()].key;
        let mut instance = registry.instantiate(key, InstanceId::new(1)).unwrap();

        for xp in awards {
            let level = instance.level;
            let before: CardStats = instance.stats().clone();
            let leveled = instance.gain_experience(xp);

            prop_assert!(instance.level <= MAX_LEVEL);
            prop_assert!(instance.level >= level);
            prop_assert_eq!(leveled, instance.level > level);
            prop_assert!(instance.stats().dominates(&before));
            prop_assert_eq!(instance.version(), usize::from(instance.level));
        }
    }

    #[test]
    fn test_combo_multiplier_never_drops_as_streak_grows(streak in 0u32..40, bonus in 0i64..50) {
        let here = combo_multiplier_percent(streak, bonus);
        let next = combo_multiplier_percent(streak + 1, bonus);
        prop_assert!(next >= here);
        prop_assert!(here >= 100);
    }
}

#[test]
fn test_combo_tiers() {
    let table: Vec<i64> = (0..=9).map(|s| combo_multiplier_percent(s, 0)).collect();
    assert_eq!(table, vec![100, 100, 140, 140, 160, 160, 200, 200, 240, 240]);

    assert_eq!(combo_label(1, 0), "");
    assert_eq!(combo_label(2, 0), "GOOD! x1.4");
    assert_eq!(combo_label(5, 0), "GREAT! x1.6");
    assert_eq!(combo_label(9, 10), "AMAZING! x2.8");
}

#[test]
fn test_combo_bests_survive_resets() {
    let mut combo = ComboState::new();
    for _ in 0..4 {
        combo.increment();
    }
    combo.reset();
    combo.increment();

    assert_eq!(combo.streak(), 1);
    assert_eq!(combo.battle_max(), 4);

    combo.start_battle();
    assert_eq!(combo.streak(), 0);
    assert_eq!(combo.battle_max(), 0);
    assert_eq!(combo.run_max(), 4);
}

#[test]
fn test_three_correct_answers_level_a_card() {
    let registry = CardRegistry::standard();
    let mut slash = registry.instantiate("slash", InstanceId::new(1)).unwrap();

    assert!(!slash.gain_experience(1));
    assert!(!slash.gain_experience(1));
    assert!(slash.gain_experience(1));
    assert_eq!(slash.level, 2);
    assert_eq!(slash.experience_to_next, 6);
    assert!(slash.stats().damage > 6);
    assert_eq!(slash.previous_versions()[0].damage, 6);
}
