//! Enemy templates and the built-in bestiary.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::state::EnemyState;
use crate::core::{ceil_div, CatalogError};

/// Name of the enemy buff that adds to attack damage.
pub const STRENGTH: &str = "strength";

/// One step of an enemy's intent cycle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntentTemplate {
    Attack { damage: i64 },
    MultiAttack { damage: i64, hits: u32 },
    Defend { block: i64 },
    Buff { buff: String, value: i64 },
}

impl IntentTemplate {
    #[must_use]
    pub fn attack(damage: i64) -> Self {
        Self::Attack { damage }
    }

    #[must_use]
    pub fn multi(damage: i64, hits: u32) -> Self {
        Self::MultiAttack { damage, hits }
    }

    #[must_use]
    pub fn defend(block: i64) -> Self {
        Self::Defend { block }
    }

    /// A strength buff, the only buff the built-in enemies use.
    #[must_use]
    pub fn strength(value: i64) -> Self {
        Self::Buff {
            buff: STRENGTH.to_string(),
            value,
        }
    }
}

/// A boss mechanic that turns on once HP falls to a threshold.
///
/// While awakened the enemy gains `strength` once and takes
/// `damage_taken_percent` of every card hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwakeningRule {
    pub threshold_percent: i64,
    pub damage_taken_percent: i64,
    pub strength: i64,
}

/// Static enemy data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyTemplate {
    pub key: String,
    pub name: String,
    pub base_hp: i64,
    pub floor: u8,
    pub is_boss: bool,
    pub patterns: Vec<IntentTemplate>,
    pub awakening: Option<AwakeningRule>,
}

impl EnemyTemplate {
    pub fn new(key: impl Into<String>, name: impl Into<String>, base_hp: i64, floor: u8) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            base_hp,
            floor,
            is_boss: false,
            patterns: Vec::new(),
            awakening: None,
        }
    }

    #[must_use]
    pub fn boss(mut self) -> Self {
        self.is_boss = true;
        self
    }

    #[must_use]
    pub fn with_pattern(mut self, patterns: impl IntoIterator<Item = IntentTemplate>) -> Self {
        self.patterns.extend(patterns);
        self
    }

    #[must_use]
    pub fn with_awakening(mut self, rule: AwakeningRule) -> Self {
        self.awakening = Some(rule);
        self
    }
}

/// Where an enemy is met, which sets its HP and quiz difficulty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encounter {
    pub floor: u8,
    pub node_index: u32,
    pub elite: bool,
}

impl Encounter {
    #[must_use]
    pub fn new(floor: u8, node_index: u32) -> Self {
        Self {
            floor,
            node_index,
            elite: false,
        }
    }

    #[must_use]
    pub fn elite(mut self) -> Self {
        self.elite = true;
        self
    }

    /// Run scaling as a percent: 100 + 30 per floor past the first + 5 per node.
    #[must_use]
    pub fn scaling_percent(&self) -> i64 {
        100 + 30 * i64::from(self.floor.max(1) - 1) + 5 * i64::from(self.node_index)
    }

    /// `ceil(base_hp × scaling × 1.5 if elite)`.
    #[must_use]
    pub fn scaled_hp(&self, base_hp: i64) -> i64 {
        let elite = if self.elite { 150 } else { 100 };
        ceil_div(base_hp * self.scaling_percent() * elite, 10_000)
    }
}

/// Enemy template lookup.
#[derive(Clone, Debug, Default)]
pub struct EnemyRegistry {
    enemies: FxHashMap<String, EnemyTemplate>,
    elites: FxHashMap<u8, Vec<String>>,
}

impl EnemyRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template. Patterns must be non-empty.
    pub fn register(&mut self, template: EnemyTemplate) -> Result<(), CatalogError> {
        if template.patterns.is_empty() {
            return Err(CatalogError::EmptyPattern(template.key));
        }
        self.enemies.insert(template.key.clone(), template);
        Ok(())
    }

    /// Mark a registered enemy as an elite candidate on a floor.
    pub fn add_elite(&mut self, floor: u8, key: &str) -> Result<(), CatalogError> {
        if !self.enemies.contains_key(key) {
            return Err(CatalogError::UnknownEnemy(key.to_string()));
        }
        self.elites.entry(floor).or_default().push(key.to_string());
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<&EnemyTemplate, CatalogError> {
        self.enemies
            .get(key)
            .ok_or_else(|| CatalogError::UnknownEnemy(key.to_string()))
    }

    /// Create battle state for `key` met at `encounter`.
    pub fn spawn(&self, key: &str, encounter: Encounter) -> Result<EnemyState, CatalogError> {
        self.get(key).map(|template| EnemyState::spawn(template, encounter))
    }

    /// Regular (non-boss) enemies of a floor, sorted by key.
    #[must_use]
    pub fn floor_enemies(&self, floor: u8) -> Vec<&EnemyTemplate> {
        let mut found: Vec<_> = self
            .enemies
            .values()
            .filter(|e| e.floor == floor && !e.is_boss)
            .collect();
        found.sort_by(|a, b| a.key.cmp(&b.key));
        found
    }

    /// Bosses of a floor, sorted by key.
    #[must_use]
    pub fn floor_bosses(&self, floor: u8) -> Vec<&EnemyTemplate> {
        let mut found: Vec<_> = self
            .enemies
            .values()
            .filter(|e| e.floor == floor && e.is_boss)
            .collect();
        found.sort_by(|a, b| a.key.cmp(&b.key));
        found
    }

    #[must_use]
    pub fn elite_pool(&self, floor: u8) -> &[String] {
        self.elites.get(&floor).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    /// The built-in bestiary.
    #[must_use]
    pub fn standard() -> Self {
        use IntentTemplate as I;

        let templates = [
            // Floor 1: forest
            EnemyTemplate::new("slime", "Slime", 20, 1)
                .with_pattern([I::attack(5), I::attack(7), I::defend(4)]),
            EnemyTemplate::new("goblin", "Goblin", 25, 1)
                .with_pattern([I::attack(6), I::attack(8), I::multi(3, 2)]),
            EnemyTemplate::new("mushroom", "Mushroom", 18, 1)
                .with_pattern([I::attack(4), I::strength(2), I::attack(6)]),
            EnemyTemplate::new("bat", "Bat", 15, 1)
                .with_pattern([I::attack(4), I::multi(2, 3), I::attack(6)]),
            EnemyTemplate::new("metal_slime", "Metal Slime", 15, 1)
                .with_pattern([I::defend(15), I::defend(20), I::attack(2)]),
            EnemyTemplate::new("poison_toad", "Poison Toad", 28, 1)
                .with_pattern([I::attack(3), I::defend(5), I::attack(7)]),
            EnemyTemplate::new("forest_guardian", "Forest Guardian", 55, 1)
                .boss()
                .with_pattern([I::attack(8), I::defend(10), I::strength(3), I::multi(4, 3)]),
            // Floor 2: caves
            EnemyTemplate::new("skeleton", "Skeleton", 30, 2)
                .with_pattern([I::attack(8), I::attack(10), I::defend(6)]),
            EnemyTemplate::new("golem", "Golem", 40, 2)
                .with_pattern([I::defend(10), I::attack(12), I::attack(14)]),
            EnemyTemplate::new("dark_mage", "Dark Mage", 28, 2)
                .with_pattern([I::strength(3), I::attack(10), I::multi(5, 2)]),
            EnemyTemplate::new("spider", "Spider", 32, 2)
                .with_pattern([I::multi(4, 3), I::attack(9), I::defend(5)]),
            EnemyTemplate::new("cave_dragon", "Cave Dragon", 80, 2)
                .boss()
                .with_pattern([I::attack(12), I::multi(6, 3), I::strength(4), I::attack(18)]),
            // Floor 3: castle
            EnemyTemplate::new("phantom", "Phantom", 38, 3)
                .with_pattern([I::attack(10), I::attack(14), I::strength(3)]),
            EnemyTemplate::new("demon", "Demon", 45, 3)
                .with_pattern([I::attack(14), I::multi(6, 3), I::defend(12)]),
            EnemyTemplate::new("dark_knight", "Dark Knight", 50, 3)
                .with_pattern([I::defend(8), I::attack(16), I::multi(7, 2)]),
            EnemyTemplate::new("word_king", "Word King", 120, 3)
                .boss()
                .with_pattern([
                    I::attack(14),
                    I::multi(7, 3),
                    I::defend(15),
                    I::strength(5),
                    I::attack(22),
                ]),
            EnemyTemplate::new("evolving_archive", "Evolving Archive", 150, 3)
                .boss()
                .with_pattern([I::attack(10), I::attack(12), I::defend(10), I::multi(5, 3)])
                .with_awakening(AwakeningRule {
                    threshold_percent: 50,
                    damage_taken_percent: 125,
                    strength: 4,
                }),
        ];

        let elites: [(u8, &[&str]); 3] = [
            (1, &["goblin", "mushroom", "metal_slime"]),
            (2, &["golem", "dark_mage"]),
            (3, &["demon", "dark_knight"]),
        ];

        let mut registry = Self::new();
        for template in templates {
            if let Err(err) = registry.register(template) {
                tracing::warn!(%err, "skipping built-in enemy");
            }
        }
        for (floor, keys) in elites {
            for key in keys {
                if let Err(err) = registry.add_elite(floor, key) {
                    tracing::warn!(%err, "skipping built-in elite");
                }
            }
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaling_percent() {
        assert_eq!(Encounter::new(1, 0).scaling_percent(), 100);
        assert_eq!(Encounter::new(2, 0).scaling_percent(), 130);
        assert_eq!(Encounter::new(3, 4).scaling_percent(), 180);
    }

    #[test]
    fn test_scaled_hp() {
        // 20 × 1.05 = 21
        assert_eq!(Encounter::new(1, 1).scaled_hp(20), 21);
        // 25 × 1.0 × 1.5 = 37.5 -> 38
        assert_eq!(Encounter::new(1, 0).elite().scaled_hp(25), 38);
        // 15 × 1.35 = 20.25 -> 21
        assert_eq!(Encounter::new(2, 1).scaled_hp(15), 21);
    }

    #[test]
    fn test_standard_bestiary() {
        let registry = EnemyRegistry::standard();
        assert_eq!(registry.len(), 17);
        assert_eq!(registry.floor_bosses(3).len(), 2);
        assert_eq!(registry.floor_enemies(1).len(), 6);
        assert_eq!(registry.elite_pool(2), &["golem".to_string(), "dark_mage".to_string()]);
        assert!(registry.get("evolving_archive").unwrap().awakening.is_some());
    }

    #[test]
    fn test_unknown_enemy_is_error() {
        let registry = EnemyRegistry::standard();
        assert_eq!(
            registry.spawn("dragon_king", Encounter::new(1, 0)).unwrap_err(),
            CatalogError::UnknownEnemy("dragon_king".into())
        );
    }

    #[test]
    fn test_empty_pattern_rejected() {
        let mut registry = EnemyRegistry::new();
        let err = registry.register(EnemyTemplate::new("rock", "Rock", 10, 1)).unwrap_err();
        assert_eq!(err, CatalogError::EmptyPattern("rock".into()));
    }
}
