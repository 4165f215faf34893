//! Battle configuration types.
//!
//! - `BattleConfig`: per-battle tuning (seed, hand size, difficulty cap)
//! - `PlayerProfile`: the player's carried-in vitals for one battle
//!
//! Both deserialize with defaults for every missing field, so a config file
//! only needs to name what it overrides.

use serde::{Deserialize, Serialize};

/// Cards drawn at the start of every player turn.
pub const DEFAULT_HAND_SIZE: usize = 5;

/// Highest word difficulty a battle ever asks.
pub const DEFAULT_MAX_DIFFICULTY: u8 = 3;

/// Enemy poison needed before a weak-point card arms the double attack.
pub const DEFAULT_WEAK_POINT_THRESHOLD: i64 = 3;

/// Battle configuration.
///
/// ```
/// use quiz_battle::core::BattleConfig;
///
/// let config = BattleConfig::new(7).with_hand_size(6);
/// assert_eq!(config.seed, 7);
/// assert_eq!(config.hand_size, 6);
/// assert_eq!(config.max_difficulty, 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// Seed for pile shuffles, word picks and question layout.
    pub seed: u64,

    /// Cards drawn per turn (before relic bonuses on the opening draw).
    pub hand_size: usize,

    /// Upper bound for the quiz difficulty cap.
    pub max_difficulty: u8,

    /// Poison threshold for weak-point cards.
    pub weak_point_threshold: i64,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            hand_size: DEFAULT_HAND_SIZE,
            max_difficulty: DEFAULT_MAX_DIFFICULTY,
            weak_point_threshold: DEFAULT_WEAK_POINT_THRESHOLD,
        }
    }
}

impl BattleConfig {
    /// Create a configuration with the given seed and default tuning.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Set the per-turn hand size.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Set the quiz difficulty ceiling.
    #[must_use]
    pub fn with_max_difficulty(mut self, max_difficulty: u8) -> Self {
        self.max_difficulty = max_difficulty.max(1);
        self
    }

    /// Set the weak-point poison threshold.
    #[must_use]
    pub fn with_weak_point_threshold(mut self, threshold: i64) -> Self {
        self.weak_point_threshold = threshold;
        self
    }
}

/// Player vitals entering a battle.
///
/// HP persists across a run; energy is the base per-turn maximum before
/// relic and card bonuses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerProfile {
    pub hp: i64,
    pub max_hp: i64,
    pub max_energy: i64,
}

impl Default for PlayerProfile {
    fn default() -> Self {
        Self {
            hp: 60,
            max_hp: 60,
            max_energy: 3,
        }
    }
}

impl PlayerProfile {
    /// Create a profile with full HP.
    #[must_use]
    pub fn new(max_hp: i64, max_energy: i64) -> Self {
        Self {
            hp: max_hp,
            max_hp,
            max_energy,
        }
    }

    /// Enter the battle wounded.
    #[must_use]
    pub fn with_hp(mut self, hp: i64) -> Self {
        self.hp = hp.clamp(0, self.max_hp);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BattleConfig::default();
        assert_eq!(config.hand_size, 5);
        assert_eq!(config.max_difficulty, 3);
        assert_eq!(config.weak_point_threshold, 3);

        let profile = PlayerProfile::default();
        assert_eq!((profile.hp, profile.max_hp, profile.max_energy), (60, 60, 3));
    }

    #[test]
    fn test_builder() {
        let config = BattleConfig::new(99)
            .with_hand_size(4)
            .with_max_difficulty(0)
            .with_weak_point_threshold(5);

        assert_eq!(config.seed, 99);
        assert_eq!(config.hand_size, 4);
        assert_eq!(config.max_difficulty, 1);
        assert_eq!(config.weak_point_threshold, 5);
    }

    #[test]
    fn test_partial_deserialize_uses_defaults() {
        let config: BattleConfig = serde_json::from_str(r#"{"seed": 12}"#).unwrap();
        assert_eq!(config.seed, 12);
        assert_eq!(config.hand_size, DEFAULT_HAND_SIZE);

        let profile: PlayerProfile = serde_json::from_str(r#"{"hp": 20}"#).unwrap();
        assert_eq!(profile.hp, 20);
        assert_eq!(profile.max_hp, 60);
    }

    #[test]
    fn test_profile_with_hp_clamps() {
        let profile = PlayerProfile::new(50, 3).with_hp(80);
        assert_eq!(profile.hp, 50);
        assert_eq!(PlayerProfile::new(50, 3).with_hp(-4).hp, 0);
    }
}
