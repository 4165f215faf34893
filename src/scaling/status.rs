//! Turn-limited buff and debuff entries.
//!
//! Entries are keyed by `StatusKind`; installing a kind that is already
//! present replaces its magnitude and duration. `tick` runs once at the start
//! of each player turn, and an entry whose counter reaches zero is removed.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Named status effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StatusKind {
    /// Percent multiplier on card damage (150 = ×1.5).
    Strength,
    /// Flat reduction of each enemy hit.
    Weakened,
    /// Percent multiplier on card damage from a potion.
    DamageMultiplier,
    /// Extra energy at the start of the next turn.
    NextTurnEnergy,
    /// Damage returned to the enemy for each hit that connects.
    ThornArmor,
}

impl StatusKind {
    /// All kinds, in display order.
    pub const ALL: [StatusKind; 5] = [
        StatusKind::Strength,
        StatusKind::Weakened,
        StatusKind::DamageMultiplier,
        StatusKind::NextTurnEnergy,
        StatusKind::ThornArmor,
    ];

    /// Whether card level-ups grow this kind by +1 rather than ×1.3.
    #[must_use]
    pub fn is_additive(self) -> bool {
        matches!(self, StatusKind::NextTurnEnergy)
    }
}

/// Magnitude plus remaining turns. `turns: None` lasts the whole battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEntry {
    pub value: i64,
    pub turns: Option<u32>,
}

/// The active statuses on one side of the battle.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSet {
    entries: FxHashMap<StatusKind, StatusEntry>,
}

impl StatusSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install or replace an entry.
    pub fn apply(&mut self, kind: StatusKind, value: i64, turns: Option<u32>) {
        if turns == Some(0) {
            self.entries.remove(&kind);
            return;
        }
        self.entries.insert(kind, StatusEntry { value, turns });
    }

    #[must_use]
    pub fn get(&self, kind: StatusKind) -> Option<&StatusEntry> {
        self.entries.get(&kind)
    }

    /// Magnitude of an active entry, or 0.
    #[must_use]
    pub fn value(&self, kind: StatusKind) -> i64 {
        self.entries.get(&kind).map_or(0, |e| e.value)
    }

    #[must_use]
    pub fn has(&self, kind: StatusKind) -> bool {
        self.entries.contains_key(&kind)
    }

    pub fn remove(&mut self, kind: StatusKind) -> Option<StatusEntry> {
        self.entries.remove(&kind)
    }

    /// Count every turn-limited entry down by one and drop the expired ones.
    ///
    /// Returns the kinds that expired.
    pub fn tick(&mut self) -> SmallVec<[StatusKind; 4]> {
        let mut expired = SmallVec::new();
        for (kind, entry) in &mut self.entries {
            if let Some(turns) = entry.turns.as_mut() {
                *turns = turns.saturating_sub(1);
                if *turns == 0 {
                    expired.push(*kind);
                }
            }
        }
        expired.sort_unstable();
        for kind in &expired {
            self.entries.remove(kind);
        }
        expired
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StatusKind, &StatusEntry)> {
        self.entries.iter().map(|(k, e)| (*k, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_replaces() {
        let mut set = StatusSet::new();
        set.apply(StatusKind::Weakened, 2, Some(1));
        set.apply(StatusKind::Weakened, 5, Some(3));

        assert_eq!(set.value(StatusKind::Weakened), 5);
        assert_eq!(set.get(StatusKind::Weakened).unwrap().turns, Some(3));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_tick_expires_at_zero() {
        let mut set = StatusSet::new();
        set.apply(StatusKind::Strength, 150, Some(1));
        set.apply(StatusKind::ThornArmor, 3, Some(2));

        let expired = set.tick();
        assert_eq!(expired.as_slice(), &[StatusKind::Strength]);
        assert!(!set.has(StatusKind::Strength));
        assert_eq!(set.get(StatusKind::ThornArmor).unwrap().turns, Some(1));

        let expired = set.tick();
        assert_eq!(expired.as_slice(), &[StatusKind::ThornArmor]);
        assert!(set.is_empty());
    }

    #[test]
    fn test_battle_long_entries_never_expire() {
        let mut set = StatusSet::new();
        set.apply(StatusKind::DamageMultiplier, 150, None);
        for _ in 0..10 {
            set.tick();
        }
        assert_eq!(set.value(StatusKind::DamageMultiplier), 150);
    }

    #[test]
    fn test_zero_turns_removes() {
        let mut set = StatusSet::new();
        set.apply(StatusKind::Weakened, 2, Some(1));
        set.apply(StatusKind::Weakened, 2, Some(0));
        assert!(!set.has(StatusKind::Weakened));
        assert_eq!(set.value(StatusKind::Weakened), 0);
    }
}
