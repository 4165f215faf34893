//! Potions: single-use consumables held in a small belt.

use serde::{Deserialize, Serialize};

use crate::core::InventoryError;

/// Default belt size.
pub const POTION_CAPACITY: usize = 3;

/// What a potion does when drunk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PotionKind {
    /// Restore HP, clamped to max.
    Heal(i64),
    /// Energy for the current turn only.
    Energy(i64),
    /// Card damage percent for the rest of the battle.
    DamageMultiplier(i64),
    /// Wrong choices eliminated on the next multiple-choice question.
    Hint(u32),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Potion {
    pub key: String,
    pub name: String,
    pub kind: PotionKind,
}

impl Potion {
    pub fn new(key: impl Into<String>, name: impl Into<String>, kind: PotionKind) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            kind,
        }
    }
}

#[must_use]
pub fn standard_potions() -> Vec<Potion> {
    vec![
        Potion::new("health_potion", "Health Potion", PotionKind::Heal(15)),
        Potion::new("energy_potion", "Energy Potion", PotionKind::Energy(2)),
        Potion::new("power_potion", "Power Potion", PotionKind::DamageMultiplier(150)),
        Potion::new("hint_potion", "Hint Potion", PotionKind::Hint(2)),
    ]
}

pub fn standard_potion(key: &str) -> Result<Potion, InventoryError> {
    standard_potions()
        .into_iter()
        .find(|p| p.key == key)
        .ok_or_else(|| InventoryError::UnknownPotion(key.to_string()))
}

/// Potion inventory with a fixed capacity. Slots are indexed from 0.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotionBelt {
    slots: Vec<Potion>,
    capacity: usize,
}

impl Default for PotionBelt {
    fn default() -> Self {
        Self::new(POTION_CAPACITY)
    }
}

impl PotionBelt {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn add(&mut self, potion: Potion) -> Result<(), InventoryError> {
        if self.is_full() {
            return Err(InventoryError::PotionBeltFull {
                capacity: self.capacity,
            });
        }
        self.slots.push(potion);
        Ok(())
    }

    /// Remove and return the potion in `slot`; later slots shift down.
    pub fn take(&mut self, slot: usize) -> Option<Potion> {
        (slot < self.slots.len()).then(|| self.slots.remove(slot))
    }

    #[must_use]
    pub fn get(&self, slot: usize) -> Option<&Potion> {
        self.slots.get(slot)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Potion> {
        self.slots.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity() {
        let mut belt = PotionBelt::default();
        for _ in 0..3 {
            belt.add(standard_potion("health_potion").unwrap()).unwrap();
        }
        assert!(belt.is_full());
        assert_eq!(
            belt.add(standard_potion("hint_potion").unwrap()),
            Err(InventoryError::PotionBeltFull { capacity: 3 })
        );
    }

    #[test]
    fn test_take_shifts_slots() {
        let mut belt = PotionBelt::default();
        belt.add(standard_potion("health_potion").unwrap()).unwrap();
        belt.add(standard_potion("energy_potion").unwrap()).unwrap();

        let first = belt.take(0).unwrap();
        assert_eq!(first.kind, PotionKind::Heal(15));
        assert_eq!(belt.get(0).unwrap().kind, PotionKind::Energy(2));
        assert!(belt.take(5).is_none());
    }
}
