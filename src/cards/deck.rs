//! The run deck: every card instance the player owns between battles.

use serde::{Deserialize, Serialize};

use super::instance::CardInstance;
use super::registry::CardRegistry;
use crate::core::{CatalogError, InstanceId};

/// Starter deck composition as (card key, copies).
pub const STARTER_DECK: &[(&str, usize)] = &[
    ("slash", 4),
    ("shield", 3),
    ("quick_slash", 2),
    ("heal", 1),
];

/// The player's deck.
///
/// Allocates instance ids; an instance is destroyed only by `remove`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<CardInstance>,
    next_id: u32,
}

impl Deck {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the starter deck from `registry`.
    pub fn starter(registry: &CardRegistry) -> Result<Self, CatalogError> {
        let mut deck = Self::new();
        for &(key, copies) in STARTER_DECK {
            for _ in 0..copies {
                deck.add(registry, key)?;
            }
        }
        Ok(deck)
    }

    /// Instantiate `key` into a new copy and add it.
    pub fn add(&mut self, registry: &CardRegistry, key: &str) -> Result<InstanceId, CatalogError> {
        let id = InstanceId::new(self.next_id);
        let card = registry.instantiate(key, id)?;
        self.next_id += 1;
        self.cards.push(card);
        Ok(id)
    }

    /// Remove a copy from the deck for good.
    pub fn remove(&mut self, id: InstanceId) -> Option<CardInstance> {
        let index = self.cards.iter().position(|c| c.id == id)?;
        Some(self.cards.remove(index))
    }

    #[must_use]
    pub fn get(&self, id: InstanceId) -> Option<&CardInstance> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Copies handed to a new battle.
    #[must_use]
    pub fn battle_copies(&self) -> Vec<CardInstance> {
        self.cards.clone()
    }

    /// Take back the instances a finished battle returns, keeping their
    /// level-ups and growth. Unknown ids are ignored.
    pub fn absorb(&mut self, cards: impl IntoIterator<Item = CardInstance>) {
        for card in cards {
            if let Some(slot) = self.cards.iter_mut().find(|c| c.id == card.id) {
                *slot = card;
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardInstance> {
        self.cards.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardCatalog;

    #[test]
    fn test_starter_deck() {
        let registry = CardRegistry::standard();
        let deck = Deck::starter(&registry).unwrap();
        assert_eq!(deck.len(), 10);

        let slashes = deck
            .iter()
            .filter(|c| registry.template(c.template).unwrap().key == "slash")
            .count();
        assert_eq!(slashes, 4);
    }

    #[test]
    fn test_ids_are_unique() {
        let registry = CardRegistry::standard();
        let deck = Deck::starter(&registry).unwrap();
        let mut ids: Vec<_> = deck.iter().map(|c| c.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), deck.len());
    }

    #[test]
    fn test_add_unknown_fails_without_consuming_id() {
        let registry = CardRegistry::standard();
        let mut deck = Deck::new();
        assert!(deck.add(&registry, "nope").is_err());
        assert_eq!(deck.add(&registry, "slash").unwrap(), InstanceId(0));
    }

    #[test]
    fn test_remove() {
        let registry = CardRegistry::standard();
        let mut deck = Deck::starter(&registry).unwrap();
        let removed = deck.remove(InstanceId(0)).unwrap();
        assert_eq!(removed.id, InstanceId(0));
        assert_eq!(deck.len(), 9);
        assert!(deck.remove(InstanceId(0)).is_none());
    }

    #[test]
    fn test_absorb_keeps_growth() {
        let registry = CardRegistry::standard();
        let mut deck = Deck::starter(&registry).unwrap();
        let mut copies = deck.battle_copies();
        copies[0].grow_damage(5);
        deck.absorb(copies);
        assert_eq!(deck.get(InstanceId(0)).unwrap().stats().damage, 11);
    }
}
