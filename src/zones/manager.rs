//! Pile manager for card locations and movement.
//!
//! The `PileManager` owns a battle's card instances and tracks which of the
//! four piles each one is in. The piles always partition the deck: every
//! instance is in exactly one pile.
//!
//! Each pile is an ordered vector whose last element is the top. Only
//! `draw` reorders the draw pile, by reshuffling the discard pile into it
//! when it runs dry mid-draw.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::CardInstance;
use crate::core::{GameRng, InstanceId};

/// The four piles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pile {
    Draw,
    Hand,
    Discard,
    Exhaust,
}

/// Manages card locations across piles.
///
/// ## Usage
///
/// ```
/// use quiz_battle::cards::CardRegistry;
/// use quiz_battle::core::{GameRng, InstanceId};
/// use quiz_battle::zones::{Pile, PileManager};
///
/// let registry = CardRegistry::standard();
/// let cards = (0..6)
///     .map(|i| registry.instantiate("slash", InstanceId::new(i)).unwrap())
///     .collect();
///
/// let mut rng = GameRng::new(1);
/// let mut piles = PileManager::new(cards, &mut rng);
/// let drawn = piles.draw(5, &mut rng);
///
/// assert_eq!(drawn.len(), 5);
/// assert_eq!(piles.pile(Pile::Draw).len(), 1);
/// assert!(piles.play(drawn[0]));
/// assert_eq!(piles.pile_of(drawn[0]), Some(Pile::Discard));
/// ```
#[derive(Clone, Debug, Default)]
pub struct PileManager {
    cards: FxHashMap<InstanceId, CardInstance>,

    /// Card locations: instance -> pile
    locations: FxHashMap<InstanceId, Pile>,

    draw_pile: Vec<InstanceId>,
    hand: Vec<InstanceId>,
    discard: Vec<InstanceId>,
    exhaust: Vec<InstanceId>,
}

impl PileManager {
    /// Put every card in the draw pile and shuffle it.
    #[must_use]
    pub fn new(cards: Vec<CardInstance>, rng: &mut GameRng) -> Self {
        let mut manager = Self::default();
        for card in cards {
            let id = card.id;
            if manager.cards.insert(id, card).is_some() {
                tracing::warn!(card = %id, "duplicate instance id in battle deck");
                continue;
            }
            manager.locations.insert(id, Pile::Draw);
            manager.draw_pile.push(id);
        }
        rng.shuffle(&mut manager.draw_pile);
        manager
    }

    /// Draw up to `count` cards into hand.
    ///
    /// When the draw pile empties mid-draw the discard pile is shuffled in.
    /// Stops short silently when both are empty. Returns the drawn ids.
    pub fn draw(&mut self, count: usize, rng: &mut GameRng) -> Vec<InstanceId> {
        let mut drawn = Vec::with_capacity(count);
        while drawn.len() < count {
            if self.draw_pile.is_empty() {
                if self.discard.is_empty() {
                    break;
                }
                self.reshuffle(rng);
            }
            let Some(id) = self.draw_pile.pop() else {
                break;
            };
            self.hand.push(id);
            self.locations.insert(id, Pile::Hand);
            drawn.push(id);
        }
        tracing::debug!(requested = count, drawn = drawn.len(), "draw");
        drawn
    }

    fn reshuffle(&mut self, rng: &mut GameRng) {
        tracing::debug!(cards = self.discard.len(), "reshuffling discard into draw pile");
        let mut cards = std::mem::take(&mut self.discard);
        for id in &cards {
            self.locations.insert(*id, Pile::Draw);
        }
        cards.append(&mut self.draw_pile);
        rng.shuffle(&mut cards);
        self.draw_pile = cards;
    }

    /// Move a hand card to discard.
    pub fn play(&mut self, id: InstanceId) -> bool {
        self.move_from_hand(id, Pile::Discard)
    }

    /// Move a hand card to the exhaust pile.
    pub fn exhaust(&mut self, id: InstanceId) -> bool {
        self.move_from_hand(id, Pile::Exhaust)
    }

    fn move_from_hand(&mut self, id: InstanceId, to: Pile) -> bool {
        let Some(index) = self.hand.iter().position(|&c| c == id) else {
            return false;
        };
        self.hand.remove(index);
        self.locations.insert(id, to);
        match to {
            Pile::Discard => self.discard.push(id),
            Pile::Exhaust => self.exhaust.push(id),
            Pile::Draw => self.draw_pile.push(id),
            Pile::Hand => self.hand.push(id),
        }
        true
    }

    /// Empty the hand into discard. Returns how many cards moved.
    pub fn discard_hand(&mut self) -> usize {
        let hand = std::mem::take(&mut self.hand);
        for id in &hand {
            self.locations.insert(*id, Pile::Discard);
        }
        let moved = hand.len();
        self.discard.extend(hand);
        moved
    }

    /// Which pile a card is in.
    #[must_use]
    pub fn pile_of(&self, id: InstanceId) -> Option<Pile> {
        self.locations.get(&id).copied()
    }

    /// Cards in a pile, bottom first.
    #[must_use]
    pub fn pile(&self, pile: Pile) -> &[InstanceId] {
        match pile {
            Pile::Draw => &self.draw_pile,
            Pile::Hand => &self.hand,
            Pile::Discard => &self.discard,
            Pile::Exhaust => &self.exhaust,
        }
    }

    #[must_use]
    pub fn hand(&self) -> &[InstanceId] {
        &self.hand
    }

    #[must_use]
    pub fn in_hand(&self, id: InstanceId) -> bool {
        self.pile_of(id) == Some(Pile::Hand)
    }

    #[must_use]
    pub fn card(&self, id: InstanceId) -> Option<&CardInstance> {
        self.cards.get(&id)
    }

    pub fn card_mut(&mut self, id: InstanceId) -> Option<&mut CardInstance> {
        self.cards.get_mut(&id)
    }

    /// Get total number of cards tracked.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.cards.len()
    }

    /// Release the instances, ordered by id.
    #[must_use]
    pub fn into_cards(self) -> Vec<CardInstance> {
        let mut cards: Vec<_> = self.cards.into_values().collect();
        cards.sort_by_key(|c| c.id);
        cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardRegistry;

    fn manager(n: u32, rng: &mut GameRng) -> PileManager {
        let registry = CardRegistry::standard();
        let cards = (0..n)
            .map(|i| registry.instantiate("slash", InstanceId(i)).unwrap())
            .collect();
        PileManager::new(cards, rng)
    }

    fn pile_sizes(m: &PileManager) -> [usize; 4] {
        [Pile::Draw, Pile::Hand, Pile::Discard, Pile::Exhaust].map(|p| m.pile(p).len())
    }

    #[test]
    fn test_new_puts_everything_in_draw() {
        let mut rng = GameRng::new(1);
        let m = manager(10, &mut rng);
        assert_eq!(pile_sizes(&m), [10, 0, 0, 0]);
        assert_eq!(m.total_cards(), 10);
    }

    #[test]
    fn test_draw_reshuffles_discard() {
        let mut rng = GameRng::new(1);
        let mut m = manager(6, &mut rng);

        m.draw(5, &mut rng);
        m.discard_hand();
        assert_eq!(pile_sizes(&m), [1, 0, 5, 0]);

        let drawn = m.draw(5, &mut rng);
        assert_eq!(drawn.len(), 5);
        assert_eq!(pile_sizes(&m), [1, 5, 0, 0]);
    }

    #[test]
    fn test_draw_stops_short_when_empty() {
        let mut rng = GameRng::new(1);
        let mut m = manager(3, &mut rng);
        let drawn = m.draw(5, &mut rng);
        assert_eq!(drawn.len(), 3);
        assert!(m.draw(2, &mut rng).is_empty());
    }

    #[test]
    fn test_exhausted_cards_never_return() {
        let mut rng = GameRng::new(1);
        let mut m = manager(2, &mut rng);
        let drawn = m.draw(2, &mut rng);
        assert!(m.exhaust(drawn[0]));
        m.discard_hand();

        let again = m.draw(2, &mut rng);
        assert_eq!(again, vec![drawn[1]]);
        assert_eq!(m.pile_of(drawn[0]), Some(Pile::Exhaust));
    }

    #[test]
    fn test_play_requires_hand() {
        let mut rng = GameRng::new(1);
        let mut m = manager(2, &mut rng);
        let top = *m.pile(Pile::Draw).last().unwrap();
        assert!(!m.play(top));
        assert_eq!(m.pile_of(top), Some(Pile::Draw));
    }

    #[test]
    fn test_into_cards_returns_everything() {
        let mut rng = GameRng::new(1);
        let mut m = manager(4, &mut rng);
        let drawn = m.draw(2, &mut rng);
        m.exhaust(drawn[0]);
        let cards = m.into_cards();
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].id, InstanceId(0));
    }
}
