//! Runtime identifiers.
//!
//! A card template (`CardId`) describes what a card *is*; an `InstanceId`
//! names one specific copy of it inside a run deck. Copies keep their
//! `InstanceId` while moving between piles and across battles, and lose it
//! only when removed from the deck.
//!
//! ```
//! use quiz_battle::core::{InstanceId, WordId};
//!
//! let card = InstanceId::new(7);
//! assert_eq!(card.raw(), 7);
//! assert_eq!(format!("{}", WordId::new(3)), "Word(3)");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card instance in a run deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl InstanceId {
    /// Create a new instance ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for InstanceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instance({})", self.0)
    }
}

/// Identifier for a vocabulary entry.
///
/// Word ids are owned by the word provider; the battle engine only passes
/// them back to the spaced-repetition collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WordId(pub u32);

impl WordId {
    /// Create a new word ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for WordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Word({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_id_roundtrip() {
        let id = InstanceId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(InstanceId::from(42), id);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", InstanceId(5)), "Instance(5)");
        assert_eq!(format!("{}", WordId(9)), "Word(9)");
    }

    #[test]
    fn test_ordering() {
        assert!(InstanceId(1) < InstanceId(2));
        assert!(WordId(10) > WordId(3));
    }

    #[test]
    fn test_serialization() {
        let id = InstanceId(123);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: InstanceId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
