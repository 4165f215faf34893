//! Error types.
//!
//! - `CatalogError`: content lookups that miss. These are content bugs and
//!   fail battle/deck creation outright.
//! - `InventoryError`: run inventory mutations refused between battles.
//! - `RejectReason`: a caller action refused inside a battle; the battle
//!   stays unchanged and an `error` event carries the message.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::scaling::RelicKind;

/// Unknown or malformed catalog content.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("unknown card '{0}'")]
    UnknownCard(String),

    #[error("unknown card template {0}")]
    UnknownCardId(CardId),

    #[error("card '{0}' is already registered")]
    DuplicateCard(String),

    #[error("unknown enemy '{0}'")]
    UnknownEnemy(String),

    #[error("enemy '{0}' has no intent pattern")]
    EmptyPattern(String),
}

/// Relic/potion inventory refusals.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    #[error("a relic of kind {0:?} is already held")]
    DuplicateRelic(RelicKind),

    #[error("potion belt is full ({capacity} slots)")]
    PotionBeltFull { capacity: usize },

    #[error("unknown relic '{0}'")]
    UnknownRelic(String),

    #[error("unknown potion '{0}'")]
    UnknownPotion(String),
}

/// Why a caller action was refused during a battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum RejectReason {
    #[error("not enough energy: card costs {cost}, {available} available")]
    InsufficientEnergy { cost: i64, available: i64 },

    #[error("no eligible word to ask (difficulty cap {max_difficulty})")]
    NoWordsAvailable { max_difficulty: u8 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_messages() {
        assert_eq!(
            CatalogError::UnknownCard("fire".into()).to_string(),
            "unknown card 'fire'"
        );
        assert_eq!(
            CatalogError::UnknownCardId(CardId::new(4)).to_string(),
            "unknown card template Card(4)"
        );
    }

    #[test]
    fn test_reject_reason_is_human_readable() {
        let reason = RejectReason::InsufficientEnergy { cost: 2, available: 1 };
        assert_eq!(reason.to_string(), "not enough energy: card costs 2, 1 available");
    }

    #[test]
    fn test_inventory_error_messages() {
        let err = InventoryError::PotionBeltFull { capacity: 3 };
        assert_eq!(err.to_string(), "potion belt is full (3 slots)");
    }
}
