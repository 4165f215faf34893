//! Caller actions accepted by a battle.
//!
//! A battle only changes state in response to one of four actions. Each
//! accepted action is recorded with its turn and sequence number so a
//! presentation layer can show a battle log.

use serde::{Deserialize, Serialize};

use super::entity::InstanceId;
use crate::quiz::Answer;

/// A single caller action.
///
/// ```
/// use quiz_battle::core::{BattleAction, InstanceId};
/// use quiz_battle::quiz::Answer;
///
/// let pick = BattleAction::SelectCard(InstanceId::new(3));
/// let reply = BattleAction::Answer(Answer::Choice(1));
/// assert_eq!(pick.name(), "select_card");
/// assert_eq!(reply.name(), "answer");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleAction {
    /// Pick a card from hand and open its quiz.
    SelectCard(InstanceId),

    /// Answer the active quiz question.
    Answer(Answer),

    /// End the player turn; the enemy acts and a new turn begins.
    EndTurn,

    /// Drink the potion in the given belt slot.
    UsePotion(usize),
}

impl BattleAction {
    /// Stable snake_case name, used in logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectCard(_) => "select_card",
            Self::Answer(_) => "answer",
            Self::EndTurn => "end_turn",
            Self::UsePotion(_) => "use_potion",
        }
    }
}

/// An accepted action with its position in the battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The action taken.
    pub action: BattleAction,

    /// Turn number when the action was taken.
    pub turn: u32,

    /// Sequence number across the whole battle.
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(action: BattleAction, turn: u32, sequence: u32) -> Self {
        Self {
            action,
            turn,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(BattleAction::EndTurn.name(), "end_turn");
        assert_eq!(BattleAction::UsePotion(0).name(), "use_potion");
    }

    #[test]
    fn test_record_serialization() {
        let record = ActionRecord::new(BattleAction::Answer(Answer::Typed("apple".into())), 2, 5);
        let json = serde_json::to_string(&record).unwrap();
        let back: ActionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
