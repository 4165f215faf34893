//! Typed battle events.

use serde::{Deserialize, Serialize};

use crate::battle::{BattleOutcome, BattlePhase};
use crate::core::{InstanceId, RejectReason};
use crate::effects::AppliedEffect;
use crate::enemies::{EnemyState, Intent};
use crate::quiz::Question;
use crate::scaling::PotionOutcome;

/// Event names, used as subscription keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattleEventKind {
    BattleStart,
    StateChange,
    QuizStart,
    QuizResult,
    EnemyTurn,
    NewTurn,
    PotionUsed,
    BattleEnd,
    Error,
}

impl BattleEventKind {
    pub const ALL: [BattleEventKind; 9] = [
        BattleEventKind::BattleStart,
        BattleEventKind::StateChange,
        BattleEventKind::QuizStart,
        BattleEventKind::QuizResult,
        BattleEventKind::EnemyTurn,
        BattleEventKind::NewTurn,
        BattleEventKind::PotionUsed,
        BattleEventKind::BattleEnd,
        BattleEventKind::Error,
    ];

    /// Stable snake_case name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            BattleEventKind::BattleStart => "battle_start",
            BattleEventKind::StateChange => "state_change",
            BattleEventKind::QuizStart => "quiz_start",
            BattleEventKind::QuizResult => "quiz_result",
            BattleEventKind::EnemyTurn => "enemy_turn",
            BattleEventKind::NewTurn => "new_turn",
            BattleEventKind::PotionUsed => "potion_used",
            BattleEventKind::BattleEnd => "battle_end",
            BattleEventKind::Error => "error",
        }
    }
}

/// Something that happened in a battle, with its fixed payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum BattleEvent {
    BattleStart {
        drawn: Vec<InstanceId>,
        enemy: Box<EnemyState>,
        intent: Option<Intent>,
    },
    StateChange {
        phase: BattlePhase,
    },
    QuizStart {
        question: Box<Question>,
        card: InstanceId,
    },
    QuizResult {
        card: InstanceId,
        correct: bool,
        combo: u32,
        /// Combo multiplier in percent after this answer.
        combo_multiplier: i64,
        /// Display label such as "GOOD! x1.4"; empty below a streak of 2.
        combo_text: String,
        effects: Vec<AppliedEffect>,
        /// Next sub-question of a double-choice card.
        follow_up: Option<Box<Question>>,
    },
    EnemyTurn {
        intent: Option<Intent>,
        effects: Vec<AppliedEffect>,
    },
    NewTurn {
        turn: u32,
        drawn: Vec<InstanceId>,
        energy: i64,
    },
    PotionUsed {
        slot: usize,
        outcome: PotionOutcome,
    },
    BattleEnd {
        outcome: BattleOutcome,
    },
    Error {
        reason: RejectReason,
    },
}

impl BattleEvent {
    #[must_use]
    pub fn kind(&self) -> BattleEventKind {
        match self {
            BattleEvent::BattleStart { .. } => BattleEventKind::BattleStart,
            BattleEvent::StateChange { .. } => BattleEventKind::StateChange,
            BattleEvent::QuizStart { .. } => BattleEventKind::QuizStart,
            BattleEvent::QuizResult { .. } => BattleEventKind::QuizResult,
            BattleEvent::EnemyTurn { .. } => BattleEventKind::EnemyTurn,
            BattleEvent::NewTurn { .. } => BattleEventKind::NewTurn,
            BattleEvent::PotionUsed { .. } => BattleEventKind::PotionUsed,
            BattleEvent::BattleEnd { .. } => BattleEventKind::BattleEnd,
            BattleEvent::Error { .. } => BattleEventKind::Error,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Human-readable reason carried by an `Error` event.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        match self {
            BattleEvent::Error { reason } => Some(reason.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_unique() {
        let mut names: Vec<&str> = BattleEventKind::ALL.iter().map(|k| k.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), BattleEventKind::ALL.len());
    }

    #[test]
    fn test_error_message() {
        let event = BattleEvent::Error {
            reason: RejectReason::InsufficientEnergy { cost: 2, available: 1 },
        };
        assert_eq!(event.kind(), BattleEventKind::Error);
        assert_eq!(
            event.error_message().as_deref(),
            Some("not enough energy: card costs 2, 1 available")
        );
        assert_eq!(BattleEvent::StateChange { phase: BattlePhase::PlayerTurn }.error_message(), None);
    }
}
