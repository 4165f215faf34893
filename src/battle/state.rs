//! Battle state types.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::{InstanceId, PlayerProfile, WordId};
use crate::effects::AppliedEffect;
use crate::enemies::{mitigate, Mitigation};
use crate::quiz::Question;

/// Where the battle's state machine is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattlePhase {
    PlayerTurn,
    QuizActive,
    EnemyTurn,
    Victory,
    Defeat,
}

impl BattlePhase {
    /// Victory and defeat end the battle.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, BattlePhase::Victory | BattlePhase::Defeat)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            BattlePhase::PlayerTurn => "player_turn",
            BattlePhase::QuizActive => "quiz_active",
            BattlePhase::EnemyTurn => "enemy_turn",
            BattlePhase::Victory => "victory",
            BattlePhase::Defeat => "defeat",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattleOutcome {
    Victory,
    Defeat,
}

impl From<BattleOutcome> for BattlePhase {
    fn from(outcome: BattleOutcome) -> Self {
        match outcome {
            BattleOutcome::Victory => BattlePhase::Victory,
            BattleOutcome::Defeat => BattlePhase::Defeat,
        }
    }
}

/// The player side of a battle.
///
/// All values floor at 0; heals never exceed `max_hp`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantState {
    pub hp: i64,
    pub max_hp: i64,
    pub energy: i64,
    /// Per-turn energy before relic and card bonuses.
    pub base_energy: i64,
    /// Maximum energy gained from cards this battle.
    pub energy_bonus: i64,
    pub block: i64,
    /// Block that becomes next turn's starting block.
    pub persistent_block: i64,
    /// Flat damage added to every attack for the rest of the battle.
    pub damage_buff: i64,
    /// The next attack deals double damage.
    pub double_next: bool,
    /// Template of the last card that resolved at least one hit.
    pub last_played: Option<CardId>,
    pub correct_answers: u32,
    /// Largest pre-block damage total this battle.
    pub max_damage: i64,
    /// Sum of the difficulty of every word answered correctly.
    pub wisdom: u32,
}

impl CombatantState {
    #[must_use]
    pub fn from_profile(profile: &PlayerProfile) -> Self {
        Self {
            hp: profile.hp.min(profile.max_hp).max(0),
            max_hp: profile.max_hp,
            energy: profile.max_energy,
            base_energy: profile.max_energy,
            ..Self::default()
        }
    }

    /// Heal up to `max_hp`. Returns the HP actually restored.
    pub fn heal(&mut self, amount: i64) -> i64 {
        let before = self.hp;
        self.hp = (self.hp + amount.max(0)).min(self.max_hp);
        self.hp - before
    }

    /// Take a hit through block.
    pub fn absorb(&mut self, total: i64) -> Mitigation {
        let m = mitigate(total, self.block);
        self.block = m.remaining_block;
        self.hp = (self.hp - m.hp_damage).max(0);
        m
    }

    #[must_use]
    pub fn hp_lost(&self) -> i64 {
        (self.max_hp - self.hp).max(0)
    }

    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }

    /// Pay for a card.
    pub fn spend_energy(&mut self, cost: i64) {
        self.energy = (self.energy - cost.max(0)).max(0);
    }
}

/// A card activation waiting on its answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveQuiz {
    pub card: InstanceId,
    pub template: CardId,
    pub cost: i64,
    pub question: Question,
    /// Correct answers so far in this activation.
    pub hits_landed: u32,
    pub required_hits: u32,
    /// Words already asked in this activation.
    pub asked: Vec<WordId>,
}

/// What answering a question did.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuizResolution {
    pub correct: bool,
    pub combo: u32,
    /// Combo multiplier in percent.
    pub combo_multiplier: i64,
    pub combo_text: String,
    pub effects: Vec<AppliedEffect>,
    /// Next sub-question when the card asks for more hits.
    pub follow_up: Option<Question>,
    pub phase: BattlePhase,
}

/// End-of-battle snapshot for the meta layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleSummary {
    /// `None` while the battle is still running.
    pub outcome: Option<BattleOutcome>,
    pub turns: u32,
    pub correct_answers: u32,
    pub max_combo: u32,
    pub enemy_key: String,
    pub enemy_name: String,
    pub is_boss: bool,
    pub wisdom: u32,
    pub max_damage: i64,
}
