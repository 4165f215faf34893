//! The battle orchestrator.
//!
//! A `Battle` owns the per-battle state (player, enemy, piles, active quiz)
//! and borrows the run-scoped collaborators through `BattleContext`. Every
//! mutation happens inside one of four calls: `select_card`, `answer_quiz`,
//! `end_turn` and `use_potion`, or `apply` which dispatches a `BattleAction`
//! to them.

mod enemy_turn;
pub mod orchestrator;
mod resolve;
pub mod state;

pub use orchestrator::{Battle, BattleContext};
pub use state::{ActiveQuiz, BattleOutcome, BattlePhase, BattleSummary, CombatantState, QuizResolution};
