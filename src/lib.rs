//! # quiz-battle
//!
//! Battle resolution engine for a turn-based card roguelike in which every
//! card is gated by a vocabulary quiz: a card only takes effect if its
//! question is answered correctly.
//!
//! ## Design Principles
//!
//! 1. **Quiz Gate**: A wrong answer voids the card's effect but still pays
//!    its cost and moves it out of hand.
//!
//! 2. **Fixed Resolution Order**: Damage flows through an ordered pipeline of
//!    stages; side effects follow in a fixed order. Card specials are tagged
//!    descriptors read by that pipeline, not ad hoc flags.
//!
//! 3. **No Hidden Globals**: The card catalog, word provider and learning
//!    tracker are injected into each battle through `BattleContext`.
//!
//! 4. **Integer Math**: Multipliers are integer percents rounded up after
//!    each step, so results are exact and reproducible.
//!
//! ## Architecture
//!
//! - **Versioned Card Stats**: Level-ups and snowball growth push a new stat
//!   version onto an `im::Vector`; templates are never mutated.
//!
//! - **Typed Events**: Everything observable is a `BattleEvent` variant,
//!   routed by an `EventBus`.
//!
//! ## Modules
//!
//! - `core`: Ids, RNG, configuration, caller actions, errors
//! - `cards`: Templates, stats, instances, catalog, deck
//! - `zones`: Draw, hand, discard and exhaust piles
//! - `enemies`: Enemy templates, state and the intent cycle
//! - `scaling`: Combo, relics, potions, statuses and the damage formula
//! - `effects`: Effect descriptors and the damage pipeline
//! - `quiz`: Questions, answers and the vocabulary collaborators
//! - `events`: Battle events and the event bus
//! - `battle`: The orchestrator

pub mod battle;
pub mod cards;
pub mod core;
pub mod effects;
pub mod enemies;
pub mod events;
pub mod quiz;
pub mod scaling;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    ActionRecord, BattleAction, BattleConfig, CatalogError, GameRng, InstanceId, InventoryError, PlayerProfile,
    RejectReason, WordId,
};

pub use crate::cards::{
    CardCatalog, CardCategory, CardId, CardInstance, CardRegistry, CardStats, CardTemplate, Deck, QuizMode, Rarity,
};

pub use crate::zones::{Pile, PileManager};

pub use crate::enemies::{Encounter, EnemyRegistry, EnemyState, EnemyTemplate, Intent};

pub use crate::scaling::{ComboState, Potion, PotionBelt, PotionOutcome, Relic, RelicKind, RelicSet, ScalingAggregator, StatusKind};

pub use crate::effects::{AppliedEffect, CardEffect, DamageStage};

pub use crate::quiz::{Answer, LearningTracker, Question, SpacedRepetition, Word, WordBank, WordProvider};

pub use crate::events::{BattleEvent, BattleEventKind, EventBus};

pub use crate::battle::{Battle, BattleContext, BattleOutcome, BattlePhase, BattleSummary, CombatantState};
