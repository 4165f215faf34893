//! Enemies: templates, battle state and the intent cycle.

pub mod definition;
pub mod pattern;
pub mod state;

pub use definition::{AwakeningRule, Encounter, EnemyRegistry, EnemyTemplate, IntentTemplate, STRENGTH};
pub use pattern::{advance_pattern, intent_for, Intent};
pub use state::{mitigate, EnemyState, Mitigation};
