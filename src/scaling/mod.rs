//! Scaling: combo streaks, relic bonuses, potions and status effects.
//!
//! ## Key Types
//!
//! - `ComboState`: streak counter and its multiplier curve
//! - `RelicSet`: run-long passives, one per `RelicKind`
//! - `PotionBelt`: single-use consumables
//! - `StatusSet`: turn-limited buffs and debuffs
//! - `ScalingAggregator`: the damage/block formulas that consult all of the above

pub mod aggregator;
pub mod combo;
pub mod potions;
pub mod relics;
pub mod status;

pub use aggregator::{PotionOutcome, ScalingAggregator};
pub use combo::{combo_label, combo_multiplier_percent, ComboState};
pub use potions::{standard_potion, standard_potions, Potion, PotionBelt, PotionKind, POTION_CAPACITY};
pub use relics::{standard_relic, standard_relics, Relic, RelicKind, RelicSet};
pub use status::{StatusEntry, StatusKind, StatusSet};
