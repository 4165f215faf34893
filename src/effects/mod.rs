//! Card effects and their resolution order.
//!
//! - `CardEffect`: tagged special-effect descriptors carried by card stats
//! - `DamageStage` / `run_pipeline`: the fixed-order damage pipeline
//! - `AppliedEffect`: what a resolution step actually did
//!
//! ## Design
//!
//! Descriptors are data. Adding an effect means adding a variant and either a
//! pipeline stage (damage bonuses) or a side-effect arm in the battle; the
//! pipeline driver itself does not change.

pub mod applied;
pub mod effect;
pub mod pipeline;

pub use applied::AppliedEffect;
pub use effect::{CardEffect, LEVEL_GROWTH_PERCENT, POISON_GROWTH_PERCENT};
pub use pipeline::{run_pipeline, DamageContext, DamageOutcome, DamageStage, DAMAGE_PIPELINE};
