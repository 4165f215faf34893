//! Core engine types: identifiers, RNG, configuration, actions, errors.

pub mod action;
pub mod config;
pub mod entity;
pub mod error;
pub mod numeric;
pub mod rng;

pub use action::{ActionRecord, BattleAction};
pub use config::{BattleConfig, PlayerProfile};
pub use entity::{InstanceId, WordId};
pub use error::{CatalogError, InventoryError, RejectReason};
pub use numeric::{ceil_div, ceil_percent};
pub use rng::GameRng;
