//! Battle event stream.
//!
//! The battle reports everything observable through `BattleEvent`, one
//! variant per event name. Presentation layers subscribe on the `EventBus`
//! by `BattleEventKind` or to everything.

pub mod bus;
pub mod event;

pub use bus::{EventBus, ListenerId};
pub use event::{BattleEvent, BattleEventKind};
