//! Pile system for card locations during a battle.
//!
//! ## Key Types
//!
//! - `Pile`: Draw, hand, discard, exhaust
//! - `PileManager`: Card ownership, location tracking and movement

pub mod manager;

pub use manager::{Pile, PileManager};
