//! Card system: templates, stats, instances, catalog and deck.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card templates
//! - `CardTemplate`: Static card data (cost, category, quiz mode, level-1 stats)
//! - `CardStats`: The numbers that grow with levels and snowballing
//! - `CardInstance`: One copy in a deck, with its own stat versions
//! - `CardCatalog`: Read-only lookup injected into battles
//! - `CardRegistry`: The catalog implementation, plus the built-in card set
//! - `Deck`: The run deck and its starter composition

pub mod deck;
pub mod definition;
pub mod instance;
pub mod registry;
pub mod standard;
pub mod stats;

pub use deck::{Deck, STARTER_DECK};
pub use definition::{CardCategory, CardId, CardTemplate, QuizMode, Rarity};
pub use instance::{CardInstance, EXPERIENCE_STEP, MAX_LEVEL};
pub use registry::{CardCatalog, CardRegistry};
pub use standard::standard_cards;
pub use stats::CardStats;
