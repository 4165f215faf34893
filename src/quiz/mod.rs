//! Vocabulary quizzes: the gate every card activation passes through.
//!
//! - `WordProvider` / `SpacedRepetition`: the collaborators a battle borrows
//! - `Question` / `Answer`: what is asked and how replies are checked
//! - `WordBank` / `LearningTracker`: in-memory implementations

pub mod learning;
pub mod provider;
pub mod question;
pub mod vocabulary;

pub use learning::{LearningStats, LearningTracker, WordRecord};
pub use provider::{SpacedRepetition, WordProvider, WordWeights};
pub use question::{Answer, ChoiceQuestion, Direction, Question, TypedQuestion, Word};
pub use vocabulary::WordBank;
