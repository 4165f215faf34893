//! The two vocabulary collaborators a battle consults.
//!
//! The battle never owns vocabulary content or learning history. It borrows a
//! `WordProvider` to build questions and a `SpacedRepetition` tracker to report
//! answers to and read word weights from.

use rustc_hash::FxHashMap;

use super::question::{ChoiceQuestion, Direction, TypedQuestion, Word};
use crate::core::{GameRng, WordId};

/// Per-word pick weights. Words missing from the map weigh 1.0.
pub type WordWeights = FxHashMap<WordId, f64>;

/// Source of words and questions.
pub trait WordProvider {
    /// Pick a word with difficulty at most `max_difficulty`, with probability
    /// proportional to its weight, skipping `exclude`.
    ///
    /// `None` when no word is eligible.
    fn pick_weighted_word(
        &self,
        max_difficulty: u8,
        weights: &WordWeights,
        exclude: &[WordId],
        rng: &mut GameRng,
    ) -> Option<Word>;

    /// A four-way multiple-choice question for `word`.
    fn make_choice_question(&self, word: &Word, direction: Direction, rng: &mut GameRng) -> ChoiceQuestion;

    /// A typed-answer question for `word`.
    fn make_typed_question(&self, word: &Word) -> TypedQuestion;
}

/// Adaptive per-word weighting.
///
/// Correct answers must lower a word's weight and incorrect answers raise it.
pub trait SpacedRepetition {
    fn record_correct(&mut self, word: WordId);

    fn record_incorrect(&mut self, word: WordId);

    fn current_weights(&self) -> WordWeights;
}
