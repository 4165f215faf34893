//! Spaced-repetition weights kept in memory.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::provider::{SpacedRepetition, WordWeights};
use crate::core::WordId;

pub const CORRECT_FACTOR: f64 = 0.7;
pub const INCORRECT_FACTOR: f64 = 1.8;
pub const MIN_WEIGHT: f64 = 0.3;
pub const MAX_WEIGHT: f64 = 5.0;
/// Words heavier than this count as weak.
pub const WEAK_THRESHOLD: f64 = 1.5;

/// Answer history for one word.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WordRecord {
    pub correct: u32,
    pub incorrect: u32,
    pub weight: f64,
}

impl Default for WordRecord {
    fn default() -> Self {
        Self {
            correct: 0,
            incorrect: 0,
            weight: 1.0,
        }
    }
}

/// Aggregate learning statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningStats {
    pub total_correct: u32,
    pub total_incorrect: u32,
    /// Rounded percentage, 0 with no attempts.
    pub accuracy_percent: u32,
    /// Words answered correctly at least 3 times and now weighted below 1.
    pub words_learned: usize,
    pub weak_words: usize,
    pub total_attempted: usize,
}

/// Per-word weights: ×0.7 on a correct answer (floor 0.3), ×1.8 on a miss
/// (cap 5.0). Unseen words weigh 1.0.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LearningTracker {
    records: FxHashMap<WordId, WordRecord>,
}

impl LearningTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn record(&self, word: WordId) -> Option<&WordRecord> {
        self.records.get(&word)
    }

    #[must_use]
    pub fn weight(&self, word: WordId) -> f64 {
        self.records.get(&word).map_or(1.0, |r| r.weight)
    }

    /// Weak words, heaviest first, at most `limit`.
    #[must_use]
    pub fn weak_words(&self, limit: usize) -> Vec<WordId> {
        let mut weak: Vec<(WordId, f64)> = self
            .records
            .iter()
            .filter(|(_, r)| r.weight > WEAK_THRESHOLD)
            .map(|(id, r)| (*id, r.weight))
            .collect();
        weak.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        weak.into_iter().take(limit).map(|(id, _)| id).collect()
    }

    #[must_use]
    pub fn stats(&self) -> LearningStats {
        let total_correct: u32 = self.records.values().map(|r| r.correct).sum();
        let total_incorrect: u32 = self.records.values().map(|r| r.incorrect).sum();
        let attempts = total_correct + total_incorrect;
        let accuracy_percent = if attempts == 0 {
            0
        } else {
            (total_correct * 100 + attempts / 2) / attempts
        };
        LearningStats {
            total_correct,
            total_incorrect,
            accuracy_percent,
            words_learned: self
                .records
                .values()
                .filter(|r| r.correct >= 3 && r.weight < 1.0)
                .count(),
            weak_words: self.records.values().filter(|r| r.weight > WEAK_THRESHOLD).count(),
            total_attempted: self.records.len(),
        }
    }

    pub fn reset(&mut self) {
        self.records.clear();
    }
}

impl SpacedRepetition for LearningTracker {
    fn record_correct(&mut self, word: WordId) {
        let record = self.records.entry(word).or_default();
        record.correct += 1;
        record.weight = (record.weight * CORRECT_FACTOR).max(MIN_WEIGHT);
    }

    fn record_incorrect(&mut self, word: WordId) {
        let record = self.records.entry(word).or_default();
        record.incorrect += 1;
        record.weight = (record.weight * INCORRECT_FACTOR).min(MAX_WEIGHT);
    }

    fn current_weights(&self) -> WordWeights {
        self.records.iter().map(|(id, r)| (*id, r.weight)).collect()
    }
}
