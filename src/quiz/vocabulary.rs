//! In-memory word bank.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::provider::{WordProvider, WordWeights};
use super::question::{ChoiceQuestion, Direction, TypedQuestion, Word};
use crate::core::{GameRng, WordId};

/// Number of wrong choices on a multiple-choice question.
pub const DISTRACTORS: usize = 3;

/// A fixed list of words.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordBank {
    words: Vec<Word>,
}

impl WordBank {
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// A small built-in English word list with Japanese meanings.
    #[must_use]
    pub fn starter() -> Self {
        let entries: [(&str, &str, &str, u8); 24] = [
            ("dog", "犬", "animal", 1),
            ("cat", "猫", "animal", 1),
            ("bird", "鳥", "animal", 1),
            ("horse", "馬", "animal", 2),
            ("rabbit", "うさぎ", "animal", 2),
            ("elephant", "象", "animal", 3),
            ("apple", "りんご", "food", 1),
            ("bread", "パン", "food", 1),
            ("water", "水", "food", 1),
            ("cheese", "チーズ", "food", 2),
            ("vegetable", "野菜", "food", 3),
            ("breakfast", "朝食", "food", 3),
            ("tree", "木", "nature", 1),
            ("river", "川", "nature", 1),
            ("mountain", "山", "nature", 2),
            ("forest", "森", "nature", 2),
            ("weather", "天気", "nature", 3),
            ("colour", "色", "nature", 2),
            ("run", "走る", "action", 1),
            ("eat", "食べる", "action", 1),
            ("write", "書く", "action", 2),
            ("remember", "覚える", "action", 3),
            ("borrow", "借りる", "action", 3),
            ("listen", "聞く", "action", 2),
        ];
        let words = entries
            .iter()
            .zip(1u32..)
            .map(|(&(term, meaning, category, difficulty), id)| {
                let word = Word::new(id, term, meaning, category, difficulty);
                if term == "colour" {
                    word.with_alias("color")
                } else {
                    word
                }
            })
            .collect();
        Self::new(words)
    }

    pub fn add(&mut self, word: Word) {
        self.words.push(word);
    }

    #[must_use]
    pub fn get(&self, id: WordId) -> Option<&Word> {
        self.words.iter().find(|w| w.id == id)
    }

    pub fn by_difficulty(&self, max_difficulty: u8) -> impl Iterator<Item = &Word> {
        self.words.iter().filter(move |w| w.difficulty <= max_difficulty)
    }

    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Word> + 'a {
        self.words.iter().filter(move |w| w.category == category)
    }

    /// Distinct categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for word in &self.words {
            if !seen.contains(&word.category.as_str()) {
                seen.push(&word.category);
            }
        }
        seen
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn weighted_pick<'a>(
        &self,
        candidates: &[&'a Word],
        weights: &WordWeights,
        rng: &mut GameRng,
    ) -> Option<&'a Word> {
        let w: Vec<f64> = candidates
            .iter()
            .map(|word| weights.get(&word.id).copied().unwrap_or(1.0))
            .collect();
        rng.choose_weighted(&w).map(|i| candidates[i])
    }
}

impl WordProvider for WordBank {
    /// If the exclusions leave nothing eligible they are ignored, so a tiny
    /// bank can still serve a follow-up question.
    fn pick_weighted_word(
        &self,
        max_difficulty: u8,
        weights: &WordWeights,
        exclude: &[WordId],
        rng: &mut GameRng,
    ) -> Option<Word> {
        let eligible: Vec<&Word> = self.by_difficulty(max_difficulty).collect();
        let filtered: Vec<&Word> = eligible
            .iter()
            .copied()
            .filter(|w| !exclude.contains(&w.id))
            .collect();
        let pool = if filtered.is_empty() { &eligible } else { &filtered };
        self.weighted_pick(pool, weights, rng).cloned()
    }

    /// Distractors come from the word's own category first, topped up from
    /// other categories when it has fewer than three other words.
    fn make_choice_question(&self, word: &Word, direction: Direction, rng: &mut GameRng) -> ChoiceQuestion {
        let mut same: Vec<&Word> = self
            .words
            .iter()
            .filter(|w| w.id != word.id && w.category == word.category)
            .collect();
        rng.shuffle(&mut same);
        if same.len() < DISTRACTORS {
            let mut other: Vec<&Word> = self
                .words
                .iter()
                .filter(|w| w.id != word.id && w.category != word.category)
                .collect();
            rng.shuffle(&mut other);
            same.extend(other);
        }

        let mut options: SmallVec<[&Word; 4]> = same.into_iter().take(DISTRACTORS).collect();
        options.push(word);
        rng.shuffle(&mut options);
        let correct_index = options.iter().position(|w| w.id == word.id).unwrap_or(0);

        let (prompt, choices) = match direction {
            Direction::TermToMeaning => (
                word.term.clone(),
                options.iter().map(|w| w.meaning.clone()).collect(),
            ),
            Direction::MeaningToTerm => (
                word.meaning.clone(),
                options.iter().map(|w| w.term.clone()).collect(),
            ),
        };

        ChoiceQuestion {
            prompt,
            choices,
            correct_index,
            direction,
            word: word.clone(),
            eliminated: SmallVec::new(),
        }
    }

    fn make_typed_question(&self, word: &Word) -> TypedQuestion {
        let answer = word.term.to_lowercase();
        let mut letters = answer.chars();
        let hint = match letters.next() {
            Some(first) => {
                let mut hint = first.to_string();
                hint.extend(letters.map(|_| '_'));
                hint
            }
            None => String::new(),
        };
        TypedQuestion {
            prompt: word.meaning.clone(),
            answer,
            aliases: word.aliases.iter().map(|a| a.to_lowercase()).collect(),
            hint,
            word: word.clone(),
        }
    }
}
