//! Words, questions and answer checking.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{GameRng, WordId};

/// A vocabulary entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: WordId,
    /// The word being learned.
    pub term: String,
    /// Its meaning in the learner's language.
    pub meaning: String,
    pub category: String,
    /// 1 (easiest) to 3.
    pub difficulty: u8,
    /// Other spellings accepted for typed answers.
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl Word {
    pub fn new(
        id: u32,
        term: impl Into<String>,
        meaning: impl Into<String>,
        category: impl Into<String>,
        difficulty: u8,
    ) -> Self {
        Self {
            id: WordId::new(id),
            term: term.into(),
            meaning: meaning.into(),
            category: category.into(),
            difficulty,
            aliases: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }
}

/// Which side of a word is shown as the prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Show the term, pick its meaning.
    TermToMeaning,
    /// Show the meaning, pick the term.
    MeaningToTerm,
}

impl Direction {
    /// A uniformly random direction.
    pub fn random(rng: &mut GameRng) -> Self {
        if rng.gen_bool(0.5) {
            Direction::TermToMeaning
        } else {
            Direction::MeaningToTerm
        }
    }
}

/// A multiple-choice question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceQuestion {
    pub prompt: String,
    pub choices: SmallVec<[String; 4]>,
    pub correct_index: usize,
    pub direction: Direction,
    pub word: Word,
    /// Wrong choices a hint has marked for elimination.
    #[serde(default)]
    pub eliminated: SmallVec<[usize; 3]>,
}

impl ChoiceQuestion {
    /// Mark up to `count` random wrong choices as eliminated, always leaving
    /// at least one wrong choice standing. Returns how many were marked.
    pub fn eliminate(&mut self, count: u32, rng: &mut GameRng) -> usize {
        let mut candidates: SmallVec<[usize; 4]> = (0..self.choices.len())
            .filter(|&i| i != self.correct_index && !self.eliminated.contains(&i))
            .collect();
        let wanted = usize::try_from(count)
            .unwrap_or(usize::MAX)
            .min(candidates.len().saturating_sub(1));
        rng.shuffle(&mut candidates);
        for &index in candidates.iter().take(wanted) {
            self.eliminated.push(index);
        }
        self.eliminated.sort_unstable();
        wanted
    }

    #[must_use]
    pub fn correct_text(&self) -> &str {
        self.choices
            .get(self.correct_index)
            .map_or("", String::as_str)
    }
}

/// A typed-answer question: the meaning is shown, the term is typed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedQuestion {
    pub prompt: String,
    /// Canonical answer, lowercase.
    pub answer: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    /// First letter followed by underscores.
    pub hint: String,
    pub word: Word,
}

/// The question a card activation is waiting on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Question {
    Choice(ChoiceQuestion),
    Typed(TypedQuestion),
}

/// A caller's reply to the active question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Answer {
    Choice(usize),
    Typed(String),
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

impl Question {
    /// Whether `answer` is right.
    ///
    /// Typed answers match the answer or any alias, ignoring case and
    /// surrounding whitespace. Choice answers match by index. An answer of
    /// the wrong kind is wrong.
    #[must_use]
    pub fn check(&self, answer: &Answer) -> bool {
        match (self, answer) {
            (Question::Choice(q), Answer::Choice(index)) => *index == q.correct_index,
            (Question::Typed(q), Answer::Typed(text)) => {
                let given = normalize(text);
                given == normalize(&q.answer) || q.aliases.iter().any(|a| normalize(a) == given)
            }
            _ => false,
        }
    }

    /// Text of the right answer.
    #[must_use]
    pub fn answer_text(&self) -> &str {
        match self {
            Question::Choice(q) => q.correct_text(),
            Question::Typed(q) => &q.answer,
        }
    }

    /// Length of the right answer in characters.
    #[must_use]
    pub fn answer_length(&self) -> usize {
        self.answer_text().chars().count()
    }

    #[must_use]
    pub fn word(&self) -> &Word {
        match self {
            Question::Choice(q) => &q.word,
            Question::Typed(q) => &q.word,
        }
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        match self {
            Question::Choice(q) => &q.prompt,
            Question::Typed(q) => &q.prompt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn choice() -> ChoiceQuestion {
        ChoiceQuestion {
            prompt: "apple".into(),
            choices: smallvec!["犬".into(), "りんご".into(), "猫".into(), "鳥".into()],
            correct_index: 1,
            direction: Direction::TermToMeaning,
            word: Word::new(1, "apple", "りんご", "food", 1),
            eliminated: SmallVec::new(),
        }
    }

    fn typed() -> Question {
        Question::Typed(TypedQuestion {
            prompt: "色".into(),
            answer: "colour".into(),
            aliases: vec!["color".into()],
            hint: "c_____".into(),
            word: Word::new(2, "colour", "色", "nature", 2).with_alias("color"),
        })
    }

    #[test]
    fn test_choice_check() {
        let q = Question::Choice(choice());
        assert!(q.check(&Answer::Choice(1)));
        assert!(!q.check(&Answer::Choice(0)));
        assert!(!q.check(&Answer::Typed("りんご".into())));
        assert_eq!(q.answer_text(), "りんご");
        assert_eq!(q.answer_length(), 3);
    }

    #[test]
    fn test_typed_check_normalizes() {
        let q = typed();
        assert!(q.check(&Answer::Typed("  Colour ".into())));
        assert!(q.check(&Answer::Typed("COLOR".into())));
        assert!(!q.check(&Answer::Typed("colours".into())));
        assert!(!q.check(&Answer::Choice(0)));
    }

    #[test]
    fn test_eliminate_leaves_one_wrong() {
        let mut rng = GameRng::new(5);
        let mut q = choice();
        assert_eq!(q.eliminate(10, &mut rng), 2);
        assert_eq!(q.eliminated.len(), 2);
        assert!(!q.eliminated.contains(&q.correct_index));
        assert_eq!(q.eliminate(1, &mut rng), 0);
    }
}
