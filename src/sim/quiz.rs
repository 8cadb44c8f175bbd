//! Quiz deck and answer evaluation
//!
//! The question list itself never changes once loaded. What moves is the
//! presentation order (reshuffled on reset) and the cursor into it, which
//! only advances on a correct answer.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// A multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_index: usize,
}

impl Question {
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct_index
    }

    /// Option picked by a number key ("1" is the first option). Keys past
    /// the last option pick nothing.
    pub fn choice_for_key(&self, key: &str) -> Option<usize> {
        let digit: usize = key.parse().ok()?;
        (1..=self.options.len()).contains(&digit).then(|| digit - 1)
    }
}

/// Result of submitting an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerOutcome {
    Correct,
    Wrong,
}

/// Question deck with a wrapping cursor
#[derive(Debug, Clone, Default)]
pub struct Quiz {
    questions: Vec<Question>,
    /// Presentation order: a permutation of `0..questions.len()`
    order: Vec<usize>,
    cursor: usize,
}

impl Quiz {
    pub fn new(questions: Vec<Question>) -> Self {
        let order = (0..questions.len()).collect();
        Self {
            questions,
            order,
            cursor: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Number of correct answers so far, modulo deck length
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Deck index of the question the cursor points at
    pub fn current_index(&self) -> Option<usize> {
        if self.order.is_empty() {
            return None;
        }
        Some(self.order[self.cursor % self.order.len()])
    }

    pub fn current(&self) -> Option<&Question> {
        self.current_index().and_then(|i| self.questions.get(i))
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Grade `choice` against the current question.
    ///
    /// A correct answer moves the cursor on by one, wrapping at the end of
    /// the deck; a wrong one leaves it where it is.
    pub fn answer(&mut self, choice: usize) -> Option<AnswerOutcome> {
        let question = self.current()?;
        if question.is_correct(choice) {
            self.cursor = (self.cursor + 1) % self.questions.len();
            Some(AnswerOutcome::Correct)
        } else {
            Some(AnswerOutcome::Wrong)
        }
    }

    /// Shuffle the presentation order (cursor is kept)
    pub fn reshuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.order.shuffle(rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn deck(n: usize) -> Quiz {
        Quiz::new(
            (0..n)
                .map(|i| Question {
                    prompt: format!("Q{i}"),
                    options: vec!["a".into(), "b".into(), "c".into()],
                    correct_index: i % 3,
                })
                .collect(),
        )
    }

    #[test]
    fn test_choice_for_key() {
        let question = Question {
            prompt: "When did La Violencia start?".into(),
            options: vec!["1948".into(), "1946".into()],
            correct_index: 0,
        };
        assert_eq!(question.choice_for_key("1"), Some(0));
        assert_eq!(question.choice_for_key("2"), Some(1));
        assert_eq!(question.choice_for_key("3"), None);
        assert_eq!(question.choice_for_key("9"), None);
        assert_eq!(question.choice_for_key("0"), None);
        assert_eq!(question.choice_for_key("a"), None);
    }

    #[test]
    fn test_correct_answer_advances_cursor() {
        let mut quiz = deck(3);
        assert_eq!(quiz.current().map(|q| q.prompt.as_str()), Some("Q0"));
        assert_eq!(quiz.answer(0), Some(AnswerOutcome::Correct));
        assert_eq!(quiz.cursor(), 1);
        assert_eq!(quiz.current().map(|q| q.prompt.as_str()), Some("Q1"));
    }

    #[test]
    fn test_wrong_answer_keeps_cursor() {
        let mut quiz = deck(3);
        assert_eq!(quiz.answer(2), Some(AnswerOutcome::Wrong));
        assert_eq!(quiz.cursor(), 0);
        // Out-of-range choices are just wrong
        assert_eq!(quiz.answer(99), Some(AnswerOutcome::Wrong));
        assert_eq!(quiz.cursor(), 0);
    }

    #[test]
    fn test_cursor_wraps() {
        let mut quiz = deck(2);
        assert_eq!(quiz.answer(0), Some(AnswerOutcome::Correct));
        assert_eq!(quiz.answer(1), Some(AnswerOutcome::Correct));
        assert_eq!(quiz.cursor(), 0);
        assert_eq!(quiz.current_index(), Some(0));
    }

    #[test]
    fn test_empty_deck() {
        let mut quiz = Quiz::new(Vec::new());
        assert!(quiz.is_empty());
        assert_eq!(quiz.current(), None);
        assert_eq!(quiz.answer(0), None);
    }

    #[test]
    fn test_reshuffle_is_permutation() {
        let mut quiz = deck(13);
        let mut rng = Pcg32::seed_from_u64(7);
        quiz.reshuffle(&mut rng);

        let mut seen: Vec<usize> = (0..13)
            .map(|c| quiz.order[c])
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..13).collect::<Vec<_>>());
    }
}
