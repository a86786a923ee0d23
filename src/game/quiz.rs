//! Guess-the-achievement quiz state.
//!
//! The session is plain data so the host can carry it between requests
//! (hidden form fields). Question order is a seeded permutation of the bank;
//! seed 0 keeps the bank's own order.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::content::LocalizedText;

const EMBEDDED_BANK: &str = include_str!("../../content/achievements.json");

#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error("failed to parse quiz bank: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("quiz bank has no questions")]
    Empty,

    #[error("question '{id}' answer index {answer} is outside its {options} options")]
    AnswerOutOfRange {
        id: String,
        answer: usize,
        options: usize,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: String,
    pub clue: LocalizedText,
    pub options: Vec<LocalizedText>,
    pub answer: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuizBank {
    questions: Vec<QuizQuestion>,
}

impl QuizBank {
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self, QuizError> {
        let bank = Self { questions };
        bank.validate()?;
        Ok(bank)
    }

    pub fn from_json_str(json: &str) -> Result<Self, QuizError> {
        let questions: Vec<QuizQuestion> = serde_json::from_str(json)?;
        Self::new(questions)
    }

    pub fn embedded() -> Result<Self, QuizError> {
        Self::from_json_str(EMBEDDED_BANK)
    }

    /// The embedded bank, parsed once per process.
    pub fn shared() -> Result<&'static QuizBank, &'static QuizError> {
        static SHARED: OnceLock<Result<QuizBank, QuizError>> = OnceLock::new();
        SHARED.get_or_init(Self::embedded).as_ref()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    fn validate(&self) -> Result<(), QuizError> {
        if self.questions.is_empty() {
            return Err(QuizError::Empty);
        }
        for q in &self.questions {
            if q.answer >= q.options.len() {
                return Err(QuizError::AnswerOutOfRange {
                    id: q.id.clone(),
                    answer: q.answer,
                    options: q.options.len(),
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "lowercase")]
pub enum GuessOutcome {
    Correct,
    Wrong { correct: usize },
    /// No current question, already answered, or choice out of range.
    Invalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuizSession {
    pub seed: u64,
    pub index: usize,
    pub score: usize,
    pub answered: bool,
}

impl QuizSession {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Question order for this session's seed.
    pub fn order(&self, bank: &QuizBank) -> Vec<usize> {
        let mut order: Vec<usize> = (0..bank.len()).collect();
        if self.seed != 0 {
            let mut rng = StdRng::seed_from_u64(self.seed);
            order.shuffle(&mut rng);
        }
        order
    }

    pub fn current<'a>(&self, bank: &'a QuizBank) -> Option<&'a QuizQuestion> {
        let order = self.order(bank);
        order.get(self.index).map(|&i| &bank.questions[i])
    }

    /// Whether a session received from a client could have been reached by play.
    /// Score never exceeds the questions answered so far.
    pub fn is_consistent(&self, bank: &QuizBank) -> bool {
        let answered_so_far = self.index.saturating_add(usize::from(self.answered));
        self.index <= bank.len() && self.score <= answered_so_far
    }

    pub fn is_finished(&self, bank: &QuizBank) -> bool {
        self.index >= bank.len()
    }

    pub fn guess(&mut self, bank: &QuizBank, choice: usize) -> GuessOutcome {
        if self.answered {
            return GuessOutcome::Invalid;
        }
        let Some(question) = self.current(bank) else {
            return GuessOutcome::Invalid;
        };
        if choice >= question.options.len() {
            return GuessOutcome::Invalid;
        }

        self.answered = true;
        if choice == question.answer {
            self.score = self.score.saturating_add(1);
            GuessOutcome::Correct
        } else {
            GuessOutcome::Wrong {
                correct: question.answer,
            }
        }
    }

    /// Move to the next question. Skipping an unanswered question is allowed.
    pub fn advance(&mut self, bank: &QuizBank) {
        if !self.is_finished(bank) {
            self.index += 1;
        }
        self.answered = false;
    }

    pub fn restart(&mut self, seed: u64) {
        *self = Self::new(seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank() -> QuizBank {
        QuizBank::embedded().unwrap()
    }

    #[test]
    fn test_embedded_bank_is_valid() {
        assert!(bank().len() >= 3);
    }

    #[test]
    fn test_seed_zero_keeps_bank_order() {
        let bank = bank();
        let session = QuizSession::new(0);
        assert_eq!(session.order(&bank), (0..bank.len()).collect::<Vec<_>>());
        assert_eq!(session.current(&bank).unwrap().id, bank.questions()[0].id);
    }

    #[test]
    fn test_seeded_order_is_stable_permutation() {
        let bank = bank();
        let a = QuizSession::new(42).order(&bank);
        let b = QuizSession::new(42).order(&bank);
        assert_eq!(a, b);

        let mut sorted = a.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..bank.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_correct_guess_scores_once() {
        let bank = bank();
        let mut session = QuizSession::new(0);
        let answer = session.current(&bank).unwrap().answer;

        assert_eq!(session.guess(&bank, answer), GuessOutcome::Correct);
        assert_eq!(session.score, 1);
        assert_eq!(session.guess(&bank, answer), GuessOutcome::Invalid);
        assert_eq!(session.score, 1);
    }

    #[test]
    fn test_wrong_guess_reveals_answer() {
        let bank = bank();
        let mut session = QuizSession::new(0);
        let q = session.current(&bank).unwrap();
        let wrong = (q.answer + 1) % q.options.len();

        assert_eq!(
            session.guess(&bank, wrong),
            GuessOutcome::Wrong { correct: q.answer }
        );
        assert_eq!(session.score, 0);
    }

    #[test]
    fn test_out_of_range_choice_is_invalid() {
        let bank = bank();
        let mut session = QuizSession::new(0);
        assert_eq!(session.guess(&bank, 99), GuessOutcome::Invalid);
        assert!(!session.answered);
    }

    #[test]
    fn test_play_through_to_finish() {
        let bank = bank();
        let mut session = QuizSession::new(7);
        while !session.is_finished(&bank) {
            let answer = session.current(&bank).unwrap().answer;
            session.guess(&bank, answer);
            session.advance(&bank);
        }
        assert_eq!(session.score, bank.len());
        assert!(session.current(&bank).is_none());
        assert_eq!(session.guess(&bank, 0), GuessOutcome::Invalid);

        session.restart(3);
        assert_eq!(session, QuizSession::new(3));
    }

    #[test]
    fn test_score_saturates_instead_of_overflowing() {
        let bank = bank();
        let mut session = QuizSession {
            score: usize::MAX,
            ..QuizSession::new(0)
        };
        let answer = session.current(&bank).unwrap().answer;

        assert_eq!(session.guess(&bank, answer), GuessOutcome::Correct);
        assert_eq!(session.score, usize::MAX);
    }

    #[test]
    fn test_client_session_consistency() {
        let bank = bank();
        assert!(QuizSession::new(0).is_consistent(&bank));

        let answered_first = QuizSession {
            score: 1,
            answered: true,
            ..QuizSession::new(0)
        };
        assert!(answered_first.is_consistent(&bank));

        let forged_score = QuizSession {
            score: 1,
            ..QuizSession::new(0)
        };
        assert!(!forged_score.is_consistent(&bank));

        let past_end = QuizSession {
            index: bank.len() + 1,
            ..QuizSession::new(0)
        };
        assert!(!past_end.is_consistent(&bank));

        let huge = QuizSession {
            index: usize::MAX,
            score: usize::MAX,
            answered: true,
            seed: 0,
        };
        assert!(!huge.is_consistent(&bank));
    }

    #[test]
    fn test_shared_bank_is_parsed_once() {
        let a = QuizBank::shared().unwrap();
        let b = QuizBank::shared().unwrap();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.len(), bank().len());
    }

    #[test]
    fn test_bank_validation() {
        assert!(matches!(QuizBank::new(vec![]), Err(QuizError::Empty)));

        let bad = QuizQuestion {
            id: "q".to_string(),
            clue: LocalizedText::new("clue", "دليل"),
            options: vec![LocalizedText::new("a", "أ")],
            answer: 1,
        };
        assert!(matches!(
            QuizBank::new(vec![bad]),
            Err(QuizError::AnswerOutOfRange { answer: 1, .. })
        ));
    }
}
