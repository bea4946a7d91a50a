//! Quiz session: answer slots, grading, and score for one page attempt.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::engine::{generate_questions, SelectionPolicy};
use crate::error::QuizError;
use crate::model::{Accepted, Question};

/// Whether the learner has checked their answers yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    #[default]
    Unsubmitted,
    Submitted,
}

/// Trim and lowercase a learner's answer for comparison.
pub fn normalize_answer(answer: &str) -> String {
    answer.trim().to_lowercase()
}

/// Exact match after normalization against any accepted spelling.
pub fn check_answer(user_answer: &str, accepted: &Accepted) -> bool {
    let cleaned = normalize_answer(user_answer);
    accepted
        .spellings()
        .iter()
        .any(|spelling| spelling.to_lowercase() == cleaned)
}

/// Feedback for one graded question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionResult {
    /// Zero-based position on the page.
    pub index: usize,
    pub question: Question,
    /// What the learner typed, unmodified.
    pub user_answer: String,
    /// Accepted spellings joined with ` / `.
    pub correct_answer: String,
    pub is_correct: bool,
}

impl QuestionResult {
    /// The learner's answer for display, or `(no answer)` if it is blank.
    pub fn answer_label(&self) -> &str {
        if self.user_answer.trim().is_empty() {
            "(no answer)"
        } else {
            &self.user_answer
        }
    }
}

/// One attempt at one page.
#[derive(Debug, Clone)]
pub struct QuizSession {
    page: usize,
    round: u32,
    questions: Vec<Question>,
    answers: Vec<String>,
    state: SessionState,
    score: usize,
}

impl QuizSession {
    /// Fresh session for `page` on its first round.
    pub fn initialize(catalog: &Catalog, page: usize, policy: SelectionPolicy) -> Self {
        Self::for_round(catalog, page, policy, 0)
    }

    /// Fresh session for `page` on a specific round.
    pub fn for_round(catalog: &Catalog, page: usize, policy: SelectionPolicy, round: u32) -> Self {
        Self::from_questions(
            page,
            round,
            generate_questions(catalog.words_for_page(page), policy, round),
        )
    }

    /// Session over pre-built questions.
    pub fn from_questions(page: usize, round: u32, questions: Vec<Question>) -> Self {
        let answers = vec![String::new(); questions.len()];
        Self {
            page,
            round,
            questions,
            answers,
            state: SessionState::Unsubmitted,
            score: 0,
        }
    }

    /// Store raw text in one answer slot.
    pub fn set_answer(&mut self, index: usize, text: impl Into<String>) -> Result<(), QuizError> {
        let len = self.answers.len();
        let slot = self
            .answers
            .get_mut(index)
            .ok_or(QuizError::AnswerIndexOutOfRange { index, len })?;
        *slot = text.into();
        Ok(())
    }

    /// Grade every answer and mark the session submitted. Returns the score.
    pub fn submit(&mut self) -> usize {
        self.score = self
            .questions
            .iter()
            .zip(&self.answers)
            .filter(|(q, a)| check_answer(a, &q.answer))
            .count();
        self.state = SessionState::Submitted;

        tracing::info!(
            "page {} round {}: scored {}/{}",
            self.page,
            self.round,
            self.score,
            self.questions.len()
        );

        self.score
    }

    /// Correct answers counted by the last submit; 0 before submission.
    pub fn score(&self) -> usize {
        self.score
    }

    /// Per-question feedback, once submitted.
    pub fn results(&self) -> Option<Vec<QuestionResult>> {
        if !self.is_submitted() {
            return None;
        }
        let results = self
            .questions
            .iter()
            .zip(&self.answers)
            .enumerate()
            .map(|(index, (question, answer))| QuestionResult {
                index,
                question: question.clone(),
                user_answer: answer.clone(),
                correct_answer: question.correct_answer_text(),
                is_correct: check_answer(answer, &question.answer),
            })
            .collect();
        Some(results)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_submitted(&self) -> bool {
        self.state == SessionState::Submitted
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
