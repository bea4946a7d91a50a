//! Question engine.
//!
//! Turns catalog entries into questions, one per entry, choosing which form is
//! shown and which form is asked for.

use serde::{Deserialize, Serialize};

use crate::error::QuizError;
use crate::model::{Question, WordEntry};

/// How base and target form kinds are picked for an entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionPolicy {
    /// First defined kind is shown, second is asked for. Same on every round.
    #[default]
    Priority,
    /// Shifts the pair by one kind per round, so retries ask for other forms.
    Rotating,
}

impl std::str::FromStr for SelectionPolicy {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "priority" => Ok(SelectionPolicy::Priority),
            "rotating" | "rotate" => Ok(SelectionPolicy::Rotating),
            other => Err(QuizError::UnknownSelectionPolicy(other.to_string())),
        }
    }
}

/// Generate questions with the default priority policy.
pub fn generate_questions_for_words(entries: &[WordEntry]) -> Vec<Question> {
    generate_questions(entries, SelectionPolicy::Priority, 0)
}

/// Generate one question per entry for the given round.
///
/// Round 0 is the first attempt at a page; each retry increments it.
pub fn generate_questions(
    entries: &[WordEntry],
    policy: SelectionPolicy,
    round: u32,
) -> Vec<Question> {
    let questions: Vec<Question> = entries
        .iter()
        .map(|entry| question_for_entry(entry, policy, round))
        .collect();

    tracing::debug!(
        "generated {} question(s) with {:?} policy, round {}",
        questions.len(),
        policy,
        round
    );

    questions
}

fn question_for_entry(entry: &WordEntry, policy: SelectionPolicy, round: u32) -> Question {
    // WordEntry guarantees at least two forms, so base and target differ
    let forms: Vec<_> = entry.forms().collect();
    let offset = match policy {
        SelectionPolicy::Priority => 0,
        SelectionPolicy::Rotating => round as usize % forms.len(),
    };
    let (base_form, base) = forms[offset];
    let (target_form, target) = forms[(offset + 1) % forms.len()];

    Question {
        base_word: entry.word().to_string(),
        prompt_word: base.primary().to_string(),
        base_form,
        target_form,
        answer: target.clone(),
    }
}
