//! Core data model types for wordform.
//!
//! These are the types the whole quiz builds on: the five form kinds, the
//! accepted spellings of a form, catalog entries, and generated questions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::QuizError;

/// A grammatical category a word can be expressed in.
///
/// Variants are declared in priority order; `Ord` follows that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    Verb,
    NounThing,
    NounPerson,
    Adjective,
    Adverb,
}

impl FormKind {
    /// Human-readable label shown to the learner.
    pub fn display_name(self) -> &'static str {
        match self {
            FormKind::Verb => "Verb",
            FormKind::NounThing => "Thing Noun",
            FormKind::NounPerson => "Person Noun",
            FormKind::Adjective => "Adjective",
            FormKind::Adverb => "Adverb",
        }
    }

    /// Catalog key of this kind (e.g. `noun_person`).
    pub fn key(self) -> &'static str {
        match self {
            FormKind::Verb => "verb",
            FormKind::NounThing => "noun_thing",
            FormKind::NounPerson => "noun_person",
            FormKind::Adjective => "adjective",
            FormKind::Adverb => "adverb",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The correct spelling(s) of one form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Accepted {
    One(String),
    Many(Vec<String>),
}

impl Accepted {
    /// Every accepted spelling, in catalog order.
    pub fn spellings(&self) -> &[String] {
        match self {
            Accepted::One(s) => std::slice::from_ref(s),
            Accepted::Many(v) => v,
        }
    }

    /// The first spelling, used when a single representative is needed.
    pub fn primary(&self) -> &str {
        self.spellings().first().map(String::as_str).unwrap_or("")
    }

    /// Spellings joined for display, e.g. `go / goes`.
    pub fn display_text(&self) -> String {
        self.spellings().join(" / ")
    }
}

impl From<&str> for Accepted {
    fn from(s: &str) -> Self {
        Accepted::One(s.to_string())
    }
}

impl From<Vec<&str>> for Accepted {
    fn from(v: Vec<&str>) -> Self {
        Accepted::Many(v.into_iter().map(String::from).collect())
    }
}

impl fmt::Display for Accepted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_text())
    }
}

/// A catalog record: a base word and its known spellings per form kind.
///
/// Always defines at least two form kinds with non-empty spellings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordEntry {
    word: String,
    forms: BTreeMap<FormKind, Accepted>,
}

impl WordEntry {
    /// Build an entry, rejecting data no question could be generated from.
    pub fn new(
        word: impl Into<String>,
        forms: impl IntoIterator<Item = (FormKind, Accepted)>,
    ) -> Result<Self, QuizError> {
        let word = word.into();
        if word.trim().is_empty() {
            return Err(QuizError::EmptyWord);
        }

        let forms: BTreeMap<FormKind, Accepted> = forms.into_iter().collect();
        for (&kind, accepted) in &forms {
            let spellings = accepted.spellings();
            if spellings.is_empty() {
                return Err(QuizError::NoSpellings {
                    word: word.clone(),
                    kind,
                });
            }
            if spellings.iter().any(|s| s.trim().is_empty()) {
                return Err(QuizError::EmptySpelling {
                    word: word.clone(),
                    kind,
                });
            }
        }

        if forms.len() < 2 {
            return Err(QuizError::TooFewForms {
                word,
                defined: forms.len(),
            });
        }

        Ok(Self { word, forms })
    }

    /// The base word this entry is filed under.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Defined forms, in priority order.
    pub fn forms(&self) -> impl Iterator<Item = (FormKind, &Accepted)> {
        self.forms.iter().map(|(&kind, accepted)| (kind, accepted))
    }

    /// Defined kinds, in priority order.
    pub fn kinds(&self) -> Vec<FormKind> {
        self.forms.keys().copied().collect()
    }

    /// Spellings for one kind, if defined.
    pub fn form(&self, kind: FormKind) -> Option<&Accepted> {
        self.forms.get(&kind)
    }
}

/// A single quiz prompt derived from one word entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The entry's base word.
    pub base_word: String,
    /// Primary spelling of the base form, shown in the prompt.
    pub prompt_word: String,
    /// The form shown to the learner.
    pub base_form: FormKind,
    /// The form being asked for.
    pub target_form: FormKind,
    /// Spelling(s) accepted as correct, copied verbatim from the entry.
    pub answer: Accepted,
}

impl Question {
    /// The question text, e.g. `What is the Thing Noun of "run" (Verb)?`.
    pub fn prompt(&self) -> String {
        format!(
            "What is the {} of \"{}\" ({})?",
            self.target_form.display_name(),
            self.prompt_word,
            self.base_form.display_name()
        )
    }

    /// Canonical correct answer for feedback.
    pub fn correct_answer_text(&self) -> String {
        self.answer.display_text()
    }
}
