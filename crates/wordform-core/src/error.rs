//! Quiz error types.
//!
//! Grading itself never fails: a wrong answer is an ordinary outcome. These
//! errors cover malformed catalog data and misuse of a session.

use thiserror::Error;

use crate::model::FormKind;

/// Errors raised by the catalog and the quiz session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    /// A word entry defines fewer than two form kinds, so no question can be posed.
    #[error("entry '{word}' defines {defined} form kind(s), at least 2 are required")]
    TooFewForms { word: String, defined: usize },

    /// A form lists no spellings at all.
    #[error("entry '{word}' has no spellings for {kind}")]
    NoSpellings { word: String, kind: FormKind },

    /// A spelling is empty or whitespace only.
    #[error("entry '{word}' has an empty spelling for {kind}")]
    EmptySpelling { word: String, kind: FormKind },

    /// The base word itself is empty.
    #[error("word entry has an empty base word")]
    EmptyWord,

    /// Pages must hold at least one word.
    #[error("page size must be at least 1")]
    InvalidPageSize,

    /// An answer slot that does not exist on the session.
    #[error("answer index {index} out of range, session has {len} question(s)")]
    AnswerIndexOutOfRange { index: usize, len: usize },

    /// A selection policy name other than `priority` or `rotating`.
    #[error("unknown selection policy: {0}")]
    UnknownSelectionPolicy(String),
}
