//! wordform-core: word catalog, question engine and grading.
//!
//! This crate defines the word data model, splits the catalog into pages,
//! generates word-form questions, and grades learner answers. Presentation
//! layers drive it through [`trainer::Trainer`] and [`session::QuizSession`].

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod parser;
pub mod report;
pub mod session;
pub mod trainer;

pub use catalog::{Catalog, DEFAULT_PAGE_SIZE};
pub use engine::{generate_questions, generate_questions_for_words, SelectionPolicy};
pub use error::QuizError;
pub use model::{Accepted, FormKind, Question, WordEntry};
pub use session::{check_answer, QuizSession, SessionState};
pub use trainer::Trainer;
