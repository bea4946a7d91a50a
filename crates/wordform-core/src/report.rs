//! Session report: a snapshot of a submitted quiz page.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::session::{QuestionResult, QuizSession};

/// Results of one submitted page attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    /// When the answers were checked.
    pub created_at: DateTime<Utc>,
    /// Name of the catalog the questions came from.
    pub catalog: String,
    pub page: usize,
    pub total_pages: usize,
    /// 0 for the first attempt, incremented on each retry.
    pub round: u32,
    /// Number of correct answers.
    pub score: usize,
    /// Number of questions on the page.
    pub total: usize,
    /// Per-question feedback in page order.
    pub results: Vec<QuestionResult>,
}

impl SessionReport {
    /// Build a report from a session. `None` until the session is submitted.
    pub fn from_session(session: &QuizSession, catalog: &Catalog) -> Option<Self> {
        let results = session.results()?;
        Some(Self {
            created_at: Utc::now(),
            catalog: catalog.name().to_string(),
            page: session.page(),
            total_pages: catalog.total_pages(),
            round: session.round(),
            score: session.score(),
            total: session.total(),
            results,
        })
    }

    /// Fraction of correct answers in `0.0..=1.0`; 0 for an empty page.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.score as f64 / self.total as f64
    }

    pub fn is_perfect(&self) -> bool {
        self.total > 0 && self.score == self.total
    }

    /// Questions answered incorrectly.
    pub fn missed(&self) -> impl Iterator<Item = &QuestionResult> {
        self.results.iter().filter(|r| !r.is_correct)
    }

    /// One-line score summary.
    pub fn summary_line(&self) -> String {
        format!("You scored {} out of {}!", self.score, self.total)
    }

    /// Serialize the report as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize session report")
    }

    /// Format the report as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!("### Results for Page {}\n\n", self.page));
        md.push_str(&format!(
            "**Score:** {} / {} ({:.0}%)\n\n",
            self.score,
            self.total,
            self.ratio() * 100.0
        ));

        md.push_str("| # | Question | Your answer | Correct answer | |\n");
        md.push_str("|---|----------|-------------|----------------|---|\n");
        for r in &self.results {
            md.push_str(&format!(
                "| {} | {} of \"{}\" | {} | {} | {} |\n",
                r.index + 1,
                r.question.target_form.display_name(),
                r.question.prompt_word,
                r.answer_label(),
                r.correct_answer,
                if r.is_correct { "ok" } else { "wrong" }
            ));
        }

        md
    }
}
