//! Terminal rendering of questions and results.

use std::io::Write;

use anyhow::Result;
use comfy_table::{Cell, Table};

use wordform_core::report::SessionReport;
use wordform_core::{Catalog, QuizSession};

/// Header and numbered prompts of an unsubmitted page.
pub fn write_questions(out: &mut impl Write, session: &QuizSession) -> Result<()> {
    writeln!(out, "Page {} - Test Your Knowledge", session.page())?;
    writeln!(out)?;
    for (i, q) in session.questions().iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, q.prompt())?;
    }
    Ok(())
}

/// Score line and per-question feedback of a submitted page.
pub fn write_results(out: &mut impl Write, report: &SessionReport) -> Result<()> {
    writeln!(out, "Results for Page {}", report.page)?;
    writeln!(out, "{}", report.summary_line())?;
    writeln!(out)?;

    for r in &report.results {
        writeln!(
            out,
            "{}. What is the {} of \"{}\"?",
            r.index + 1,
            r.question.target_form.display_name(),
            r.question.prompt_word
        )?;
        let mark = if r.is_correct { "[ok]" } else { "[x] " };
        writeln!(out, "   {mark} Your answer: {}", r.answer_label())?;
        if !r.is_correct {
            writeln!(out, "        Correct answer: {}", r.correct_answer)?;
        }
    }
    Ok(())
}

/// Message shown for a page that holds no words.
pub fn write_no_words(out: &mut impl Write, page: usize, total_pages: usize) -> Result<()> {
    writeln!(
        out,
        "No more words: page {page} is outside the catalog ({total_pages} page(s))."
    )?;
    Ok(())
}

pub fn results_table(report: &SessionReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "Word", "Asked for", "Your answer", "Correct answer", "Result"]);

    for r in &report.results {
        table.add_row(vec![
            Cell::new(r.index + 1),
            Cell::new(&r.question.base_word),
            Cell::new(r.question.target_form.display_name()),
            Cell::new(r.answer_label()),
            Cell::new(&r.correct_answer),
            Cell::new(if r.is_correct { "correct" } else { "wrong" }),
        ]);
    }

    table
}

pub fn pages_table(catalog: &Catalog) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Page", "Words", "First", "Last"]);

    for page in 1..=catalog.total_pages() {
        let words = catalog.words_for_page(page);
        let first = words.first().map(|e| e.word()).unwrap_or("");
        let last = words.last().map(|e| e.word()).unwrap_or("");
        table.add_row(vec![
            Cell::new(page),
            Cell::new(words.len()),
            Cell::new(first),
            Cell::new(last),
        ]);
    }

    table
}
