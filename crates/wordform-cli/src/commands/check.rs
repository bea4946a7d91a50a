//! The `wordform check` command.

use std::io;
use std::path::PathBuf;

use anyhow::Result;

use wordform_core::report::SessionReport;
use wordform_core::{QuizSession, SelectionPolicy};

use crate::display::{results_table, write_no_words, write_results};

pub fn execute(
    config_path: Option<PathBuf>,
    page: usize,
    answers: Vec<String>,
    round: u32,
    format: String,
    fail_on_wrong: bool,
    catalog_path: Option<PathBuf>,
    selection: Option<SelectionPolicy>,
) -> Result<()> {
    if !matches!(format.as_str(), "text" | "table" | "json" | "markdown" | "md") {
        anyhow::bail!("unknown format: {format} (expected text, table, json or markdown)");
    }

    let (config, catalog) = super::load_catalog(config_path.as_deref(), catalog_path, selection)?;
    let mut session = QuizSession::for_round(&catalog, page, config.selection, round);

    if session.is_empty() {
        return write_no_words(&mut io::stdout().lock(), page, catalog.total_pages());
    }

    anyhow::ensure!(
        answers.len() <= session.total(),
        "got {} answers but page {page} has {} question(s)",
        answers.len(),
        session.total()
    );

    for (index, answer) in answers.into_iter().enumerate() {
        session.set_answer(index, answer)?;
    }
    session.submit();

    let report = SessionReport::from_session(&session, &catalog)
        .ok_or_else(|| anyhow::anyhow!("session was not submitted"))?;

    match format.as_str() {
        "json" => {
            println!("{}", report.to_json()?);
        }
        "markdown" | "md" => {
            println!("{}", report.to_markdown());
        }
        "table" => {
            println!("{}", report.summary_line());
            println!("{}", results_table(&report));
        }
        _ => {
            write_results(&mut io::stdout().lock(), &report)?;
        }
    }

    if fail_on_wrong && !report.is_perfect() {
        std::process::exit(1);
    }

    Ok(())
}
