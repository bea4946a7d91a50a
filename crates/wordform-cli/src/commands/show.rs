//! The `wordform show` command.

use std::io;
use std::path::PathBuf;

use anyhow::Result;

use wordform_core::{QuizSession, SelectionPolicy};

use crate::display::{write_no_words, write_questions};

pub fn execute(
    config_path: Option<PathBuf>,
    page: usize,
    round: u32,
    catalog_path: Option<PathBuf>,
    selection: Option<SelectionPolicy>,
) -> Result<()> {
    let (config, catalog) = super::load_catalog(config_path.as_deref(), catalog_path, selection)?;
    let session = QuizSession::for_round(&catalog, page, config.selection, round);

    let mut out = io::stdout().lock();
    if session.is_empty() {
        write_no_words(&mut out, page, catalog.total_pages())
    } else {
        write_questions(&mut out, &session)
    }
}
