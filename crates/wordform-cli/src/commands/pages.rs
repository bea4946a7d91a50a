//! The `wordform pages` command.

use std::path::PathBuf;

use anyhow::Result;

use crate::display::pages_table;

pub fn execute(config_path: Option<PathBuf>, catalog_path: Option<PathBuf>) -> Result<()> {
    let (_, catalog) = super::load_catalog(config_path.as_deref(), catalog_path, None)?;

    println!(
        "{}: {} words, {} page(s) of up to {}",
        catalog.name(),
        catalog.len(),
        catalog.total_pages(),
        catalog.page_size()
    );
    if !catalog.is_empty() {
        println!("{}", pages_table(&catalog));
    }

    Ok(())
}
