//! The `wordform validate` command.

use std::path::PathBuf;

use anyhow::Result;

use wordform_core::parser::{parse_catalog, validate_catalog};

pub fn execute(catalog_path: PathBuf) -> Result<()> {
    let parsed = parse_catalog(&catalog_path)?;

    println!("Catalog: {} ({} words)", parsed.name, parsed.entries.len());

    let warnings = validate_catalog(&parsed.entries);
    for w in &warnings {
        let prefix = w
            .word
            .as_ref()
            .map(|word| format!("  [{word}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Catalog valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
