//! Subcommand implementations.

use std::path::{Path, PathBuf};

use anyhow::Result;

use wordform_core::config::{load_config_from, WordformConfig};
use wordform_core::{Catalog, SelectionPolicy};

pub mod check;
pub mod init;
pub mod pages;
pub mod quiz;
pub mod show;
pub mod validate;

/// Load config, apply `--catalog` and `--selection` overrides, and build the catalog.
pub fn load_catalog(
    config_path: Option<&Path>,
    catalog_override: Option<PathBuf>,
    selection_override: Option<SelectionPolicy>,
) -> Result<(WordformConfig, Catalog)> {
    let mut config = load_config_from(config_path)?;
    if let Some(path) = catalog_override {
        config.catalog = Some(path);
    }
    if let Some(selection) = selection_override {
        config.selection = selection;
    }

    let catalog = config.load_catalog()?;
    tracing::debug!(
        "catalog '{}': {} words, {} pages of {}",
        catalog.name(),
        catalog.len(),
        catalog.total_pages(),
        catalog.page_size()
    );

    Ok((config, catalog))
}
