//! Trainer configuration and catalog factory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, DEFAULT_PAGE_SIZE};
use crate::engine::SelectionPolicy;

/// Top-level wordform configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordformConfig {
    /// Catalog file to load instead of the built-in one.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    /// Words per quiz page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// How question forms are chosen.
    #[serde(default)]
    pub selection: SelectionPolicy,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for WordformConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            page_size: default_page_size(),
            selection: SelectionPolicy::default(),
        }
    }
}

impl WordformConfig {
    /// Load the configured catalog, or the built-in one.
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog {
            Some(path) => Catalog::from_file(path, self.page_size),
            None => Catalog::builtin(self.page_size),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are inserted as-is and never scanned again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        result.push_str(&rest[..start]);
        let var_name = &rest[start + 2..start + end];
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

/// Expand `${VAR}` references in a catalog path and anchor a relative result
/// at `base`.
fn resolve_catalog_path(path: &Path, base: Option<&Path>) -> PathBuf {
    let expanded = PathBuf::from(resolve_env_vars(&path.to_string_lossy()));
    match base {
        Some(dir) if expanded.is_relative() => dir.join(expanded),
        _ => expanded,
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without an explicit path:
/// 1. `wordform.toml` in the current directory
/// 2. `~/.config/wordform/config.toml`
///
/// A relative `catalog` in a config file is taken relative to that file.
/// Environment variable overrides: `WORDFORM_PAGE_SIZE`, `WORDFORM_CATALOG`.
pub fn load_config_from(path: Option<&Path>) -> Result<WordformConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("wordform.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            let mut config = parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            config.catalog = config
                .catalog
                .map(|p| resolve_catalog_path(&p, path.parent()));
            config
        }
        None => WordformConfig::default(),
    };

    // Apply env var overrides
    if let Ok(size) = std::env::var("WORDFORM_PAGE_SIZE") {
        match size.trim().parse::<usize>() {
            Ok(n) => config.page_size = n,
            Err(_) => tracing::warn!("ignoring invalid WORDFORM_PAGE_SIZE: '{size}'"),
        }
    }

    if let Ok(catalog) = std::env::var("WORDFORM_CATALOG") {
        if !catalog.trim().is_empty() {
            config.catalog = Some(resolve_catalog_path(Path::new(&catalog), None));
        }
    }

    anyhow::ensure!(config.page_size >= 1, "page_size must be at least 1");

    Ok(config)
}

/// Parse a TOML config string.
pub fn parse_config_str(content: &str) -> Result<WordformConfig> {
    Ok(toml::from_str::<WordformConfig>(content)?)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("wordform"))
}
