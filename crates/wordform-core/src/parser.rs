//! TOML word catalog parser.
//!
//! Loads word catalogs from TOML files and validates them.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Accepted, FormKind, WordEntry};

/// Intermediate TOML structure for parsing catalog files.
#[derive(Debug, Deserialize)]
struct TomlCatalogFile {
    #[serde(default)]
    catalog: TomlCatalogHeader,
    #[serde(default)]
    words: Vec<TomlWordEntry>,
}

#[derive(Debug, Deserialize)]
struct TomlCatalogHeader {
    #[serde(default = "default_name")]
    name: String,
}

impl Default for TomlCatalogHeader {
    fn default() -> Self {
        Self {
            name: default_name(),
        }
    }
}

fn default_name() -> String {
    "Untitled catalog".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlWordEntry {
    word: String,
    #[serde(default)]
    verb: Option<Accepted>,
    #[serde(default)]
    noun_thing: Option<Accepted>,
    #[serde(default)]
    noun_person: Option<Accepted>,
    #[serde(default)]
    adjective: Option<Accepted>,
    #[serde(default)]
    adverb: Option<Accepted>,
}

impl TomlWordEntry {
    fn into_forms(self) -> (String, Vec<(FormKind, Accepted)>) {
        let forms = [
            (FormKind::Verb, self.verb),
            (FormKind::NounThing, self.noun_thing),
            (FormKind::NounPerson, self.noun_person),
            (FormKind::Adjective, self.adjective),
            (FormKind::Adverb, self.adverb),
        ]
        .into_iter()
        .filter_map(|(kind, accepted)| accepted.map(|a| (kind, a)))
        .collect();
        (self.word, forms)
    }
}

/// A parsed catalog, before it is split into pages.
#[derive(Debug, Clone)]
pub struct ParsedCatalog {
    pub name: String,
    pub entries: Vec<WordEntry>,
}

/// Parse a single TOML catalog file.
pub fn parse_catalog(path: &Path) -> Result<ParsedCatalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file: {}", path.display()))?;

    parse_catalog_str(&content, path)
}

/// Parse a TOML string into a catalog (useful for testing).
pub fn parse_catalog_str(content: &str, source_path: &Path) -> Result<ParsedCatalog> {
    let parsed: TomlCatalogFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let entries = parsed
        .words
        .into_iter()
        .enumerate()
        .map(|(i, w)| {
            let (word, forms) = w.into_forms();
            WordEntry::new(word, forms).with_context(|| {
                format!("invalid word #{} in {}", i + 1, source_path.display())
            })
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(
        "parsed {} words from {}",
        entries.len(),
        source_path.display()
    );

    Ok(ParsedCatalog {
        name: parsed.catalog.name,
        entries,
    })
}

/// A warning from catalog validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The word the warning is about (if applicable).
    pub word: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a catalog for authoring mistakes that still parse.
pub fn validate_catalog(entries: &[WordEntry]) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if entries.is_empty() {
        warnings.push(ValidationWarning {
            word: None,
            message: "catalog contains no words".into(),
        });
    }

    let mut seen_words = HashSet::new();
    for entry in entries {
        if !seen_words.insert(entry.word().to_lowercase()) {
            warnings.push(ValidationWarning {
                word: Some(entry.word().to_string()),
                message: format!("duplicate word: {}", entry.word()),
            });
        }
    }

    // Answers are trimmed before comparison, so padded spellings can never match
    for entry in entries {
        for (kind, accepted) in entry.forms() {
            if accepted.spellings().iter().any(|s| s.trim() != s) {
                warnings.push(ValidationWarning {
                    word: Some(entry.word().to_string()),
                    message: format!("{kind} spelling has surrounding whitespace"),
                });
            }
        }
    }

    for entry in entries {
        for (kind, accepted) in entry.forms() {
            let mut seen = HashSet::new();
            if accepted
                .spellings()
                .iter()
                .any(|s| !seen.insert(s.to_lowercase()))
            {
                warnings.push(ValidationWarning {
                    word: Some(entry.word().to_string()),
                    message: format!("{kind} lists the same spelling twice"),
                });
            }
        }
    }

    warnings
}
