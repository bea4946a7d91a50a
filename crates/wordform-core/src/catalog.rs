//! The word catalog and its fixed-size pages.

use std::path::Path;

use anyhow::Result;

use crate::error::QuizError;
use crate::model::WordEntry;
use crate::parser;

/// Words per page when no size is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Catalog shipped with the binary.
const BUILTIN_CATALOG: &str = include_str!("../data/words.toml");

/// An ordered, in-memory word catalog split into positional pages.
#[derive(Debug, Clone)]
pub struct Catalog {
    name: String,
    entries: Vec<WordEntry>,
    page_size: usize,
    total_pages: usize,
}

impl Catalog {
    pub fn new(
        name: impl Into<String>,
        entries: Vec<WordEntry>,
        page_size: usize,
    ) -> Result<Self, QuizError> {
        if page_size == 0 {
            return Err(QuizError::InvalidPageSize);
        }
        let total_pages = entries.len().div_ceil(page_size);
        Ok(Self {
            name: name.into(),
            entries,
            page_size,
            total_pages,
        })
    }

    /// The catalog embedded in the binary.
    pub fn builtin(page_size: usize) -> Result<Self> {
        let parsed = parser::parse_catalog_str(BUILTIN_CATALOG, Path::new("<builtin>"))?;
        Ok(Self::new(parsed.name, parsed.entries, page_size)?)
    }

    /// Load a catalog from a TOML file.
    pub fn from_file(path: &Path, page_size: usize) -> Result<Self> {
        let parsed = parser::parse_catalog(path)?;
        Ok(Self::new(parsed.name, parsed.entries, page_size)?)
    }

    /// Entries on a 1-based page. Page 0 and pages past the end are empty.
    pub fn words_for_page(&self, page: usize) -> &[WordEntry] {
        let Some(start) = page
            .checked_sub(1)
            .and_then(|p| p.checked_mul(self.page_size))
        else {
            return &[];
        };
        if start >= self.entries.len() {
            return &[];
        }
        let end = (start + self.page_size).min(self.entries.len());
        &self.entries[start..end]
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
