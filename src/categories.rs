//! Keyword categorizer
//!
//! Assigns category labels to free text by case-insensitive substring match
//! against a fixed keyword table. A text may match any number of labels.

use crate::error::ConfigError;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

/// Built-in keyword table used when no table file is configured
const DEFAULT_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Study",
        &["study", "exam", "revision", "homework", "assignment", "notes", "college"],
    ),
    (
        "Work",
        &["meeting", "project", "deadline", "client", "office", "report"],
    ),
    (
        "Coding",
        &["bug", "code", "api", "error", "debug", "deploy", "frontend", "backend"],
    ),
    (
        "Health",
        &["gym", "exercise", "doctor", "medicine", "workout", "health"],
    ),
    (
        "Personal",
        &["shopping", "clean", "travel", "family", "call", "buy"],
    ),
    ("General", &[]),
];

/// Immutable mapping from category label to lowercase keywords
///
/// Built once at startup and shared read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    entries: BTreeMap<String, Vec<String>>,
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORIES.iter().map(|(label, keywords)| (*label, keywords.iter())))
    }
}

impl CategoryTable {
    /// Build a table from `(label, keywords)` pairs
    ///
    /// Keywords are trimmed and lowercased. Blank keywords are dropped since an
    /// empty substring would match every text. Repeated labels merge their keywords.
    pub fn new<I, L, K, W>(entries: I) -> Self
    where
        I: IntoIterator<Item = (L, K)>,
        L: Into<String>,
        K: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let mut table: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (label, keywords) in entries {
            let slot = table.entry(label.into()).or_default();
            for keyword in keywords {
                let keyword = keyword.as_ref().trim().to_lowercase();
                if !keyword.is_empty() && !slot.contains(&keyword) {
                    slot.push(keyword);
                }
            }
        }
        Self { entries: table }
    }

    /// Parse a table from TOML of the form `Label = ["keyword", ...]`
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        let raw: BTreeMap<String, Vec<String>> = toml::from_str(content)?;
        Ok(Self::new(raw))
    }

    /// Load a table from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the keyword table file
    ///
    /// # Returns
    /// The parsed table, or a `ConfigError` naming the file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Category labels in sorted order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Keywords registered for a label
    pub fn keywords(&self, label: &str) -> Option<&[String]> {
        self.entries.get(label).map(Vec::as_slice)
    }

    /// Number of labels in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Labels whose keywords occur in `text`
    ///
    /// Matching is case-insensitive substring search. Each label stops at its
    /// first matching keyword.
    pub fn categorize(&self, text: &str) -> BTreeSet<String> {
        let normalized = text.to_lowercase();
        self.entries
            .iter()
            .filter(|(_, keywords)| keywords.iter().any(|k| normalized.contains(k.as_str())))
            .map(|(label, _)| label.clone())
            .collect()
    }
}

/// Categorize `text` against `table`
pub fn categorize(text: &str, table: &CategoryTable) -> BTreeSet<String> {
    table.categorize(text)
}
