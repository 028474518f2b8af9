//! Static word knowledge
//!
//! The common-word table is the fast path of validation and the first
//! source of hints; the keyword tables drive the gloss screens.

pub mod common_words;
pub mod keywords;

pub use keywords::*;

use common_words::COMMON_WORDS;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use std::sync::Arc;

static BUILTIN: Lazy<Arc<CommonWordTable>> =
    Lazy::new(|| Arc::new(CommonWordTable::builtin()));

/// Canonical word to gloss. Iteration is in alphabetical order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommonWordTable {
    entries: BTreeMap<String, String>,
}

impl CommonWordTable {
    /// Build from `(word, gloss)` pairs; words are upper-cased
    pub fn from_entries<I, W, G>(entries: I) -> Self
    where
        I: IntoIterator<Item = (W, G)>,
        W: AsRef<str>,
        G: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(w, g)| (w.as_ref().trim().to_uppercase(), g.into()))
                .collect(),
        }
    }

    pub fn builtin() -> Self {
        Self::from_entries(COMMON_WORDS.iter().copied())
    }

    /// Process-wide instance of [`CommonWordTable::builtin`]
    pub fn global() -> &'static CommonWordTable {
        BUILTIN.as_ref()
    }

    /// Shared handle to the process-wide instance
    pub fn shared() -> Arc<CommonWordTable> {
        BUILTIN.clone()
    }

    /// Gloss of a canonical (upper-case) word
    pub fn gloss(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(w, g)| (w.as_str(), g.as_str()))
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
