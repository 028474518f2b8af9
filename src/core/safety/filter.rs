//! Content safety filter

use super::lexicon::{CATEGORIES, HIGH_RISK_ROOTS, ROOT_EXCEPTIONS};
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::Arc;

static BUILTIN: Lazy<Arc<ProfanityLexicon>> =
    Lazy::new(|| Arc::new(ProfanityLexicon::builtin()));

/// Blocked words, high-risk roots and the root exception allowlist
#[derive(Debug, Clone, Default)]
pub struct ProfanityLexicon {
    words: HashSet<String>,
    roots: Vec<String>,
    exceptions: HashSet<String>,
}

impl ProfanityLexicon {
    pub fn new<W, R>(words: W, roots: R) -> Self
    where
        W: IntoIterator,
        W::Item: AsRef<str>,
        R: IntoIterator,
        R::Item: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_uppercase())
                .collect(),
            roots: roots
                .into_iter()
                .map(|r| r.as_ref().to_uppercase())
                .collect(),
            exceptions: HashSet::new(),
        }
    }

    pub fn with_exceptions<E>(mut self, exceptions: E) -> Self
    where
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        self.exceptions = exceptions
            .into_iter()
            .map(|e| e.as_ref().to_uppercase())
            .collect();
        self
    }

    /// The compiled-in lists
    pub fn builtin() -> Self {
        let words = CATEGORIES.iter().flat_map(|(_, words)| words.iter());
        Self::new(words, HIGH_RISK_ROOTS).with_exceptions(ROOT_EXCEPTIONS)
    }

    /// Process-wide instance of [`ProfanityLexicon::builtin`]
    pub fn global() -> &'static ProfanityLexicon {
        BUILTIN.as_ref()
    }

    /// Shared handle to the process-wide instance
    pub fn shared() -> Arc<ProfanityLexicon> {
        BUILTIN.clone()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// First match wins: raw word, normalized word, then root substrings.
    pub fn is_profane(&self, word: &str) -> bool {
        let raw = word.trim().to_uppercase();
        if raw.is_empty() {
            return false;
        }

        if self.words.contains(&raw) {
            return true;
        }

        let normalized = normalize(&raw);
        if normalized.is_empty() {
            return false;
        }

        if self.words.contains(&normalized) {
            return true;
        }

        if self.exceptions.contains(&normalized) {
            return false;
        }

        self.roots.iter().any(|root| normalized.contains(root.as_str()))
    }
}

/// Upper-case, undo common leetspeak digits, drop everything that is not A-Z.
///
/// `"SH1T"` becomes `"SHIT"`, `"F.U.C.K"` becomes `"FUCK"`.
pub fn normalize(word: &str) -> String {
    word.trim()
        .chars()
        .map(|c| match c.to_ascii_uppercase() {
            '0' => 'O',
            '1' => 'I',
            '3' => 'E',
            '4' => 'A',
            '5' => 'S',
            '7' => 'T',
            '8' => 'B',
            other => other,
        })
        .filter(|c| c.is_ascii_uppercase())
        .collect()
}

/// Check `word` against the built-in lexicon
pub fn is_profane(word: &str) -> bool {
    ProfanityLexicon::global().is_profane(word)
}
