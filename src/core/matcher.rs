//! Letter-multiset matching
//!
//! Answers "can this word be built from the letters of that one". Letters
//! are compared case-insensitively; anything else is compared by raw
//! character identity, so callers upper-case and sanitize first.

use std::collections::HashMap;

/// Letter counts of a word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterMultiset {
    counts: HashMap<char, usize>,
}

impl LetterMultiset {
    pub fn from_word(word: &str) -> Self {
        let mut counts = HashMap::new();
        for c in fold(word) {
            *counts.entry(c).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn count(&self, letter: char) -> usize {
        self.counts
            .get(&letter.to_ascii_uppercase())
            .copied()
            .unwrap_or(0)
    }

    /// Every letter of `other` is present here at least as many times
    pub fn covers(&self, other: &LetterMultiset) -> bool {
        other
            .counts
            .iter()
            .all(|(c, n)| self.counts.get(c).is_some_and(|have| have >= n))
    }

    /// Distinct letters, in no particular order
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.counts.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

fn fold(word: &str) -> impl Iterator<Item = char> + '_ {
    word.chars().map(|c| c.to_ascii_uppercase())
}

/// Whether `candidate` can be spelled with the letters of `source`.
///
/// Scans the candidate once and stops at the first letter that is missing
/// from the source or used more often than the source has it.
pub fn can_construct(candidate: &str, source: &str) -> bool {
    let mut remaining = LetterMultiset::from_word(source).counts;

    for c in fold(candidate) {
        match remaining.get_mut(&c) {
            Some(n) if *n > 0 => *n -= 1,
            _ => return false,
        }
    }

    true
}
