//! Datamuse response models

use serde::{Deserialize, Serialize};

/// One word from `GET /words`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lexeme {
    pub word: String,
    #[serde(default)]
    pub score: Option<u64>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Lexeme {
    /// Occurrences per million words, from an `f:<n>` tag
    pub fn frequency(&self) -> f64 {
        self.tags
            .iter()
            .find_map(|t| t.strip_prefix("f:"))
            .and_then(|f| f.parse::<f64>().ok())
            .unwrap_or(0.0)
    }

    pub fn is_proper_noun(&self) -> bool {
        self.tags.iter().any(|t| t == "prop")
    }
}

/// Metadata flags for the `md` parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metadata {
    Frequency,
    PartsOfSpeech,
}

impl Metadata {
    pub fn as_str(&self) -> &'static str {
        match self {
            Metadata::Frequency => "f",
            Metadata::PartsOfSpeech => "p",
        }
    }
}

/// Spelling query, `?` matches one letter and `*` any run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexemeQuery {
    pub spelled_like: String,
    pub metadata: Metadata,
    pub max: usize,
}

impl LexemeQuery {
    /// The exact spelling, with part-of-speech tags
    pub fn exact(word: &str) -> Self {
        Self {
            spelled_like: word.to_lowercase(),
            metadata: Metadata::PartsOfSpeech,
            max: 1,
        }
    }

    /// Words beginning with `letter`, with frequencies
    pub fn starting_with(letter: char, max: usize) -> Self {
        Self {
            spelled_like: format!("{}*", letter.to_ascii_lowercase()),
            metadata: Metadata::Frequency,
            max,
        }
    }

    /// A wildcard pattern, with frequencies
    pub fn pattern(pattern: impl Into<String>, max: usize) -> Self {
        Self {
            spelled_like: pattern.into(),
            metadata: Metadata::Frequency,
            max,
        }
    }
}
