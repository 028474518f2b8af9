//! Configuration data models
//!
//! This module defines all configuration structures used by the word-duel core.

#![allow(missing_docs)]

pub mod game;
pub mod hint;
pub mod logging;
pub mod lookup;

// Re-export all configuration types
pub use game::*;
pub use hint::*;
pub use logging::*;
pub use lookup::*;

/// Default request timeout in seconds
pub fn default_timeout() -> u64 {
    8
}

pub fn default_dictionary_api_base() -> String {
    "https://api.dictionaryapi.dev/api/v2/entries/en".to_string()
}

pub fn default_gloss_api_base() -> String {
    "https://dict.youdao.com".to_string()
}

pub fn default_lexeme_api_base() -> String {
    "https://api.datamuse.com".to_string()
}

pub fn default_min_local_candidates() -> usize {
    3
}

pub fn default_max_network_candidates() -> usize {
    5
}

pub fn default_per_letter_limit() -> usize {
    100
}

pub fn default_max_word_len() -> usize {
    12
}

pub fn default_min_source_len() -> usize {
    6
}

pub fn default_players() -> usize {
    2
}

pub fn default_log_level() -> String {
    "info".to_string()
}
