//! # word-duel
//!
//! Word validation and hint search for a turn-based word construction game.
//! Players build new words from the letters of a shared source word; this
//! crate decides which guesses count.
//!
//! ## Features
//!
//! - **Letter matching**: can one word be spelled with another's letters
//! - **Safety filter**: blocklist with leetspeak normalization and root checks
//! - **Word validation**: common-word table, dictionary, gloss and lexeme services
//! - **Hints**: table-first search with a bounded networked fallback
//! - **Game session**: turns, scores, history and the used-word set
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use word_duel::{WordDuel, Config};
//! use std::collections::HashSet;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let duel = WordDuel::new(Config::default())?;
//!
//!     let result = duel.check_word_definition("planet").await;
//!     println!("valid: {}, gloss: {}", result.is_valid(), result.gloss());
//!
//!     let hint = duel.find_valid_hint("PLANETS", &HashSet::new()).await;
//!     println!("hint: {:?}", hint);
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod game;
pub mod utils;

pub use config::Config;
pub use utils::error::{DuelError, Result};

pub use crate::core::WordDuel;
pub use crate::core::hint::HintEngine;
pub use crate::core::lexicon::CommonWordTable;
pub use crate::core::matcher::{LetterMultiset, can_construct};
pub use crate::core::presets::{DEFAULT_PRESETS, PresetGenerator};
pub use crate::core::providers::{LexicalServices, LookupError};
pub use crate::core::safety::{ProfanityLexicon, is_profane, normalize};
pub use crate::core::validation::{ErrorKind, LexicalResolver, ValidationResult};
pub use game::{AcceptedGuess, GameSession, GuessRejection, HistoryEntry};

use once_cell::sync::Lazy;
use std::collections::HashSet;

static DEFAULT_DUEL: Lazy<WordDuel> = Lazy::new(|| {
    let config = Config::default();
    let services = LexicalServices::from_config(&config.lookup);
    WordDuel::with_services(config, services)
});

/// Validate a word against the default public services
pub async fn check_word_definition(word: &str) -> ValidationResult {
    DEFAULT_DUEL.check_word_definition(word).await
}

/// Find a hint using the default public services
pub async fn find_valid_hint(source: &str, used: &HashSet<String>) -> Option<String> {
    DEFAULT_DUEL.find_valid_hint(source, used).await
}

/// Fetch fresh presets using the default public services
pub async fn fetch_new_presets() -> Vec<String> {
    DEFAULT_DUEL.fetch_new_presets().await
}

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    pub version: &'static str,
    /// Seconds since the epoch
    pub build_time: &'static str,
    pub git_hash: &'static str,
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: option_env!("WORD_DUEL_BUILD_TIME").unwrap_or("unknown"),
            git_hash: option_env!("WORD_DUEL_GIT_HASH").unwrap_or("unknown"),
            rust_version: option_env!("WORD_DUEL_RUST_VERSION").unwrap_or("unknown"),
        }
    }
}

pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
