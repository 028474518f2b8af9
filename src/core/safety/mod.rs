//! Content safety
//!
//! Leetspeak-aware blocklist matching for candidate words.

pub mod filter;
pub mod lexicon;

pub use filter::{ProfanityLexicon, is_profane, normalize};
