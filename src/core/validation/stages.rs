//! Pipeline stages
//!
//! Each stage either lets the word through or settles the result. The
//! resolver runs them strictly in order and stops at the first final answer.

use super::types::{ErrorKind, ValidationResult};
use crate::core::lexicon::{
    CommonWordTable, is_single_letter_word, is_two_letter_word, is_whitelisted_abbreviation,
    mentions_abbreviation, mentions_general_pos, mentions_personal_name,
};
use crate::core::providers::{DictionaryEntry, Lexeme};
use crate::core::safety::ProfanityLexicon;

/// Gloss attached to words refused by the safety filter
pub const SAFETY_GLOSS: &str = "This word is not allowed in the game.";

/// Result of one stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Finish(ValidationResult),
}

/// The stages that need no network, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalStage {
    LengthGate,
    ProfanityGate,
    LocalTable,
}

impl LocalStage {
    pub const ORDER: [LocalStage; 3] = [
        LocalStage::LengthGate,
        LocalStage::ProfanityGate,
        LocalStage::LocalTable,
    ];
}

/// Single letters must be A or I; two letters must be whitelisted
pub fn length_gate(word: &str) -> Flow {
    match word.chars().count() {
        0 => Flow::Finish(ValidationResult::invalid()),
        1 if !is_single_letter_word(word) => Flow::Finish(ValidationResult::invalid()),
        2 if !is_two_letter_word(word) => Flow::Finish(ValidationResult::invalid()),
        _ => Flow::Continue,
    }
}

pub fn profanity_gate(word: &str, lexicon: &ProfanityLexicon) -> Flow {
    if lexicon.is_profane(word) {
        Flow::Finish(ValidationResult::rejected(ErrorKind::Invalid, SAFETY_GLOSS))
    } else {
        Flow::Continue
    }
}

/// Table words are settled locally: accepted with their gloss, unless the
/// gloss marks an abbreviation that is not whitelisted.
pub fn local_table_gate(word: &str, table: &CommonWordTable) -> Flow {
    match table.gloss(word) {
        Some(gloss) if mentions_abbreviation(gloss) && !is_whitelisted_abbreviation(word) => {
            Flow::Finish(ValidationResult::invalid())
        }
        Some(gloss) => Flow::Finish(ValidationResult::valid(gloss)),
        None => Flow::Continue,
    }
}

/// Screen the part-of-speech tags and senses of a dictionary entry.
///
/// Whitelisted short words skip the abbreviation screen.
pub fn entry_gate(word: &str, entry: &DictionaryEntry) -> Flow {
    let tags: Vec<String> = entry.parts_of_speech().map(str::to_lowercase).collect();

    if tags.iter().any(|t| t.contains("proper noun")) {
        return Flow::Finish(ValidationResult::proper_noun());
    }

    let abbreviation_tag = tags
        .iter()
        .any(|t| t.contains("abbreviation") || t.contains("acronym") || t.contains("initialism"));
    let short_for = entry
        .definitions()
        .any(|d| d.to_lowercase().contains("short for"));

    if (abbreviation_tag || short_for) && !is_whitelisted_abbreviation(word) {
        return Flow::Finish(ValidationResult::invalid());
    }

    Flow::Continue
}

/// Final verdict for a dictionary word, given its (possibly empty) gloss
pub fn gloss_verdict(word: &str, gloss: &str) -> ValidationResult {
    if mentions_abbreviation(gloss) && !is_whitelisted_abbreviation(word) {
        return ValidationResult::invalid();
    }

    if mentions_personal_name(gloss) && !mentions_general_pos(gloss) {
        return ValidationResult::proper_noun();
    }

    ValidationResult::valid(gloss)
}

/// Final verdict for a word the dictionary does not know
pub fn miss_verdict(lexeme: Option<&Lexeme>) -> ValidationResult {
    match lexeme {
        Some(lexeme) if lexeme.is_proper_noun() => ValidationResult::proper_noun(),
        _ => ValidationResult::invalid(),
    }
}
