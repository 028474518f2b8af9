//! Free Dictionary API response models

use serde::{Deserialize, Serialize};

/// One headword returned by `GET /entries/en/{word}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub word: String,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

/// A meaning group: one part of speech and its senses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meaning {
    #[serde(rename = "partOfSpeech", default)]
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    #[serde(default)]
    pub definition: String,
}

impl DictionaryEntry {
    pub fn parts_of_speech(&self) -> impl Iterator<Item = &str> {
        self.meanings.iter().map(|m| m.part_of_speech.as_str())
    }

    pub fn definitions(&self) -> impl Iterator<Item = &str> {
        self.meanings
            .iter()
            .flat_map(|m| m.definitions.iter())
            .map(|d| d.definition.as_str())
    }
}

/// Result of a dictionary lookup that reached the server
#[derive(Debug, Clone, PartialEq)]
pub enum DictionaryOutcome {
    Found(Vec<DictionaryEntry>),
    /// 404, or an empty entry list
    NotFound,
    /// Any other non-success status
    Unavailable(u16),
}
