//! Youdao suggest response models

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuggestResponse {
    #[serde(default)]
    pub data: Option<SuggestData>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuggestData {
    #[serde(default)]
    pub entries: Vec<SuggestEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuggestEntry {
    #[serde(default)]
    pub entry: String,
    #[serde(default)]
    pub explain: String,
}

impl SuggestResponse {
    /// `explain` of the first entry
    pub fn first_explain(&self) -> Option<&str> {
        self.data
            .as_ref()
            .and_then(|d| d.entries.first())
            .map(|e| e.explain.as_str())
    }
}
