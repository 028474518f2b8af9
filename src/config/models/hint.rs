//! Hint search configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Budget controls for the hint search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HintConfig {
    /// Local candidates needed to skip the networked phase
    #[serde(default = "default_min_local_candidates")]
    pub min_local_candidates: usize,
    /// Networked candidates after which validation stops
    #[serde(default = "default_max_network_candidates")]
    pub max_network_candidates: usize,
    /// Result cap for each per-letter prefix query
    #[serde(default = "default_per_letter_limit")]
    pub per_letter_limit: usize,
    /// Longest word a hint may be
    #[serde(default = "default_max_word_len")]
    pub max_word_len: usize,
    /// Fixed seed for the tie-break shuffle
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for HintConfig {
    fn default() -> Self {
        Self {
            min_local_candidates: default_min_local_candidates(),
            max_network_candidates: default_max_network_candidates(),
            per_letter_limit: default_per_letter_limit(),
            max_word_len: default_max_word_len(),
            seed: None,
        }
    }
}
