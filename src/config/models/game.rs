//! Game setup configuration

use super::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Shortest acceptable source word
    #[serde(default = "default_min_source_len")]
    pub min_source_len: usize,
    /// Players seated when none are named
    #[serde(default = "default_players")]
    pub default_players: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_source_len: default_min_source_len(),
            default_players: default_players(),
        }
    }
}
