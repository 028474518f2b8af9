//! Core functionality for the word game
//!
//! Matching, safety filtering, word validation, hint search and presets.

pub mod hint;
pub mod lexicon;
pub mod matcher;
pub mod presets;
pub mod providers;
pub mod safety;
pub mod validation;

use crate::config::Config;
use crate::utils::error::Result;
use hint::HintEngine;
use presets::PresetGenerator;
use providers::LexicalServices;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};
use validation::{LexicalResolver, ValidationResult};

/// Wires the resolver, hint engine and preset generator over one set of services
#[derive(Clone)]
pub struct WordDuel {
    config: Arc<Config>,
    resolver: Arc<LexicalResolver>,
    hints: Arc<HintEngine>,
    presets: Arc<PresetGenerator>,
}

impl WordDuel {
    /// Build over the default HTTP clients
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let services = LexicalServices::from_config(&config.lookup);
        Ok(Self::with_services(config, services))
    }

    /// Build over caller-supplied services
    pub fn with_services(config: Config, services: LexicalServices) -> Self {
        info!("Initializing word duel core");

        debug!("Initializing lexical resolver");
        let lexemes = services.lexemes.clone();
        let resolver = Arc::new(LexicalResolver::new(services));

        debug!(seed = ?config.hint.seed, "Initializing hint engine");
        let hints = Arc::new(HintEngine::new(resolver.clone(), config.hint.clone()));
        let presets = Arc::new(PresetGenerator::new(lexemes, config.hint.seed));

        Self {
            config: Arc::new(config),
            resolver,
            hints,
            presets,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn resolver(&self) -> &Arc<LexicalResolver> {
        &self.resolver
    }

    pub fn hints(&self) -> &Arc<HintEngine> {
        &self.hints
    }

    pub fn presets(&self) -> &Arc<PresetGenerator> {
        &self.presets
    }

    pub async fn check_word_definition(&self, word: &str) -> ValidationResult {
        self.resolver.check_word_definition(word).await
    }

    pub async fn find_valid_hint(&self, source: &str, used: &HashSet<String>) -> Option<String> {
        self.hints.find_valid_hint(source, used).await
    }

    pub async fn fetch_new_presets(&self) -> Vec<String> {
        self.presets.fetch_new_presets().await
    }
}
