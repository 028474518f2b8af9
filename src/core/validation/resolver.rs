//! Lexical resolution service

use super::stages::{
    Flow, LocalStage, entry_gate, gloss_verdict, length_gate, local_table_gate, miss_verdict,
    profanity_gate,
};
use super::types::ValidationResult;
use crate::config::LookupConfig;
use crate::core::lexicon::CommonWordTable;
use crate::core::providers::{DictionaryOutcome, LexicalServices, LookupError, exact_lexeme};
use crate::core::safety::ProfanityLexicon;
use std::sync::Arc;
use tracing::{debug, warn};

/// Decides whether a word is a playable general English word.
///
/// Holds only read-only state and may be shared across tasks.
#[derive(Clone)]
pub struct LexicalResolver {
    services: LexicalServices,
    table: Arc<CommonWordTable>,
    profanity: Arc<ProfanityLexicon>,
}

impl LexicalResolver {
    /// Resolver over the built-in lexicons
    pub fn new(services: LexicalServices) -> Self {
        Self::with_tables(
            services,
            CommonWordTable::shared(),
            ProfanityLexicon::shared(),
        )
    }

    pub fn from_config(config: &LookupConfig) -> Self {
        Self::new(LexicalServices::from_config(config))
    }

    pub fn with_tables(
        services: LexicalServices,
        table: Arc<CommonWordTable>,
        profanity: Arc<ProfanityLexicon>,
    ) -> Self {
        Self {
            services,
            table,
            profanity,
        }
    }

    pub fn services(&self) -> &LexicalServices {
        &self.services
    }

    pub fn table(&self) -> &Arc<CommonWordTable> {
        &self.table
    }

    pub fn profanity(&self) -> &Arc<ProfanityLexicon> {
        &self.profanity
    }

    /// Validate a word. Never fails: every failure path is a result.
    pub async fn check_word_definition(&self, word: &str) -> ValidationResult {
        let raw = word.trim();
        if raw.is_empty() {
            return ValidationResult::invalid();
        }
        let canonical = raw.to_uppercase();

        if let Flow::Finish(result) = self.run_local(&canonical) {
            debug!(word = %canonical, kind = ?result.error_kind(), "Settled without lookup");
            return result;
        }

        match self.resolve_remote(raw, &canonical).await {
            Ok(result) => {
                debug!(word = %canonical, kind = ?result.error_kind(), "Settled by lookup");
                result
            }
            Err(e) => {
                warn!(
                    word = %canonical,
                    service = e.service(),
                    transport = e.is_network(),
                    error = %e,
                    "Lookup failed"
                );
                ValidationResult::network_error()
            }
        }
    }

    fn run_local(&self, canonical: &str) -> Flow {
        for stage in LocalStage::ORDER {
            let flow = match stage {
                LocalStage::LengthGate => length_gate(canonical),
                LocalStage::ProfanityGate => profanity_gate(canonical, &self.profanity),
                LocalStage::LocalTable => local_table_gate(canonical, &self.table),
            };
            if let Flow::Finish(_) = flow {
                return flow;
            }
        }
        Flow::Continue
    }

    async fn resolve_remote(
        &self,
        raw: &str,
        canonical: &str,
    ) -> Result<ValidationResult, LookupError> {
        let entries = match self.services.dictionary.lookup(raw).await? {
            DictionaryOutcome::Found(entries) => entries,
            DictionaryOutcome::NotFound => {
                let lexeme = exact_lexeme(self.services.lexemes.as_ref(), raw).await?;
                return Ok(miss_verdict(lexeme.as_ref()));
            }
            DictionaryOutcome::Unavailable(status) => {
                debug!(word = %canonical, status, "Dictionary unavailable, failing closed");
                return Ok(ValidationResult::invalid());
            }
        };

        // Only the first meaning group decides.
        let screened = entries.first().map(|entry| entry_gate(canonical, entry));
        if let Some(Flow::Finish(result)) = screened {
            return Ok(result);
        }

        let gloss = self.fetch_gloss(raw).await;
        Ok(gloss_verdict(canonical, &gloss))
    }

    /// Lower-case query first, then the original casing. Failure is an empty gloss.
    async fn fetch_gloss(&self, raw: &str) -> String {
        let lower = raw.to_lowercase();
        let mut queries = vec![lower.as_str()];
        if raw != lower {
            queries.push(raw);
        }

        for query in queries {
            match self.services.gloss.explain(query).await {
                Ok(Some(gloss)) => return gloss,
                Ok(None) => continue,
                Err(e) => {
                    warn!(word = %raw, error = %e, "Gloss lookup failed");
                    return String::new();
                }
            }
        }

        String::new()
    }
}
