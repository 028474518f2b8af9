//! Hint search
//!
//! Finds one more playable word for a source word. The common-word table is
//! scanned first; only when it yields too few candidates does the engine
//! fall back to prefix searches against the lexeme service, validating each
//! networked candidate through the full pipeline.

use crate::config::HintConfig;
use crate::core::lexicon::{CommonWordTable, is_single_letter_word};
use crate::core::matcher::can_construct;
use crate::core::providers::{Lexeme, LexemeLookup, LexemeQuery};
use crate::core::safety::ProfanityLexicon;
use crate::core::validation::LexicalResolver;
use futures::future::join_all;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Weight given to table words so they sort ahead of networked ones
pub const LOCAL_RELEVANCE: f64 = 1_000_000.0;

#[derive(Debug, Clone, PartialEq)]
struct Candidate {
    word: String,
    frequency: f64,
}

/// Hint search engine
pub struct HintEngine {
    resolver: Arc<LexicalResolver>,
    lexemes: Arc<dyn LexemeLookup>,
    table: Arc<CommonWordTable>,
    profanity: Arc<ProfanityLexicon>,
    config: HintConfig,
    rng: Mutex<StdRng>,
}

impl HintEngine {
    /// Shares the resolver's lexicons and lexeme service. A configured seed pins
    /// every random choice.
    pub fn new(resolver: Arc<LexicalResolver>, config: HintConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(resolver, config, rng)
    }

    pub fn with_rng(resolver: Arc<LexicalResolver>, config: HintConfig, rng: StdRng) -> Self {
        Self {
            lexemes: resolver.services().lexemes.clone(),
            table: resolver.table().clone(),
            profanity: resolver.profanity().clone(),
            resolver,
            config,
            rng: Mutex::new(rng),
        }
    }

    pub fn config(&self) -> &HintConfig {
        &self.config
    }

    /// One constructible, unused, valid word other than `source`, if any.
    ///
    /// `used` holds canonical (upper-case) words. Never fails; lookup errors
    /// only shrink the candidate pool.
    pub async fn find_valid_hint(&self, source: &str, used: &HashSet<String>) -> Option<String> {
        let source = source.trim().to_uppercase();
        if source.is_empty() {
            return None;
        }

        let mut local = self.local_candidates(&source, used);
        if local.len() >= self.config.min_local_candidates {
            let index = self.rng.lock().gen_range(0..local.len());
            let hint = local.swap_remove(index);
            debug!(source = %source, hint = %hint, pool = local.len() + 1, "Hint from table");
            return Some(hint);
        }

        info!(
            source = %source,
            local = local.len(),
            "Too few table candidates, searching lexeme service"
        );
        let networked = self.network_candidates(&source, used).await;

        local.shuffle(&mut *self.rng.lock());
        let mut pool: Vec<Candidate> = local
            .into_iter()
            .map(|word| Candidate {
                word,
                frequency: LOCAL_RELEVANCE,
            })
            .chain(networked)
            .collect();
        pool.sort_by(|a, b| b.frequency.total_cmp(&a.frequency));

        let hint = pool.into_iter().next().map(|c| c.word);
        debug!(source = %source, hint = ?hint, "Hint search finished");
        hint
    }

    /// Every table word that passes the hint filters
    fn local_candidates(&self, source: &str, used: &HashSet<String>) -> Vec<String> {
        self.table
            .words()
            .filter(|word| self.within_length(word))
            .filter(|word| *word != source && !used.contains(*word))
            .filter(|word| can_construct(word, source))
            .filter(|word| !self.profanity.is_profane(word))
            .map(str::to_string)
            .collect()
    }

    async fn network_candidates(&self, source: &str, used: &HashSet<String>) -> Vec<Candidate> {
        let lexemes = self.prefix_search(source).await;
        let mut accepted = Vec::new();

        for lexeme in lexemes {
            if accepted.len() >= self.config.max_network_candidates {
                break;
            }

            let word = lexeme.word.trim().to_uppercase();
            if !self.is_network_candidate(&word, source, used) {
                continue;
            }

            let result = self.resolver.check_word_definition(&word).await;
            if result.is_valid() {
                debug!(word = %word, frequency = lexeme.frequency(), "Networked hint candidate");
                accepted.push(Candidate {
                    frequency: lexeme.frequency(),
                    word,
                });
            }
        }

        accepted
    }

    /// Concurrent per-letter prefix queries, merged, deduplicated and shuffled
    async fn prefix_search(&self, source: &str) -> Vec<Lexeme> {
        let mut letters: Vec<char> = source
            .chars()
            .filter(char::is_ascii_alphabetic)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        letters.sort_unstable();
        letters.shuffle(&mut *self.rng.lock());

        let limit = self.config.per_letter_limit;
        let queries = letters.iter().map(|&letter| async move {
            let query = LexemeQuery::starting_with(letter, limit);
            (letter, self.lexemes.words(&query).await)
        });

        let mut seen = HashSet::new();
        let mut merged = Vec::new();
        for (letter, outcome) in join_all(queries).await {
            match outcome {
                Ok(found) => merged.extend(
                    found
                        .into_iter()
                        .filter(|l| seen.insert(l.word.to_uppercase())),
                ),
                Err(e) => warn!(letter = %letter, error = %e, "Prefix search failed"),
            }
        }

        merged.shuffle(&mut *self.rng.lock());
        merged
    }

    fn is_network_candidate(&self, word: &str, source: &str, used: &HashSet<String>) -> bool {
        if word.chars().count() < 2 && !is_single_letter_word(word) {
            return false;
        }
        self.within_length(word)
            && word != source
            && !used.contains(word)
            && !self.table.contains(word)
            && word.chars().all(|c| c.is_ascii_alphabetic())
            && !self.profanity.is_profane(word)
            && can_construct(word, source)
    }

    fn within_length(&self, word: &str) -> bool {
        match word.chars().count() {
            0 => false,
            1 => is_single_letter_word(word),
            n => n <= self.config.max_word_len,
        }
    }
}
