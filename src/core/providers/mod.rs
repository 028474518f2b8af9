//! Lexical service clients
//!
//! Three external collaborators back the validation pipeline and the hint
//! search, each behind its own trait so the transport or the whole service
//! can be substituted:
//!
//! | Service | Trait | Default client |
//! |------|------|------|
//! | Dictionary by word | [`DictionaryLookup`] | [`FreeDictionaryClient`] |
//! | Gloss / translation | [`GlossLookup`] | [`YoudaoClient`] |
//! | Lexeme metadata | [`LexemeLookup`] | [`DatamuseClient`] |

pub mod dictionary;
pub mod error;
pub mod gloss;
pub mod lexeme;

pub use dictionary::{DictionaryEntry, DictionaryLookup, DictionaryOutcome, FreeDictionaryClient};
pub use error::LookupError;
pub use gloss::{GlossLookup, YoudaoClient};
pub use lexeme::{DatamuseClient, Lexeme, LexemeLookup, LexemeQuery, Metadata, exact_lexeme};

#[cfg(test)]
pub use dictionary::MockDictionaryLookup;
#[cfg(test)]
pub use gloss::MockGlossLookup;
#[cfg(test)]
pub use lexeme::MockLexemeLookup;

use crate::config::LookupConfig;
use crate::utils::net::{HttpTransport, ReqwestTransport};
use std::sync::Arc;

/// The three services, shared by the resolver, the hint engine and the preset generator
#[derive(Clone)]
pub struct LexicalServices {
    pub dictionary: Arc<dyn DictionaryLookup>,
    pub gloss: Arc<dyn GlossLookup>,
    pub lexemes: Arc<dyn LexemeLookup>,
}

impl LexicalServices {
    pub fn new(
        dictionary: Arc<dyn DictionaryLookup>,
        gloss: Arc<dyn GlossLookup>,
        lexemes: Arc<dyn LexemeLookup>,
    ) -> Self {
        Self {
            dictionary,
            gloss,
            lexemes,
        }
    }

    /// Default clients over one transport
    pub fn with_transport(transport: Arc<dyn HttpTransport>, config: &LookupConfig) -> Self {
        Self {
            dictionary: Arc::new(FreeDictionaryClient::new(
                transport.clone(),
                config.dictionary_api_base.clone(),
            )),
            gloss: Arc::new(YoudaoClient::new(
                transport.clone(),
                config.gloss_api_base.clone(),
            )),
            lexemes: Arc::new(DatamuseClient::new(
                transport,
                config.lexeme_api_base.clone(),
            )),
        }
    }

    /// Default clients over the pooled reqwest transport
    pub fn from_config(config: &LookupConfig) -> Self {
        let transport: Arc<dyn HttpTransport> = Arc::new(ReqwestTransport::from_config(config));
        Self::with_transport(transport, config)
    }
}
