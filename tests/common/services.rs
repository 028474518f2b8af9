//! Mock lexical services
//!
//! One `wiremock` server stands in for the dictionary, gloss and lexeme
//! APIs. Unmatched requests get wiremock's default 404, which every client
//! reads as "no answer".

use super::fixtures;
use serde_json::Value;
use std::sync::Arc;
use word_duel::config::{HintConfig, LookupConfig};
use word_duel::{HintEngine, LexicalResolver, LexicalServices};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct MockServices {
    pub server: MockServer,
}

impl MockServices {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Lookup configuration pointing every service at the mock server
    pub fn config(&self) -> LookupConfig {
        LookupConfig {
            timeout_secs: 2,
            ..LookupConfig::with_base_url(&self.server.uri())
        }
    }

    pub fn services(&self) -> LexicalServices {
        LexicalServices::from_config(&self.config())
    }

    pub fn resolver(&self) -> LexicalResolver {
        LexicalResolver::new(self.services())
    }

    pub fn hint_engine(&self, seed: u64) -> HintEngine {
        HintEngine::new(
            Arc::new(self.resolver()),
            HintConfig {
                seed: Some(seed),
                ..HintConfig::default()
            },
        )
    }

    fn dictionary_path(word: &str) -> String {
        format!("/api/v2/entries/en/{}", word.to_lowercase())
    }

    pub async fn dictionary_found(&self, word: &str, pos: &str) {
        self.dictionary_body(word, 200, fixtures::dictionary_entry(word, &[pos]))
            .await;
    }

    pub async fn dictionary_body(&self, word: &str, status: u16, body: Value) {
        Mock::given(method("GET"))
            .and(path(Self::dictionary_path(word)))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    pub async fn dictionary_not_found(&self, word: &str) {
        self.dictionary_body(word, 404, fixtures::dictionary_not_found())
            .await;
    }

    /// Fail the test if any request reaches the server
    pub async fn expect_no_requests(&self) {
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&self.server)
            .await;
    }

    pub async fn gloss(&self, query: &str, explain: &str) {
        Mock::given(method("GET"))
            .and(path("/suggest"))
            .and(query_param("q", query))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::gloss(query, explain)))
            .mount(&self.server)
            .await;
    }

    pub async fn gloss_empty(&self, query: &str) {
        Mock::given(method("GET"))
            .and(path("/suggest"))
            .and(query_param("q", query))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::gloss_empty(query)))
            .mount(&self.server)
            .await;
    }

    pub async fn lexeme_exact(&self, word: &str, tags: &[&str]) {
        let word = word.to_lowercase();
        Mock::given(method("GET"))
            .and(path("/words"))
            .and(query_param("sp", word.as_str()))
            .and(query_param("md", "p"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(fixtures::lexeme_tags(&word, tags)),
            )
            .mount(&self.server)
            .await;
    }

    pub async fn lexeme_prefix(&self, letter: char, words: &[(&str, f64)]) {
        let pattern = format!("{}*", letter.to_ascii_lowercase());
        Mock::given(method("GET"))
            .and(path("/words"))
            .and(query_param("sp", pattern.as_str()))
            .and(query_param("md", "f"))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::lexemes(words)))
            .mount(&self.server)
            .await;
    }
}
