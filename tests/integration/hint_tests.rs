//! Hint search integration tests

#[cfg(test)]
mod tests {
    use crate::common::MockServices;
    use std::collections::HashSet;
    use word_duel::{CommonWordTable, can_construct};

    fn table_candidates(source: &str, used: &HashSet<String>) -> HashSet<String> {
        CommonWordTable::global()
            .words()
            .filter(|w| *w != source && !used.contains(*w))
            .filter(|w| w.len() <= 12 && can_construct(w, source))
            .map(str::to_string)
            .collect()
    }

    /// Enough table words: the hint comes from the table with no request
    #[tokio::test]
    async fn test_table_hint_for_planets() {
        let services = MockServices::start().await;
        services.expect_no_requests().await;
        let engine = services.hint_engine(5);

        let used: HashSet<String> = ["PLANE", "PLANET", "PLANES"]
            .iter()
            .map(|w| w.to_string())
            .collect();
        let allowed = table_candidates("PLANETS", &used);

        for _ in 0..25 {
            let hint = engine.find_valid_hint("PLANETS", &used).await;
            let hint = hint.expect("PLANETS has table candidates");
            assert!(allowed.contains(&hint), "{hint} is not a table candidate");
        }
    }

    /// No table words: the best validated networked word wins
    #[tokio::test]
    async fn test_networked_hint_for_glyph() {
        let services = MockServices::start().await;
        services
            .lexeme_prefix('p', &[("ply", 2.5), ("phly", 9.0), ("plug", 50.0)])
            .await;
        services.lexeme_prefix('h', &[("hyp", 0.4)]).await;
        services.dictionary_found("ply", "noun").await;
        services.dictionary_found("hyp", "noun").await;
        services.dictionary_not_found("phly").await;

        let engine = services.hint_engine(8);
        let hint = engine.find_valid_hint("GLYPH", &HashSet::new()).await;
        assert_eq!(hint.as_deref(), Some("PLY"));
    }

    #[tokio::test]
    async fn test_used_networked_word_skipped() {
        let services = MockServices::start().await;
        services.lexeme_prefix('p', &[("ply", 2.5)]).await;
        services.lexeme_prefix('h', &[("hyp", 0.4)]).await;
        services.dictionary_found("ply", "noun").await;
        services.dictionary_found("hyp", "noun").await;

        let used: HashSet<String> = ["PLY".to_string()].into_iter().collect();
        let hint = services
            .hint_engine(8)
            .find_valid_hint("GLYPH", &used)
            .await;
        assert_eq!(hint.as_deref(), Some("HYP"));
    }

    /// One bounded prefix query per distinct letter
    #[tokio::test]
    async fn test_prefix_queries_per_letter() {
        let services = MockServices::start().await;
        let hint = services
            .hint_engine(1)
            .find_valid_hint("GLYPHH", &HashSet::new())
            .await;
        assert_eq!(hint, None);

        let requests = services.server.received_requests().await.unwrap_or_default();
        let patterns: HashSet<String> = requests
            .iter()
            .filter(|r| r.url.path() == "/words")
            .map(|r| {
                let pairs: Vec<(String, String)> = r.url.query_pairs().into_owned().collect();
                assert!(pairs.contains(&("max".to_string(), "100".to_string())));
                assert!(pairs.contains(&("md".to_string(), "f".to_string())));
                pairs
                    .into_iter()
                    .find(|(k, _)| k == "sp")
                    .map(|(_, v)| v)
                    .unwrap_or_default()
            })
            .collect();

        let expected: HashSet<String> = ["g*", "l*", "y*", "p*", "h*"]
            .iter()
            .map(|p| p.to_string())
            .collect();
        assert_eq!(patterns, expected);
        assert_eq!(requests.len(), 5);
    }

    /// Lookup failures degrade to "no hint"
    #[tokio::test]
    async fn test_unreachable_services_yield_none() {
        let config = word_duel::config::LookupConfig {
            timeout_secs: 1,
            ..word_duel::config::LookupConfig::with_base_url("http://127.0.0.1:9")
        };
        let resolver = std::sync::Arc::new(word_duel::LexicalResolver::from_config(&config));
        let engine = word_duel::HintEngine::new(resolver, Default::default());

        assert_eq!(engine.find_valid_hint("GLYPH", &HashSet::new()).await, None);
    }
}
