//! Validation pipeline integration tests

#[cfg(test)]
mod tests {
    use crate::common::MockServices;
    use crate::common::assertions::ValidationAssertions;
    use crate::common::fixtures;
    use std::time::Duration;
    use word_duel::config::LookupConfig;
    use word_duel::{ErrorKind, LexicalResolver};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, ResponseTemplate};

    // ==================== Local gates ====================

    /// Whitelisted two-letter words and table words never reach the network
    #[tokio::test]
    async fn test_local_words_make_no_requests() {
        let services = MockServices::start().await;
        services.expect_no_requests().await;
        let resolver = services.resolver();

        resolver.check_word_definition("TO").await.assert_valid();
        resolver.check_word_definition("a").await.assert_valid();
        resolver.check_word_definition("PLANE").await.assert_valid();
        resolver
            .check_word_definition("NI")
            .await
            .assert_rejected(ErrorKind::Invalid);
        resolver
            .check_word_definition("B")
            .await
            .assert_rejected(ErrorKind::Invalid);
        resolver
            .check_word_definition("5h1t")
            .await
            .assert_rejected(ErrorKind::Invalid);
    }

    // ==================== Dictionary hits ====================

    #[tokio::test]
    async fn test_dictionary_word_takes_gloss() {
        let services = MockServices::start().await;
        services.dictionary_found("petals", "noun").await;
        services.gloss("petals", "n. 花瓣（petal 的复数）").await;

        let result = services.resolver().check_word_definition("petals").await;
        result.assert_valid();
        assert_eq!(result.gloss(), "n. 花瓣（petal 的复数）");
    }

    #[tokio::test]
    async fn test_proper_noun_tag() {
        let services = MockServices::start().await;
        services.dictionary_found("paris", "proper noun").await;

        services
            .resolver()
            .check_word_definition("Paris")
            .await
            .assert_rejected(ErrorKind::ProperNoun);
    }

    #[tokio::test]
    async fn test_abbreviation_tag() {
        let services = MockServices::start().await;
        services.dictionary_found("nasa", "abbreviation").await;

        services
            .resolver()
            .check_word_definition("NASA")
            .await
            .assert_rejected(ErrorKind::Invalid);
    }

    #[tokio::test]
    async fn test_short_for_definition() {
        let services = MockServices::start().await;
        services
            .dictionary_body(
                "lab",
                200,
                fixtures::dictionary_definition("lab", "noun", "Short for laboratory."),
            )
            .await;

        services
            .resolver()
            .check_word_definition("lab")
            .await
            .assert_rejected(ErrorKind::Invalid);
    }

    #[tokio::test]
    async fn test_gloss_abbreviation() {
        let services = MockServices::start().await;
        services.dictionary_found("ufo", "noun").await;
        services.gloss("ufo", "abbr. 不明飞行物").await;

        services
            .resolver()
            .check_word_definition("UFO")
            .await
            .assert_rejected(ErrorKind::Invalid);
    }

    #[tokio::test]
    async fn test_gloss_personal_name() {
        let services = MockServices::start().await;
        services.dictionary_found("stan", "noun").await;
        services.gloss("stan", "n. (Stan) 人名；(英) 斯坦").await;

        services
            .resolver()
            .check_word_definition("stan")
            .await
            .assert_rejected(ErrorKind::ProperNoun);
    }

    #[tokio::test]
    async fn test_gloss_name_with_general_sense() {
        let services = MockServices::start().await;
        services.dictionary_found("mark", "noun").await;
        services.gloss("mark", "n. 标记；人名 vt. 标明").await;

        services
            .resolver()
            .check_word_definition("mark")
            .await
            .assert_valid();
    }

    #[tokio::test]
    async fn test_gloss_original_casing_fallback() {
        let services = MockServices::start().await;
        services.dictionary_found("nylon", "noun").await;
        services.gloss_empty("nylon").await;
        services.gloss("Nylon", "n. 尼龙").await;

        let result = services.resolver().check_word_definition("Nylon").await;
        result.assert_valid();
        assert_eq!(result.gloss(), "n. 尼龙");
    }

    /// A failing gloss service leaves the word valid with an empty gloss
    #[tokio::test]
    async fn test_gloss_outage_keeps_word() {
        let services = MockServices::start().await;
        services.dictionary_found("splat", "noun").await;
        Mock::given(method("GET"))
            .and(path("/suggest"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&services.server)
            .await;

        let result = services.resolver().check_word_definition("splat").await;
        result.assert_valid();
        assert_eq!(result.gloss(), "");
    }

    // ==================== Dictionary misses ====================

    #[tokio::test]
    async fn test_not_found_proper_noun() {
        let services = MockServices::start().await;
        services.dictionary_not_found("london").await;
        services.lexeme_exact("london", &["n", "prop"]).await;

        services
            .resolver()
            .check_word_definition("London")
            .await
            .assert_rejected(ErrorKind::ProperNoun);
    }

    #[tokio::test]
    async fn test_not_found_invalid() {
        let services = MockServices::start().await;
        services.dictionary_not_found("plantes").await;
        services.lexeme_exact("plantes", &["n"]).await;

        services
            .resolver()
            .check_word_definition("plantes")
            .await
            .assert_rejected(ErrorKind::Invalid);
    }

    #[tokio::test]
    async fn test_server_error_fails_closed() {
        let services = MockServices::start().await;
        services
            .dictionary_body("spate", 500, serde_json::json!({ "error": "boom" }))
            .await;

        services
            .resolver()
            .check_word_definition("spate")
            .await
            .assert_rejected(ErrorKind::Invalid);
    }

    // ==================== Transport failures ====================

    #[tokio::test]
    async fn test_unreachable_service_is_network_error() {
        let config = LookupConfig {
            timeout_secs: 1,
            ..LookupConfig::with_base_url("http://127.0.0.1:9")
        };

        LexicalResolver::from_config(&config)
            .check_word_definition("plaster")
            .await
            .assert_rejected(ErrorKind::NetworkError);
    }

    #[tokio::test]
    async fn test_malformed_dictionary_body_is_network_error() {
        let services = MockServices::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/entries/en/plaster"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&services.server)
            .await;

        services
            .resolver()
            .check_word_definition("plaster")
            .await
            .assert_rejected(ErrorKind::NetworkError);
    }

    #[tokio::test]
    async fn test_timeout_is_network_error() {
        let services = MockServices::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/entries/en/stapler"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&services.server)
            .await;
        let config = LookupConfig {
            timeout_secs: 1,
            ..services.config()
        };

        LexicalResolver::from_config(&config)
            .check_word_definition("stapler")
            .await
            .assert_rejected(ErrorKind::NetworkError);
    }
}
