//! HTTP transport integration tests

#[cfg(test)]
mod tests {
    use crate::common::MockServices;
    use std::sync::Arc;
    use std::time::Duration;
    use word_duel::core::providers::{
        DatamuseClient, DictionaryLookup, DictionaryOutcome, FreeDictionaryClient, GlossLookup,
        LexemeLookup, LexemeQuery, YoudaoClient,
    };
    use word_duel::utils::net::http::DEFAULT_USER_AGENT;
    use word_duel::utils::net::{HttpTransport, ReqwestTransport};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, ResponseTemplate};

    fn transport() -> Arc<dyn HttpTransport> {
        Arc::new(ReqwestTransport::with_timeout(Duration::from_secs(2)))
    }

    #[tokio::test]
    async fn test_status_and_body_returned() {
        let services = MockServices::start().await;
        Mock::given(method("GET"))
            .and(path("/ping"))
            .and(header("user-agent", DEFAULT_USER_AGENT))
            .respond_with(ResponseTemplate::new(202).set_body_string("pong"))
            .expect(1)
            .mount(&services.server)
            .await;

        let url = format!("{}/ping", services.server.uri());
        let response = transport().get("test", &url).await.unwrap();
        assert_eq!(response.status, 202);
        assert_eq!(response.body, "pong");
        assert!(response.is_ok());
    }

    #[tokio::test]
    async fn test_not_found_is_a_response() {
        let services = MockServices::start().await;
        let url = format!("{}/missing", services.server.uri());

        let response = transport().get("test", &url).await.unwrap();
        assert!(response.is_not_found());
    }

    #[tokio::test]
    async fn test_refused_connection_is_network() {
        let err = transport()
            .get("test", "http://127.0.0.1:9/")
            .await
            .unwrap_err();
        assert!(err.is_network());
        assert_eq!(err.service(), "test");
    }

    #[tokio::test]
    async fn test_dictionary_client_outcomes() {
        let services = MockServices::start().await;
        services.dictionary_found("plane", "noun").await;
        let config = services.config();
        let client = FreeDictionaryClient::new(transport(), config.dictionary_api_base);

        match client.lookup("PLANE").await.unwrap() {
            DictionaryOutcome::Found(entries) => {
                assert_eq!(entries[0].word, "plane");
                assert_eq!(entries[0].parts_of_speech().collect::<Vec<_>>(), ["noun"]);
            }
            other => panic!("expected an entry, got {:?}", other),
        }
        assert_eq!(
            client.lookup("zzxq").await.unwrap(),
            DictionaryOutcome::NotFound
        );
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let services = MockServices::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/entries/en/plane"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&services.server)
            .await;
        let client = FreeDictionaryClient::new(transport(), services.config().dictionary_api_base);

        let err = client.lookup("plane").await.unwrap_err();
        assert!(!err.is_network());
    }

    #[tokio::test]
    async fn test_gloss_and_lexeme_clients() {
        let services = MockServices::start().await;
        services.gloss("planet", "n. 行星").await;
        services.lexeme_prefix('p', &[("planet", 52.1), ("plane", 40.0)]).await;
        let config = services.config();

        let gloss = YoudaoClient::new(transport(), config.gloss_api_base.clone());
        assert_eq!(
            gloss.explain("planet").await.unwrap().as_deref(),
            Some("n. 行星")
        );
        assert_eq!(gloss.explain("nothing").await.unwrap(), None);

        let lexemes = DatamuseClient::new(transport(), config.lexeme_api_base.clone());
        let words = lexemes
            .words(&LexemeQuery::starting_with('P', 100))
            .await
            .unwrap();
        assert_eq!(words.len(), 2);
        assert!((words[0].frequency() - 52.1).abs() < 1e-9);
    }
}
