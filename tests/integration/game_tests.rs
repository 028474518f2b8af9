//! Game session integration tests

#[cfg(test)]
mod tests {
    use crate::common::MockServices;
    use crate::{assert_err, assert_ok};
    use word_duel::config::GameConfig;
    use word_duel::{ErrorKind, GameSession, GuessRejection, can_construct};

    /// The PLANETS walk-through: derived words score, the source word does not
    #[tokio::test]
    async fn test_planets_scenario() {
        let services = MockServices::start().await;
        services.dictionary_found("petals", "noun").await;
        services.gloss("petals", "n. 花瓣").await;
        services.dictionary_not_found("nepal").await;
        services.lexeme_exact("nepal", &["n", "prop"]).await;

        let resolver = services.resolver();
        let mut game = assert_ok!(
            GameSession::start("Planets", 2, &resolver, &GameConfig::default()).await
        );

        for word in ["PLANE", "PLANES", "PLANET", "PLANETS"] {
            assert!(can_construct(word, game.source_word()));
        }

        let plane = assert_ok!(game.submit_guess("plane", &resolver).await);
        assert_eq!((plane.player, plane.points), (0, 5));
        let planes = assert_ok!(game.submit_guess("planes", &resolver).await);
        assert_eq!((planes.player, planes.points), (1, 6));
        let planet = assert_ok!(game.submit_guess("planet", &resolver).await);
        assert_eq!((planet.player, planet.points), (0, 6));

        let own = assert_err!(game.submit_guess("PLANETS", &resolver).await);
        assert_eq!(own, GuessRejection::OwnWord("PLANETS".to_string()));

        let petals = assert_ok!(game.submit_guess("petals", &resolver).await);
        assert_eq!(petals.gloss, "n. 花瓣");

        let nepal = assert_err!(game.submit_guess("Nepal", &resolver).await);
        assert_eq!(nepal.error_kind(), Some(ErrorKind::ProperNoun));

        assert_eq!(game.scores(), &[11, 12]);
        assert_eq!(game.history().len(), 4);
        assert_eq!(game.current_player(), 0);
    }

    #[tokio::test]
    async fn test_unknown_source_rejected() {
        let services = MockServices::start().await;
        services.dictionary_not_found("zqxjkv").await;

        let result =
            GameSession::start("zqxjkv", 2, &services.resolver(), &GameConfig::default()).await;
        let err = assert_err!(result);
        assert!(err.to_string().contains("ZQXJKV"));
    }

    #[tokio::test]
    async fn test_hint_then_surrender() {
        let services = MockServices::start().await;
        services.expect_no_requests().await;
        let resolver = services.resolver();
        let engine = services.hint_engine(3);

        let mut game = assert_ok!(
            GameSession::start("PLANETS", 2, &resolver, &GameConfig::default()).await
        );
        let hint = assert_ok!(game.request_hint(&engine).await).expect("table hint");
        let accepted = assert_ok!(game.submit_guess(&hint, &resolver).await);
        assert_eq!(accepted.word, hint);

        assert_eq!(assert_ok!(game.surrender()), Some(0));
        assert_eq!(game.winner(), Some(0));
        assert_eq!(
            game.submit_guess("PLANE", &resolver).await,
            Err(GuessRejection::GameOver)
        );
    }
}
