//! Live dictionary, gloss and lexeme services

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use word_duel::{Config, ErrorKind, WordDuel, can_construct};

    fn duel() -> WordDuel {
        WordDuel::new(Config::default()).unwrap()
    }

    #[tokio::test]
    #[ignore]
    async fn test_live_dictionary_word() {
        let result = duel().check_word_definition("pastels").await;
        assert!(result.is_valid(), "{:?}", result.error_kind());
    }

    #[tokio::test]
    #[ignore]
    async fn test_live_proper_noun() {
        let result = duel().check_word_definition("London").await;
        assert_eq!(result.error_kind(), ErrorKind::ProperNoun);
    }

    #[tokio::test]
    #[ignore]
    async fn test_live_hint() {
        let hint = duel().find_valid_hint("RHYTHMS", &HashSet::new()).await;
        if let Some(hint) = hint {
            assert!(can_construct(&hint, "RHYTHMS"));
            assert_ne!(hint, "RHYTHMS");
        }
    }

    #[tokio::test]
    #[ignore]
    async fn test_live_presets() {
        let presets = duel().fetch_new_presets().await;
        assert!(presets.len() <= 10);
        for word in presets {
            assert!((8..=12).contains(&word.len()));
        }
    }
}
