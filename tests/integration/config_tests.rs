//! Configuration integration tests

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;
    use word_duel::Config;
    use word_duel::config::loader::apply_vars;

    /// The shipped example configuration loads and validates
    #[tokio::test]
    async fn test_example_config_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config/word_duel.yaml.example");
        let config = Config::from_file(&path).await.unwrap();

        assert_eq!(config.lookup.timeout_secs, 8);
        assert_eq!(config.hint.min_local_candidates, 3);
        assert_eq!(config.game.min_source_len, 6);
    }

    #[tokio::test]
    async fn test_file_then_env_overrides() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"hint:\n  seed: 1\ngame:\n  default_players: 3\n")
            .unwrap();

        let config = Config::from_file(file.path()).await.unwrap();
        let config = apply_vars(config, |key| match key {
            "WORD_DUEL_HINT_SEED" => Some("99".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.hint.seed, Some(99));
        assert_eq!(config.game.default_players, 3);
        assert!(config.validate().is_ok());
    }

    #[tokio::test]
    async fn test_unparsable_yaml_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"lookup: [not, a, map]\n").unwrap();

        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(err.to_string().contains("Configuration error"));
    }

    #[tokio::test]
    async fn test_load_with_path() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"logging:\n  level: \"debug\"\n  json: true\n")
            .unwrap();

        let config = Config::load(Some(file.path())).await.unwrap();
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
    }
}
