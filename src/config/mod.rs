//! Configuration management for word-duel
//!
//! This module handles loading, validation, and management of all configuration.

pub mod loader;
pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{DuelError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub lookup: LookupConfig,
    #[serde(default)]
    pub hint: HintConfig,
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| DuelError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| DuelError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = loader::apply_env(Self::default())?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file when given, otherwise from the environment
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let config = Self::from_file(path).await?;
                let config = loader::apply_env(config)?;
                config.validate()?;
                Ok(config)
            }
            None => Self::from_env(),
        }
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.lookup
            .validate()
            .map_err(|e| DuelError::Config(format!("Lookup config error: {}", e)))?;
        self.hint
            .validate()
            .map_err(|e| DuelError::Config(format!("Hint config error: {}", e)))?;
        self.game
            .validate()
            .map_err(|e| DuelError::Config(format!("Game config error: {}", e)))?;
        self.logging
            .validate()
            .map_err(|e| DuelError::Config(format!("Logging config error: {}", e)))?;

        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| DuelError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
