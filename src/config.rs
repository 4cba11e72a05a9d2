//! Configuration loading and management.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Bot configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Bot identity and dispatch settings.
    pub bot: BotConfig,
}

/// Bot identity and dispatch settings.
#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Bot name, used for logging.
    pub name: String,
    /// Command prefix stripped from message text before matching
    /// (e.g. "!"). When absent, the first token of the message is matched
    /// against registered keywords directly.
    #[serde(default)]
    pub prefix: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}
