use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::Path;

use crate::language_utils;

/// Application configuration module
/// This module handles the engine configuration including loading,
/// validating and saving configuration settings.
/// Represents the engine configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Source language code (ISO), used as the translation hint
    pub source_language: String,

    /// Target languages offered in the per-block language picker
    #[serde(default = "default_target_languages")]
    pub target_languages: Vec<String>,

    /// Translation config
    pub translation: TranslationConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Translation service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationConfig {
    /// Service URL of the translation endpoint
    #[serde(default = "String::new")]
    pub endpoint: String,

    /// API key for the translation endpoint
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Timeout seconds for translation requests
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Whether translated texts are cached per block
    #[serde(default = "default_cache_enabled")]
    pub cache_enabled: bool,
}

/// Log level for the engine
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Error level
    Error,
    /// Warning level
    Warn,
    /// Info level
    #[default]
    Info,
    /// Debug level
    Debug,
}

impl LogLevel {
    /// The `log` crate filter for this level, applied by the embedding app
    /// when it sets up its logger
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
        }
    }
}

fn default_target_languages() -> Vec<String> {
    vec!["fr".to_string(), "de".to_string(), "es".to_string()]
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_cache_enabled() -> bool {
    true
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
            cache_enabled: default_cache_enabled(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_language: "en".to_string(),
            target_languages: default_target_languages(),
            translation: TranslationConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        language_utils::validate_language_code(&self.source_language)
            .map_err(|e| anyhow!("Invalid source language: {}", e))?;

        if self.target_languages.is_empty() {
            return Err(anyhow!("At least one target language must be configured"));
        }
        for code in &self.target_languages {
            language_utils::validate_language_code(code)
                .map_err(|e| anyhow!("Invalid target language: {}", e))?;
        }

        if self.translation.timeout_secs == 0 {
            return Err(anyhow!("Translation timeout must be greater than zero"));
        }

        Ok(())
    }
}
