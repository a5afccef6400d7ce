//! Application configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Default base URL of the catalog API.
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Default content language requested from the catalog.
pub const DEFAULT_LANGUAGE: &str = "pt-BR";

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// API key for the catalog service
    pub api_key: Option<String>,

    /// Base URL of the catalog API
    pub base_url: String,

    /// Content language (ISO 639-1 with optional region, e.g. "pt-BR")
    pub language: String,

    /// Preferred country for watch-provider lookups (ISO 3166-1, e.g. "BR")
    pub region: Option<String>,

    /// HTTP request timeout in seconds
    pub timeout_seconds: u64,

    /// Data directory for locally persisted state (favorites)
    pub data_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            region: None,
            timeout_seconds: 30,
            data_dir: default_data_dir(),
        }
    }
}

impl Config {
    /// Initialize configuration from various sources
    pub async fn init() -> Result<Self> {
        debug!("Initializing configuration");

        let mut config = Self::default();

        // Environment variables first, then the config file on top
        config.load_from_env();
        if let Ok(file_config) = Self::load_from_file().await {
            config.merge_with(file_config);
        }

        Ok(config)
    }

    /// Load configuration overrides from environment variables
    pub fn load_from_env(&mut self) {
        if let Ok(key) = std::env::var("TMDB_API_KEY") {
            self.api_key = Some(key);
        }
        if let Ok(key) = std::env::var("CINETERM_API_KEY") {
            self.api_key = Some(key);
        }
        if let Ok(url) = std::env::var("CINETERM_BASE_URL") {
            self.base_url = url;
        }
        if let Ok(language) = std::env::var("CINETERM_LANGUAGE") {
            self.language = language;
        }
        if let Ok(region) = std::env::var("CINETERM_REGION") {
            self.region = Some(region);
        }
        if let Ok(dir) = std::env::var("CINETERM_DATA_DIR") {
            self.data_dir = PathBuf::from(dir);
        }
    }

    /// Load configuration from the config file, if one exists
    async fn load_from_file() -> Result<ConfigFile> {
        let path = config_file_path()
            .ok_or_else(|| anyhow::anyhow!("No config directory available"))?;
        let content = tokio::fs::read_to_string(&path).await?;
        let file_config: ConfigFile = serde_json::from_str(&content)?;
        debug!("Loaded configuration from {}", path.display());
        Ok(file_config)
    }

    /// Apply values from a config file over the defaults
    fn merge_with(&mut self, file: ConfigFile) {
        if let Some(api_key) = file.api_key {
            self.api_key = Some(api_key);
        }
        if let Some(base_url) = file.base_url {
            self.base_url = base_url;
        }
        if let Some(language) = file.language {
            self.language = language;
        }
        if let Some(region) = file.region {
            self.region = Some(region);
        }
        if let Some(timeout) = file.timeout_seconds {
            self.timeout_seconds = timeout;
        }
        if let Some(data_dir) = file.data_dir {
            self.data_dir = data_dir;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_key.as_deref().map_or(true, |k| k.trim().is_empty()) {
            return Err(anyhow::anyhow!(
                "No API key configured. Set TMDB_API_KEY or add \"api_key\" to the config file."
            ));
        }
        if self.base_url.trim().is_empty() {
            return Err(anyhow::anyhow!("Base URL must not be empty"));
        }
        if self.timeout_seconds == 0 {
            return Err(anyhow::anyhow!("Timeout must be at least 1 second"));
        }
        Ok(())
    }
}

/// On-disk configuration file, all fields optional
#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigFile {
    api_key: Option<String>,
    base_url: Option<String>,
    language: Option<String>,
    region: Option<String>,
    timeout_seconds: Option<u64>,
    data_dir: Option<PathBuf>,
}

/// Path of the JSON config file: `<config dir>/cineterm/config.json`
fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cineterm").join("config.json"))
}

/// Default data directory: `<data dir>/cineterm`, falling back to `./data`
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("cineterm"))
        .unwrap_or_else(|| PathBuf::from("./data"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.language, DEFAULT_LANGUAGE);
        assert!(config.api_key.is_none());
        assert!(config.region.is_none());
    }

    #[test]
    fn test_validate_requires_api_key() {
        let mut config = Config::default();
        assert!(config.validate().is_err());

        config.api_key = Some("   ".to_string());
        assert!(config.validate().is_err());

        config.api_key = Some("key".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_file_wins_over_environment() {
        let mut config = Config::default();

        // Same order as Config::init: env vars first, file merged on top.
        std::env::set_var("CINETERM_LANGUAGE", "en-US");
        config.load_from_env();
        std::env::remove_var("CINETERM_LANGUAGE");
        assert_eq!(config.language, "en-US");

        config.merge_with(ConfigFile {
            language: Some("fr-FR".to_string()),
            ..ConfigFile::default()
        });
        assert_eq!(config.language, "fr-FR");
    }

    #[test]
    fn test_merge_keeps_defaults_for_missing_fields() {
        let mut config = Config::default();
        config.merge_with(ConfigFile {
            language: Some("en-US".to_string()),
            ..ConfigFile::default()
        });
        assert_eq!(config.language, "en-US");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_seconds, 30);
    }
}
