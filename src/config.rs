use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use tracing::{info, warn};

use crate::constants::{self, yahoo};
use crate::error::ConfigError;

pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";
pub const CONFIG_PATH_ENV: &str = "STOCK_INSIGHTS_CONFIG";

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            model: constants::llm::DEFAULT_MODEL.to_string(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct MarketDataConfig {
    pub base_url: String,
    pub cookie_url: String,
    pub user_agent: String,
    pub news_count: usize,
}

impl Default for MarketDataConfig {
    fn default() -> Self {
        Self {
            base_url: yahoo::DEFAULT_BASE_URL.to_string(),
            cookie_url: yahoo::DEFAULT_COOKIE_URL.to_string(),
            user_agent: yahoo::DEFAULT_USER_AGENT.to_string(),
            news_count: yahoo::DEFAULT_NEWS_COUNT,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub default_ticker: String,
    pub server: ServerConfig,
    pub llm: LlmConfig,
    pub market_data: MarketDataConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_ticker: constants::DEFAULT_TICKER.to_string(),
            server: ServerConfig::default(),
            llm: LlmConfig::default(),
            market_data: MarketDataConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load `config.yaml` (or `$STOCK_INSIGHTS_CONFIG`), then apply env overrides.
    /// A missing file is not an error: every field has a default.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let mut config = match fs::read_to_string(&config_path) {
            Ok(content) => Self::from_yaml_str(&content).map_err(|source| ConfigError::Parse {
                path: config_path.clone(),
                source,
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("⚠️ {} not found, using built-in defaults", config_path);
                Self::default()
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: config_path,
                    source,
                })
            }
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        info!("Loaded configuration from {}", config_path);
        Ok(config)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        // Strip BOM if present
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        // An empty file deserializes to unit, not an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Credentials come from the environment when present.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("OPENAI_API_KEY").filter(|v| !v.is_empty()) {
            self.llm.api_key = Some(key);
        }
        if let Some(url) = lookup("OPENAI_BASE_URL").filter(|v| !v.is_empty()) {
            self.llm.base_url = Some(url);
        }
    }
}
