//! Application settings management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{PrecisError, APP_NAME};

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Values shipped in sample `.env` files that are never real keys.
const PLACEHOLDER_API_KEYS: &[&str] = &["your_gemini_api_key", "your_gemini_api_key_here"];

/// Main application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// General settings
    #[serde(default)]
    pub general: GeneralSettings,

    /// LLM settings
    #[serde(default)]
    pub llm: LlmSettings,

    /// Web page fetching settings
    #[serde(default)]
    pub fetch: FetchSettings,

    /// YouTube transcript settings
    #[serde(default)]
    pub youtube: YouTubeSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    /// LLM provider (gemini)
    #[serde(default = "default_llm_provider")]
    pub provider: String,

    /// API key
    #[serde(default)]
    pub api_key: String,

    /// Model name
    #[serde(default = "default_llm_model")]
    pub model: String,

    /// API endpoint (empty = public Gemini endpoint)
    #[serde(default)]
    pub endpoint: String,

    /// Request timeout in seconds (0 = no timeout)
    #[serde(default = "default_llm_timeout")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchSettings {
    /// User-Agent sent when fetching articles
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds (0 = no timeout)
    #[serde(default = "default_fetch_timeout")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YouTubeSettings {
    /// yt-dlp executable used to download captions
    #[serde(default = "default_ytdlp_path")]
    pub ytdlp_path: PathBuf,

    /// Caption languages, in yt-dlp `--sub-langs` syntax
    #[serde(default = "default_languages")]
    pub languages: String,
}

// Default value functions

fn default_log_level() -> String {
    "info".to_string()
}

fn default_llm_provider() -> String {
    "gemini".to_string()
}

fn default_llm_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_llm_timeout() -> u64 {
    0
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/122.0.0.0 Safari/537.36"
        .to_string()
}

fn default_fetch_timeout() -> u64 {
    0
}

fn default_ytdlp_path() -> PathBuf {
    PathBuf::from("yt-dlp")
}

fn default_languages() -> String {
    "en.*,en".to_string()
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: default_llm_provider(),
            api_key: String::new(),
            model: default_llm_model(),
            endpoint: String::new(),
            timeout_secs: default_llm_timeout(),
        }
    }
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_fetch_timeout(),
        }
    }
}

impl Default for YouTubeSettings {
    fn default() -> Self {
        Self {
            ytdlp_path: default_ytdlp_path(),
            languages: default_languages(),
        }
    }
}

impl Settings {
    /// Load settings from the configuration file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::debug!("No config file found, using defaults");
            let mut settings = Self::default();
            settings.apply_env_overrides();
            return Ok(settings);
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let mut settings = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        settings.apply_env_overrides();

        Ok(settings)
    }

    /// Parse settings from TOML, filling in defaults for anything missing.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.override_api_key(std::env::var(API_KEY_ENV).ok());
    }

    /// A non-empty key from the environment wins over the config file.
    fn override_api_key(&mut self, env_key: Option<String>) {
        if let Some(key) = env_key.filter(|key| !key.trim().is_empty()) {
            self.llm.api_key = key;
        }
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", APP_NAME, APP_NAME)
            .context("Could not determine config directory")?;

        let config_dir = dirs.config_dir();
        Ok(config_dir.join("config.toml"))
    }

    /// Return the configured API key, rejecting empty and placeholder values.
    pub fn require_api_key(&self) -> crate::Result<&str> {
        let key = self.llm.api_key.trim();
        if key.is_empty() {
            return Err(PrecisError::MissingApiKey(format!(
                "{} is not set",
                API_KEY_ENV
            )));
        }
        if PLACEHOLDER_API_KEYS
            .iter()
            .any(|placeholder| key.eq_ignore_ascii_case(placeholder))
        {
            return Err(PrecisError::MissingApiKey(format!(
                "{} still holds the placeholder value '{}'",
                API_KEY_ENV, key
            )));
        }
        Ok(key)
    }
}
