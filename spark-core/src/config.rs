//! Client configuration management.
//!
//! Holds the access token, user agent and API location used by every
//! request, plus logging preferences. Configuration is persisted as TOML.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{SparkError, SparkResult};
use crate::platform;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// REST API connection settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// REST API connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Bearer token sent with every request.
    #[serde(default)]
    pub access_token: String,

    /// `User-Agent` header value.
    #[serde(default = "constants::default_user_agent")]
    pub user_agent: String,

    /// API root, e.g. "https://api.ciscospark.com/v1".
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in milliseconds.
    #[serde(default = "default_api_timeout")]
    pub timeout_ms: u64,

    /// Extra headers added to every request.
    #[serde(default)]
    pub custom_headers: HashMap<String, String>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for log files. If empty, uses the platform data directory.
    #[serde(default)]
    pub directory: String,

    /// Write the log file as JSON lines.
    #[serde(default)]
    pub json_output: bool,
}

fn default_base_url() -> String {
    constants::DEFAULT_API_BASE_URL.to_string()
}

fn default_api_timeout() -> u64 {
    constants::DEFAULT_API_TIMEOUT_MS
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            user_agent: constants::default_user_agent(),
            base_url: default_base_url(),
            timeout_ms: default_api_timeout(),
            custom_headers: HashMap::new(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: String::new(),
            json_output: false,
        }
    }
}

impl ApiConfig {
    /// Build a config with the given token and defaults for everything else.
    pub fn with_token(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            ..Self::default()
        }
    }

    /// Fill an empty access token from `CISCOSPARK_ACCESS_TOKEN`.
    pub fn apply_env_overrides(&mut self) {
        self.apply_token_from(std::env::var(constants::ACCESS_TOKEN_ENV).ok());
    }

    fn apply_token_from(&mut self, token: Option<String>) {
        if !self.access_token.trim().is_empty() {
            return;
        }
        if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
            self.access_token = token.trim().to_string();
        }
    }

    /// Whether an access token is available.
    pub fn has_access_token(&self) -> bool {
        !self.access_token.trim().is_empty()
    }
}

impl AppConfig {
    /// Load configuration from the default path, falling back to defaults.
    pub fn load_default() -> SparkResult<Self> {
        let path = Self::default_config_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from_file(path: &Path) -> SparkResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a specific file path.
    pub fn save_to_file(&self, path: &Path) -> SparkResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| SparkError::Config(format!("failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Default configuration file path.
    pub fn default_config_path() -> SparkResult<PathBuf> {
        Ok(platform::config_dir()?.join("config.toml"))
    }

    /// Effective log directory, using the configured path or the default.
    pub fn effective_log_dir(&self) -> SparkResult<PathBuf> {
        if self.logging.directory.is_empty() {
            Ok(platform::data_dir()?.join("logs"))
        } else {
            Ok(PathBuf::from(&self.logging.directory))
        }
    }

    /// Normalize an API base URL.
    ///
    /// Strips surrounding quotes/whitespace and trailing slashes, and
    /// defaults to https when no scheme is given.
    pub fn sanitize_base_url(address: &str) -> String {
        let trimmed = address.trim().trim_matches('"').trim();
        if trimmed.is_empty() {
            return String::new();
        }

        let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed.to_string()
        } else {
            format!("https://{trimmed}")
        };

        with_scheme.trim_end_matches('/').to_string()
    }
}
