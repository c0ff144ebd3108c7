//! Configuration types for ticker-scout

use crate::exchange::Credentials;
use crate::http::HttpConfig;
use crate::telemetry::LogFormat;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub http: HttpSettings,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    /// Optional API keys per exchange, keyed by exchange name
    #[serde(default)]
    pub exchanges: HashMap<String, Credentials>,
}

/// Shared HTTP requester settings
#[derive(Debug, Clone, Deserialize)]
pub struct HttpSettings {
    /// Per-request timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_timeout_secs() -> u64 {
    10
}
fn default_user_agent() -> String {
    HttpConfig::default().user_agent
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl HttpSettings {
    /// Convert to the requester's configuration
    pub fn to_http_config(&self) -> HttpConfig {
        HttpConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            user_agent: self.user_agent.clone(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Credentials configured for `exchange`, matched ignoring case
    pub fn credentials_for(&self, exchange: &str) -> Option<Credentials> {
        self.exchanges
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(exchange))
            .map(|(_, creds)| creds.clone())
    }
}
