//! Configuration handling for the application.
//!
//! Everything is read from environment variables with development defaults,
//! except the provider API key, which has no safe default and must be set.
//! The keyword list lives in a separate YAML document; see [`keywords`].

pub mod keywords;

use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use url::Url;

use crate::notifications::{HubSettings, hub::DEFAULT_HUB_URL};
use crate::provider::{ProviderSettings, client::DEFAULT_BASE_URL};

pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_API_KEY: &str = "YOUTUBE_API_KEY";
pub const ENV_API_BASE_URL: &str = "YOUTUBE_API_BASE_URL";
pub const ENV_KEYWORDS_PATH: &str = "KEYWORDS_PATH";
pub const ENV_CONNECT_TIMEOUT_SECS: &str = "PROVIDER_CONNECT_TIMEOUT_SECS";
pub const ENV_TIMEOUT_SECS: &str = "PROVIDER_TIMEOUT_SECS";
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";
pub const ENV_CALLBACK_URL: &str = "CALLBACK_URL";
pub const ENV_HUB_URL: &str = "HUB_URL";
pub const ENV_VERIFY_TOKEN: &str = "WEBHOOK_VERIFY_TOKEN";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_KEYWORDS_PATH: &str = "config/sponsorship.yaml";
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CALLBACK_URL: &str = "http://localhost:8080/channels";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Application runtime configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    bind_addr: String,
    api_key: String,
    api_base_url: Url,
    keywords_path: PathBuf,
    connect_timeout: Duration,
    timeout: Duration,
    log_format: LogFormat,
    callback_url: Url,
    hub_url: Url,
    verify_token: Option<String>,
}

impl Config {
    /// Build a config explicitly, using defaults for timeouts, log format and
    /// the notification hub.
    pub fn new(
        bind_addr: impl Into<String>,
        api_key: impl Into<String>,
        api_base_url: Url,
        keywords_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            bind_addr: bind_addr.into(),
            api_key: api_key.into(),
            api_base_url,
            keywords_path: keywords_path.into(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_format: LogFormat::Text,
            callback_url: Url::parse(DEFAULT_CALLBACK_URL).expect("default callback url is valid"),
            hub_url: Url::parse(DEFAULT_HUB_URL).expect("default hub url is valid"),
            verify_token: None,
        }
    }

    /// Load from environment variables, falling back to development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env::var(ENV_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let api_key = env::var(ENV_API_KEY)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::Missing { field: ENV_API_KEY })?;

        let api_base_url = url_from_env(ENV_API_BASE_URL, DEFAULT_BASE_URL)?;

        let keywords_path = env::var(ENV_KEYWORDS_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_KEYWORDS_PATH));

        let connect_timeout =
            duration_from_env(ENV_CONNECT_TIMEOUT_SECS, DEFAULT_CONNECT_TIMEOUT_SECS)?;
        let timeout = duration_from_env(ENV_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS)?;

        let log_format = match env::var(ENV_LOG_FORMAT).ok().as_deref() {
            None | Some("") | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    field: ENV_LOG_FORMAT,
                    reason: format!("expected 'text' or 'json', got '{other}'"),
                });
            }
        };

        let callback_url = url_from_env(ENV_CALLBACK_URL, DEFAULT_CALLBACK_URL)?;
        let hub_url = url_from_env(ENV_HUB_URL, DEFAULT_HUB_URL)?;
        let verify_token = env::var(ENV_VERIFY_TOKEN)
            .ok()
            .filter(|token| !token.trim().is_empty());

        Ok(Self {
            bind_addr,
            api_key,
            api_base_url,
            keywords_path,
            connect_timeout,
            timeout,
            log_format,
            callback_url,
            hub_url,
            verify_token,
        })
    }

    /// TCP bind address (host:port) for the HTTP server.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }

    pub fn api_base_url(&self) -> &Url {
        &self.api_base_url
    }

    /// Location of the sponsorship keyword document.
    pub fn keywords_path(&self) -> &Path {
        &self.keywords_path
    }

    pub fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// Shared secret the hub must present when verifying a subscription.
    pub fn verify_token(&self) -> Option<&str> {
        self.verify_token.as_deref()
    }

    pub fn hub_settings(&self) -> HubSettings {
        HubSettings {
            hub_url: self.hub_url.clone(),
            callback_url: self.callback_url.clone(),
            verify_token: self.verify_token.clone(),
            timeout: self.timeout,
        }
    }

    pub fn provider_settings(&self) -> ProviderSettings {
        ProviderSettings {
            base_url: self.api_base_url.clone(),
            api_key: self.api_key.clone(),
            connect_timeout: self.connect_timeout,
            timeout: self.timeout,
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("bind_addr", &self.bind_addr)
            .field("api_key", &"<redacted>")
            .field("api_base_url", &self.api_base_url.as_str())
            .field("keywords_path", &self.keywords_path)
            .field("connect_timeout", &self.connect_timeout)
            .field("timeout", &self.timeout)
            .field("log_format", &self.log_format)
            .field("callback_url", &self.callback_url.as_str())
            .field("hub_url", &self.hub_url.as_str())
            .field("verify_token", &self.verify_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

fn url_from_env(field: &'static str, default: &str) -> Result<Url, ConfigError> {
    let raw = env::var(field).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidValue {
        field,
        reason: e.to_string(),
    })
}

fn duration_from_env(field: &'static str, default_secs: u64) -> Result<Duration, ConfigError> {
    let Ok(raw) = env::var(field) else {
        return Ok(Duration::from_secs(default_secs));
    };

    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidValue {
            field,
            reason: format!("expected a positive number of seconds, got '{raw}'"),
        }),
    }
}

/// Errors that can occur while building a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required setting '{field}'")]
    Missing { field: &'static str },

    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
