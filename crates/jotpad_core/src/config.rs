//! Application configuration.
//!
//! # Responsibility
//! - Resolve the API base URL baked in at build time.
//!
//! # Invariants
//! - Resolution never fails at startup; invalid values fall back to the
//!   default and emit a warning.
//! - The value is read-only after first access. Nothing in core performs
//!   network calls with it.

use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Build-time environment variable holding the API base URL.
pub const API_BASE_URL_ENV: &str = "JOTPAD_API_BASE_URL";
/// Placeholder used when no base URL is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

static BASE_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://[^\s/?#]+(?:[/?#]\S*)?$").expect("valid base url regex")
});

static APP_CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_build_env);

/// Configuration parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidBaseUrl(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBaseUrl(value) => {
                write!(f, "invalid api base url `{value}`; expected http(s)://host")
            }
        }
    }
}

impl Error for ConfigError {}

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    api_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Parses a raw base URL value.
    ///
    /// Blank input resolves to [`DEFAULT_API_BASE_URL`]. Trailing slashes are
    /// stripped so callers can join paths with `/`.
    ///
    /// # Errors
    /// - `ConfigError::InvalidBaseUrl` when the value is not `http(s)://host...`.
    pub fn parse(raw: Option<&str>) -> Result<Self, ConfigError> {
        let Some(value) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
            return Ok(Self::default());
        };

        if !BASE_URL_RE.is_match(value) {
            return Err(ConfigError::InvalidBaseUrl(value.to_string()));
        }

        // The regex requires a host, so trimming cannot eat into the scheme.
        Ok(Self {
            api_base_url: value.trim_end_matches('/').to_string(),
        })
    }

    /// Resolves configuration from the build-time environment.
    pub fn from_build_env() -> Self {
        match Self::parse(option_env!("JOTPAD_API_BASE_URL")) {
            Ok(config) => config,
            Err(err) => {
                warn!(
                    "event=config_load module=config status=fallback env={} error={}",
                    API_BASE_URL_ENV, err
                );
                Self::default()
            }
        }
    }

    pub fn api_base_url(&self) -> &str {
        self.api_base_url.as_str()
    }
}

/// Process-wide configuration, resolved on first access.
pub fn app_config() -> &'static AppConfig {
    &APP_CONFIG
}
