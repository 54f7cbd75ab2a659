//! Runtime configuration.
//!
//! Values come from the process environment first (a `.env` file is loaded into it on
//! native builds), then from `assets/config.env`, which is compiled into the binary so
//! browser builds get the same settings without an environment.

use anyhow::Context;
use std::collections::HashMap;
use std::time::Duration;
use tracing::Level;

/// Bundled defaults, shipped with every build
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

pub const LOCATION_ENDPOINT_KEY: &str = "LUMEN_LOCATION_ENDPOINT";
pub const USER_NAME_KEY: &str = "LUMEN_USER_NAME";
pub const TOKEN_DELAY_KEY: &str = "LUMEN_TOKEN_DELAY_MS";
pub const LOG_LEVEL_KEY: &str = "LUMEN_LOG_LEVEL";

pub const DEFAULT_LOCATION_ENDPOINT: &str = "https://ipapi.co/json/";
pub const DEFAULT_TOKEN_DELAY: Duration = crate::streaming::TOKEN_DELAY;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a whole number of milliseconds, got {value:?}")]
    InvalidDelay { key: &'static str, value: String },
    #[error("{key} must be one of trace, debug, info, warn, error; got {value:?}")]
    InvalidLevel { key: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub location_endpoint: String,
    pub user_name: Option<String>,
    pub token_delay: Duration,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            location_endpoint: DEFAULT_LOCATION_ENDPOINT.to_string(),
            user_name: None,
            token_delay: DEFAULT_TOKEN_DELAY,
            log_level: Level::INFO,
        }
    }
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        Self::from_sources(|key| std::env::var(key).ok(), BUNDLED_CONFIG)
            .context("failed to load configuration")
    }

    /// Like [`AppConfig::load`], but never fails: a bad value is logged and the
    /// defaults are used instead.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("{err:#}; falling back to default configuration");
                Self::default()
            }
        }
    }

    pub fn from_sources(
        env: impl Fn(&str) -> Option<String>,
        bundled: &str,
    ) -> anyhow::Result<Self> {
        let bundled = parse_bundled(bundled);
        let lookup = |key: &str| {
            env(key)
                .or_else(|| bundled.get(key).cloned())
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();
        if let Some(endpoint) = lookup(LOCATION_ENDPOINT_KEY) {
            config.location_endpoint = endpoint;
        }
        config.user_name = lookup(USER_NAME_KEY);
        if let Some(raw) = lookup(TOKEN_DELAY_KEY) {
            let millis = raw.parse::<u64>().map_err(|_| ConfigError::InvalidDelay {
                key: TOKEN_DELAY_KEY,
                value: raw.clone(),
            })?;
            config.token_delay = Duration::from_millis(millis);
        }
        if let Some(raw) = lookup(LOG_LEVEL_KEY) {
            config.log_level = raw.parse::<Level>().map_err(|_| ConfigError::InvalidLevel {
                key: LOG_LEVEL_KEY,
                value: raw.clone(),
            })?;
        }
        Ok(config)
    }
}

fn parse_bundled(text: &str) -> HashMap<String, String> {
    text.lines()
        .map(str::trim)
        // Skip comments and empty lines
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn silent_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults_when_everything_is_empty() {
        let config = AppConfig::from_sources(silent_env, "").expect("config");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_bundled_values_apply() {
        let bundled = "# comment\nLUMEN_USER_NAME = Ada\n\nLUMEN_TOKEN_DELAY_MS=5\n";
        let config = AppConfig::from_sources(silent_env, bundled).expect("config");
        assert_eq!(config.user_name.as_deref(), Some("Ada"));
        assert_eq!(config.token_delay, Duration::from_millis(5));
        assert_eq!(config.location_endpoint, DEFAULT_LOCATION_ENDPOINT);
    }

    #[test]
    fn test_environment_overrides_bundled() {
        let env = |key: &str| (key == LOG_LEVEL_KEY).then(|| "debug".to_string());
        let config = AppConfig::from_sources(env, "LUMEN_LOG_LEVEL=warn").expect("config");
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn test_blank_user_name_is_unset() {
        let config = AppConfig::from_sources(silent_env, "LUMEN_USER_NAME=   ").expect("config");
        assert_eq!(config.user_name, None);
    }

    #[test]
    fn test_malformed_delay_is_an_error() {
        let err = AppConfig::from_sources(silent_env, "LUMEN_TOKEN_DELAY_MS=fast").unwrap_err();
        assert!(err.to_string().contains(TOKEN_DELAY_KEY));
    }

    #[test]
    fn test_malformed_level_is_an_error() {
        let err = AppConfig::from_sources(silent_env, "LUMEN_LOG_LEVEL=loud").unwrap_err();
        let config_err = err.downcast_ref::<ConfigError>().expect("config error");
        assert!(matches!(config_err, ConfigError::InvalidLevel { .. }));
    }

    #[test]
    fn test_shipped_config_parses() {
        assert!(AppConfig::from_sources(silent_env, BUNDLED_CONFIG).is_ok());
    }
}
