// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Configuration loaded from environment variables (and `.env` when present).

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::services::client::DEFAULT_BASE_URL;

/// Runtime configuration for the command-line tool.
#[derive(Debug, Clone)]
pub struct Config {
    /// Dailymile username whose feed is fetched
    pub user: Option<String>,
    /// API root URL
    pub api_url: String,
    /// Local JSON file holding the entry collection
    pub entries_file: PathBuf,
    /// Per-request HTTP timeout
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user: None,
            api_url: DEFAULT_BASE_URL.to_string(),
            entries_file: PathBuf::from("entries.json"),
            timeout: Duration::from_secs(30),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let timeout_secs = match env::var("DAILYMILE_TIMEOUT_SECS") {
            Ok(v) => v
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("DAILYMILE_TIMEOUT_SECS", v))?,
            Err(_) => 30,
        };

        Ok(Self {
            user: env::var("DAILYMILE_USER")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            api_url: env::var("DAILYMILE_API_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            entries_file: env::var("DAILYMILE_ENTRIES_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("entries.json")),
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// The configured user, required for fetching.
    pub fn require_user(&self) -> Result<&str, ConfigError> {
        self.user.as_deref().ok_or(ConfigError::Missing("DAILYMILE_USER"))
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::set_var("DAILYMILE_USER", " jdoe ");
        env::set_var("DAILYMILE_ENTRIES_FILE", "/tmp/jdoe.json");
        env::set_var("DAILYMILE_TIMEOUT_SECS", "5");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.require_user().unwrap(), "jdoe");
        assert_eq!(config.entries_file, PathBuf::from("/tmp/jdoe.json"));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.api_url, DEFAULT_BASE_URL);

        env::set_var("DAILYMILE_TIMEOUT_SECS", "soon");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::Invalid("DAILYMILE_TIMEOUT_SECS", _))
        ));
        env::remove_var("DAILYMILE_TIMEOUT_SECS");
    }

    #[test]
    fn test_require_user_missing() {
        let config = Config::default();
        assert!(matches!(
            config.require_user(),
            Err(ConfigError::Missing("DAILYMILE_USER"))
        ));
    }
}
