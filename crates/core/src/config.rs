//! Process configuration.
//!
//! One knob matters: where the backend lives. Everything else (data
//! directory for the persisted session) has a sane per-user default.

use std::path::PathBuf;

/// Default backend origin for local development.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Environment variable overriding the backend origin.
pub const API_URL_ENV: &str = "GYMDESK_API_URL";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "GYMDESK_DATA_DIR";

/// Resolved client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Backend origin, without a trailing slash.
    pub api_url: String,
    /// Directory holding persisted client state (the session file).
    pub data_dir: PathBuf,
}

impl Config {
    /// Resolve configuration from the environment.
    ///
    /// Falls back to [`DEFAULT_API_URL`] and `~/.gymdesk` when unset. A
    /// missing home directory degrades to a relative `.gymdesk` directory.
    pub fn from_env() -> Self {
        let api_url = std::env::var(API_URL_ENV)
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| {
                tracing::debug!("{API_URL_ENV} not set; using {DEFAULT_API_URL}");
                DEFAULT_API_URL.to_string()
            });

        let data_dir = std::env::var(DATA_DIR_ENV)
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .map(|home| home.join(".gymdesk"))
                    .unwrap_or_else(|| PathBuf::from(".gymdesk"))
            });

        Self {
            api_url: normalize_origin(api_url),
            data_dir,
        }
    }

    /// Apply an explicit origin override (e.g. a CLI flag), which wins over
    /// the environment.
    pub fn with_api_url(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url.filter(|v| !v.is_empty()) {
            self.api_url = normalize_origin(url);
        }
        self
    }
}

fn normalize_origin(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_and_is_normalized() {
        let config = Config {
            api_url: DEFAULT_API_URL.to_string(),
            data_dir: PathBuf::from(".gymdesk"),
        };
        let config = config.with_api_url(Some("http://gym.example:9090/".to_string()));
        assert_eq!(config.api_url, "http://gym.example:9090");
    }

    #[test]
    fn empty_override_is_ignored() {
        let config = Config {
            api_url: DEFAULT_API_URL.to_string(),
            data_dir: PathBuf::from(".gymdesk"),
        };
        let config = config.with_api_url(Some(String::new()));
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }
}
