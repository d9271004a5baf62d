//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `VELASONA_API_URL` - Backend API base URL (default: `http://localhost:4000/api`)
//! - `VELASONA_MEDIA_URL` - Public origin serving images and audio. Defaults
//!   to the API URL with a trailing `/api` stripped.
//! - `VELASONA_SESSION_FILE` - Where the bearer token and language
//!   preference persist (default: `$HOME/.velasona/session.json`; in-memory
//!   when no home directory exists)
//! - `VELASONA_TIMEOUT_SECS` - Per-request timeout (default: 30)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Default backend address for local development.
pub const DEFAULT_API_URL: &str = "http://localhost:4000/api";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid URL in {0}: {1}")]
    InvalidUrl(String, String),
    #[error("Unsupported URL scheme in {0}: {1} (only http/https)")]
    UnsupportedScheme(String, String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Velasona client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend API base URL, no trailing slash (e.g., `http://localhost:4000/api`).
    pub api_url: String,
    /// Public media origin, no trailing slash (e.g., `http://localhost:4000`).
    pub media_url: String,
    /// Session file path; `None` keeps the session in memory only.
    pub session_file: Option<PathBuf>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a configured URL is malformed or a numeric
    /// variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_url = normalize_url(
            "VELASONA_API_URL",
            &std::env::var("VELASONA_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_owned()),
        )?;

        let media_url = match std::env::var("VELASONA_MEDIA_URL") {
            Ok(value) => normalize_url("VELASONA_MEDIA_URL", &value)?,
            Err(_) => derive_media_url(&api_url),
        };

        let session_file = std::env::var("VELASONA_SESSION_FILE")
            .map(PathBuf::from)
            .ok()
            .or_else(default_session_file);

        let timeout_secs = match std::env::var("VELASONA_TIMEOUT_SECS") {
            Ok(value) => value.parse::<u64>().map_err(|e| {
                ConfigError::InvalidEnvVar("VELASONA_TIMEOUT_SECS".to_owned(), e.to_string())
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_url,
            media_url,
            session_file,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Build a configuration for a specific API URL with an in-memory
    /// session. Intended for tests and embedding.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the URL is malformed or not http/https.
    pub fn new(api_url: &str) -> Result<Self, ConfigError> {
        let api_url = normalize_url("api_url", api_url)?;
        let media_url = derive_media_url(&api_url);
        Ok(Self {
            api_url,
            media_url,
            session_file: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Override the media origin.
    #[must_use]
    pub fn with_media_url(mut self, media_url: impl Into<String>) -> Self {
        self.media_url = media_url.into().trim_end_matches('/').to_owned();
        self
    }

    /// Override the session file path.
    #[must_use]
    pub fn with_session_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_file = Some(path.into());
        self
    }
}

/// Validate a base URL and strip any trailing slash.
fn normalize_url(name: &str, value: &str) -> Result<String, ConfigError> {
    let parsed = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(name.to_owned(), e.to_string()))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ConfigError::UnsupportedScheme(
            name.to_owned(),
            parsed.scheme().to_owned(),
        ));
    }
    Ok(value.trim_end_matches('/').to_owned())
}

/// The media origin is the API origin without the `/api` path segment.
fn derive_media_url(api_url: &str) -> String {
    api_url
        .strip_suffix("/api")
        .unwrap_or(api_url)
        .trim_end_matches('/')
        .to_owned()
}

fn default_session_file() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".velasona/session.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_normalizes_and_derives_media_url() {
        let config = ClientConfig::new("http://localhost:4000/api/").expect("config");
        assert_eq!(config.api_url, "http://localhost:4000/api");
        assert_eq!(config.media_url, "http://localhost:4000");
    }

    #[test]
    fn media_url_keeps_api_less_origins() {
        let config = ClientConfig::new("https://backend.velasona.shop").expect("config");
        assert_eq!(config.media_url, "https://backend.velasona.shop");
    }

    #[test]
    fn rejects_malformed_urls() {
        assert!(matches!(
            ClientConfig::new("not a url"),
            Err(ConfigError::InvalidUrl(..))
        ));
        assert!(matches!(
            ClientConfig::new("ftp://backend.velasona.shop"),
            Err(ConfigError::UnsupportedScheme(..))
        ));
    }

    #[test]
    fn overrides_apply() {
        let config = ClientConfig::new("http://localhost:4000/api")
            .expect("config")
            .with_media_url("https://cdn.velasona.shop/");
        assert_eq!(config.media_url, "https://cdn.velasona.shop");
    }
}
