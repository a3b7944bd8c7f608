//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `GREENMIND_API_BASE_URL` - Backend base URL including the `/api`
//!   prefix (default: `http://localhost:8080/api`)
//! - `GREENMIND_SESSION_FILE` - Path of the durable session-token file
//!   (default: `$HOME/.greenmind/session`)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Default backend address for local development.
const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// Session file location relative to the home directory.
const DEFAULT_SESSION_FILE: &str = ".greenmind/session";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL, without a trailing slash.
    pub base_url: Url,
    /// Durable storage location for the session token.
    pub session_file: PathBuf,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but invalid, or if no
    /// session file location can be derived (no `GREENMIND_SESSION_FILE`
    /// and no home directory).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let raw_url = get_env_or_default("GREENMIND_API_BASE_URL", DEFAULT_API_BASE_URL);
        let base_url = parse_base_url(&raw_url).map_err(|e| {
            ConfigError::InvalidEnvVar("GREENMIND_API_BASE_URL".to_string(), e.to_string())
        })?;

        let session_file = match get_optional_env("GREENMIND_SESSION_FILE") {
            Some(path) => PathBuf::from(path),
            None => default_session_file()?,
        };

        Ok(Self {
            base_url,
            session_file,
        })
    }

    /// Build a configuration with an explicit base URL and session file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `base_url` is not a valid absolute URL.
    pub fn new(base_url: &str, session_file: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let base_url = parse_base_url(base_url)
            .map_err(|e| ConfigError::InvalidEnvVar("base_url".to_string(), e.to_string()))?;
        Ok(Self {
            base_url,
            session_file: session_file.into(),
        })
    }
}

/// Parse and normalise the base URL: trailing slashes are stripped so
/// endpoint paths (`/users`, `/auth/login`) can be appended verbatim.
fn parse_base_url(raw: &str) -> Result<Url, url::ParseError> {
    Url::parse(raw.trim_end_matches('/'))
}

fn default_session_file() -> Result<PathBuf, ConfigError> {
    let home = std::env::var("HOME")
        .map_err(|_| ConfigError::MissingEnvVar("GREENMIND_SESSION_FILE or HOME".to_string()))?;
    Ok(PathBuf::from(home).join(DEFAULT_SESSION_FILE))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
