//! Dashboard configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! - `HOLDED_API_KEY` - Holded API key (sent as the `key` header). Without
//!   it the dashboard still starts; every fetch is then rejected by Holded and
//!   the page shows an empty table.
//! - `DASHBOARD_HOST` - Bind address (default: 127.0.0.1)
//! - `DASHBOARD_PORT` - Listen port (default: 3000)
//! - `HOLDED_BASE_URL` - Invoicing API base URL (default: <https://api.holded.com/api/invoicing/v1>)
//! - `HOLDED_TIMEOUT_SECS` - HTTP client timeout in seconds (default: 30)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Sentry error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Sentry traces sample rate (default: 1.0)

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use url::Url;

/// Default Holded invoicing API base URL.
pub const DEFAULT_HOLDED_BASE_URL: &str = "https://api.holded.com/api/invoicing/v1";

const DEFAULT_HOLDED_TIMEOUT_SECS: u64 = 30;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
    "put-your",
    "add-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Dashboard application configuration.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Holded API configuration
    pub holded: HoldedConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "development", "staging", "production")
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate (0.0 to 1.0)
    pub sentry_sample_rate: f32,
    /// Sentry traces sample rate for performance monitoring (0.0 to 1.0)
    pub sentry_traces_sample_rate: f32,
}

/// Holded API configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct HoldedConfig {
    /// Holded API key; requests go out without the `key` header when unset
    pub api_key: Option<SecretString>,
    /// Invoicing API base URL (validated, no trailing slash)
    pub base_url: String,
    /// Request timeout for the HTTP client
    pub timeout: Duration,
}

impl std::fmt::Debug for HoldedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HoldedConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl HoldedConfig {
    /// Create a Holded configuration with the default base URL and timeout.
    #[must_use]
    pub fn new(api_key: SecretString) -> Self {
        Self::with_api_key(Some(api_key))
    }

    /// Create a Holded configuration with no API key.
    #[must_use]
    pub fn without_api_key() -> Self {
        Self::with_api_key(None)
    }

    fn with_api_key(api_key: Option<SecretString>) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_HOLDED_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_HOLDED_TIMEOUT_SECS),
        }
    }

    /// Override the API base URL (used to point at a staging or fake API).
    #[must_use]
    pub fn with_base_url(mut self, base_url: &Url) -> Self {
        self.base_url = base_url.as_str().trim_end_matches('/').to_string();
        self
    }

    fn from_env() -> Result<Self, ConfigError> {
        let api_key = get_optional_env("HOLDED_API_KEY");
        if let Some(api_key) = &api_key {
            validate_api_key(api_key, "HOLDED_API_KEY")?;
        }

        let base_url = match get_optional_env("HOLDED_BASE_URL") {
            Some(raw) => parse_base_url(&raw)?,
            None => DEFAULT_HOLDED_BASE_URL.to_string(),
        };

        let timeout_secs = get_env_or_default(
            "HOLDED_TIMEOUT_SECS",
            &DEFAULT_HOLDED_TIMEOUT_SECS.to_string(),
        )
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidEnvVar("HOLDED_TIMEOUT_SECS".to_string(), e.to_string()))?;

        Ok(Self {
            api_key: api_key.map(SecretString::from),
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl DashboardConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is invalid or the API key looks
    /// like a placeholder. A missing API key is not an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("DASHBOARD_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("DASHBOARD_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("DASHBOARD_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("DASHBOARD_PORT".to_string(), e.to_string()))?;

        let holded = HoldedConfig::from_env()?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");
        let sentry_sample_rate = get_optional_env("SENTRY_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);
        let sentry_traces_sample_rate = get_optional_env("SENTRY_TRACES_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);

        Ok(Self {
            host,
            port,
            holded,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Returns a reference to the Holded configuration.
    #[must_use]
    pub const fn holded(&self) -> &HoldedConfig {
        &self.holded
    }

    /// Whether an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.holded.api_key.is_some()
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable. Empty values count as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}

/// Validate a base URL, dropping any trailing slash so paths join cleanly.
fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let url = Url::parse(raw.trim_end_matches('/'))
        .map_err(|e| ConfigError::InvalidEnvVar("HOLDED_BASE_URL".to_string(), e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            "HOLDED_BASE_URL".to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}

/// Validate that an API key is not an obvious placeholder.
fn validate_api_key(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    if secret.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            "must not contain whitespace".to_string(),
        ));
    }

    Ok(())
}

/// Expose the API key for building request headers.
pub(crate) fn expose_api_key(config: &HoldedConfig) -> Option<&str> {
    config.api_key.as_ref().map(ExposeSecret::expose_secret)
}
