//! Holded API client for the invoicing contacts endpoint.
//!
//! Only the "list contacts" operation is used by the dashboard; the rest of
//! the invoicing API (invoices, products, warehouses, payments) is not
//! wrapped.
//!
//! # API Reference
//!
//! - Base URL: `https://api.holded.com/api/invoicing/v1`
//! - Authentication: API key via the `key` header
//! - Responses: JSON

mod contacts;
mod types;

pub use types::*;

use std::sync::Arc;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use thiserror::Error;

use crate::config::{HoldedConfig, expose_api_key};

/// Header carrying the Holded API key.
const API_KEY_HEADER: &str = "key";

/// Errors that can occur when interacting with the Holded API.
#[derive(Debug, Error)]
pub enum HoldedError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Rate limited by Holded.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Failed to parse response.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Unauthorized (missing or invalid API key).
    #[error("Unauthorized: invalid API key")]
    Unauthorized,

    /// Client could not be configured.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Holded API client.
///
/// Cheap to clone; the underlying `reqwest::Client` (and its connection
/// pool) is shared.
#[derive(Clone)]
pub struct HoldedClient {
    inner: Arc<HoldedClientInner>,
}

struct HoldedClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl HoldedClient {
    /// Create a new Holded API client.
    ///
    /// # Errors
    ///
    /// Returns error if the API key is not a valid header value or the HTTP
    /// client fails to build. A config without a key builds a client whose
    /// requests Holded will reject as unauthorized.
    pub fn new(config: &HoldedConfig) -> Result<Self, HoldedError> {
        let mut headers = HeaderMap::new();

        if let Some(api_key) = expose_api_key(config) {
            let mut key = HeaderValue::from_str(api_key)
                .map_err(|e| HoldedError::Config(format!("Invalid API key format: {e}")))?;
            key.set_sensitive(true);
            headers.insert(API_KEY_HEADER, key);
        }
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(HoldedClientInner {
                client,
                base_url: config.base_url.trim_end_matches('/').to_string(),
            }),
        })
    }

    /// Base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Execute a GET request to the Holded API.
    pub(crate) async fn get<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, HoldedError> {
        let url = format!("{}{path}", self.inner.base_url);
        let response = self.inner.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    /// Handle API response and parse JSON.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, HoldedError> {
        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await?;
            return serde_json::from_slice(&body)
                .map_err(|e| HoldedError::Parse(format!("Failed to parse response: {e}")));
        }

        Err(Self::parse_error(response).await)
    }

    /// Parse error response from the Holded API.
    async fn parse_error(response: reqwest::Response) -> HoldedError {
        let status = response.status().as_u16();

        if status == 429 {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok())
                .unwrap_or(60);
            return HoldedError::RateLimited(retry_after);
        }

        if status == 401 || status == 403 {
            return HoldedError::Unauthorized;
        }

        if status == 404 {
            return HoldedError::NotFound("Resource not found".to_string());
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        HoldedError::Api { status, message }
    }
}

impl std::fmt::Debug for HoldedClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HoldedClient")
            .field("base_url", &self.inner.base_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::SecretString;

    use super::*;

    #[test]
    fn test_new_uses_configured_base_url() {
        let config = HoldedConfig::new(SecretString::from("3f9a1c7e0b2d4e6f"));
        let client = HoldedClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "https://api.holded.com/api/invoicing/v1");
    }

    #[test]
    fn test_new_rejects_invalid_header_value() {
        let config = HoldedConfig::new(SecretString::from("bad\nkey"));
        let result = HoldedClient::new(&config);
        assert!(matches!(result, Err(HoldedError::Config(_))));
    }

    #[test]
    fn test_new_without_api_key() {
        let client = HoldedClient::new(&HoldedConfig::without_api_key()).unwrap();
        assert_eq!(client.base_url(), "https://api.holded.com/api/invoicing/v1");
    }

    #[test]
    fn test_debug_hides_api_key() {
        let config = HoldedConfig::new(SecretString::from("super_secret_holded_key"));
        let client = HoldedClient::new(&config).unwrap();
        let debug_output = format!("{client:?}");
        assert!(!debug_output.contains("super_secret_holded_key"));
    }
}
