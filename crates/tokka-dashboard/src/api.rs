//! Configuration endpoint client
//!
//! Provides the single typed request the dashboard makes, using gloo-net.
//! There are no retries here; the refresh button is the retry policy.

use gloo_net::http::Request;
use thiserror::Error;

use crate::config::DashboardConfig;
use crate::model::GatewayConfig;

/// Anything that can produce a configuration document
#[allow(async_fn_in_trait)]
pub trait ConfigSource {
    async fn fetch_config(&self) -> Result<GatewayConfig, ApiError>;
}

/// API client for the gateway's config endpoint
pub struct ApiClient {
    config_url: String,
}

impl ApiClient {
    /// Create a new API client for the given endpoint URL
    pub fn new(config_url: impl Into<String>) -> Self {
        Self {
            config_url: config_url.into(),
        }
    }

    /// Create an API client from dashboard configuration
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(config.config_url())
    }
}

impl ConfigSource for ApiClient {
    /// Fetch and parse the configuration document
    async fn fetch_config(&self) -> Result<GatewayConfig, ApiError> {
        log::debug!("fetching configuration from {}", self.config_url);
        let resp = Request::get(&self.config_url).send().await?;

        if !resp.ok() {
            return Err(ApiError::Http(resp.status()));
        }

        let body = resp.text().await?;
        Ok(GatewayConfig::from_json(&body)?)
    }
}

// ============================================================================
// Error Types
// ============================================================================

/// Why a configuration could not be obtained
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Config load failed: {0}")]
    Http(u16),

    #[error("Network error: {0}")]
    Network(#[from] gloo_net::Error),

    #[error("Malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_carries_status() {
        let err = ApiError::Http(500);
        assert_eq!(err.to_string(), "Config load failed: 500");
    }

    #[test]
    fn test_parse_error() {
        let err: ApiError = GatewayConfig::from_json("{").unwrap_err().into();
        assert!(matches!(err, ApiError::Parse(_)));
        assert!(err.to_string().starts_with("Malformed configuration"));
    }

    #[test]
    fn test_client_from_config() {
        let config = DashboardConfig {
            config_url: "/api/config".to_string(),
            ..Default::default()
        };
        assert_eq!(ApiClient::from_config(&config).config_url, "/api/config");
    }
}
