//! BART real-time HTTP client.
//!
//! Provides async methods for querying the BART `etd` (estimated time of
//! departure) API. Handles authentication, rate limiting and unwrapping of
//! the XML-bridge envelope.

use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::domain::{Direction, StationCode};

use super::error::BartError;
use super::types::{EtdResponse, TrainEtd};

/// Default base URL for the BART API.
const DEFAULT_BASE_URL: &str = "https://api.bart.gov/api";

/// Validation key BART publishes for public use.
const DEFAULT_API_KEY: &str = "MW9S-E7SL-26DU-VV8V";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Configuration for the BART client.
#[derive(Debug, Clone)]
pub struct BartConfig {
    /// API key sent with every request
    pub api_key: String,
    /// Base URL for the API (defaults to production BART)
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl BartConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 10,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for BartConfig {
    /// Config using BART's published public key.
    fn default() -> Self {
        Self::new(DEFAULT_API_KEY)
    }
}

/// BART real-time API client.
///
/// Provides departure estimates for a station platform. Uses a semaphore
/// to limit concurrent requests and avoid rate limiting.
#[derive(Debug, Clone)]
pub struct BartClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    semaphore: Arc<Semaphore>,
}

impl BartClient {
    /// Create a new BART client with the given configuration.
    pub fn new(config: BartConfig) -> Result<Self, BartError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Get upcoming departures for one station platform.
    ///
    /// Returns the station's trains grouped by destination, exactly as the
    /// feed reports them. An empty vector means no trains are due.
    ///
    /// # Arguments
    ///
    /// * `station` - Station to query
    /// * `direction` - Platform direction to filter on
    pub async fn etd(
        &self,
        station: &StationCode,
        direction: Direction,
    ) -> Result<Vec<TrainEtd>, BartError> {
        let _permit = self.semaphore.acquire().await.map_err(|_| BartError::Api {
            status: 0,
            message: "Semaphore closed".to_string(),
        })?;

        let url = format!("{}/etd.aspx", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("cmd", "etd"),
                ("orig", station.as_str()),
                ("key", self.api_key.as_str()),
                ("dir", direction.as_str()),
                ("json", "y"),
            ])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(BartError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(BartError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BartError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let decoded: EtdResponse = serde_json::from_str(&body).map_err(|e| BartError::Json {
            message: e.to_string(),
            body: body.chars().take(500).collect(),
        })?;

        // A single-station query returns one station entry; none at all
        // means the board is empty.
        Ok(decoded
            .root
            .station
            .into_iter()
            .next()
            .map(|station| station.etd)
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder() {
        let config = BartConfig::new("test-key")
            .with_base_url("http://localhost:8080")
            .with_max_concurrent(10)
            .with_timeout(60);

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.max_concurrent, 10);
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn config_defaults() {
        let config = BartConfig::new("test-key");

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.max_concurrent, DEFAULT_MAX_CONCURRENT);
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn default_config_uses_public_key() {
        let config = BartConfig::default();

        assert_eq!(config.api_key, DEFAULT_API_KEY);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn client_creation() {
        let config = BartConfig::new("test-key");
        let client = BartClient::new(config);
        assert!(client.is_ok());
    }

    // Integration tests would go here, but would make actual HTTP
    // requests against the live API. They should be marked with
    // #[ignore] and run separately.
}
