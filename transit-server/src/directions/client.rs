//! Directions HTTP client.
//!
//! Issues a single blocking-equivalent request per query and converts
//! the response to domain routes. Failures are returned as explicit
//! errors; the caller (the route finder) decides on the mock fallback.

use crate::domain::TransitRoute;

use super::convert::convert_directions;
use super::error::DirectionsError;
use super::types::DirectionsResponse;

/// Default base URL for the directions API.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";

/// Transit submodes requested from the provider.
const TRANSIT_MODE_FILTER: &str = "bus|subway|train|tram";

/// Travel mode for a directions query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TravelMode {
    #[default]
    Transit,
    Walking,
    Driving,
    Bicycling,
}

impl TravelMode {
    /// The query-parameter value for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelMode::Transit => "transit",
            TravelMode::Walking => "walking",
            TravelMode::Driving => "driving",
            TravelMode::Bicycling => "bicycling",
        }
    }
}

/// Configuration for the directions client.
#[derive(Debug, Clone)]
pub struct DirectionsConfig {
    /// API key for authentication
    pub api_key: String,
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl DirectionsConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Directions API client.
#[derive(Debug, Clone)]
pub struct DirectionsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl DirectionsClient {
    /// Create a new directions client with the given configuration.
    pub fn new(config: DirectionsConfig) -> Result<Self, DirectionsError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }

    /// Fetch transit routes between two free-text places.
    ///
    /// Requests alternatives and restricts transit submodes to bus,
    /// subway, train and tram. Returns one record per transit step in
    /// the response (see [`convert_directions`]); an OK response with no
    /// transit steps yields an empty list, which is not an error.
    pub async fn fetch_routes(
        &self,
        origin: &str,
        destination: &str,
        mode: TravelMode,
    ) -> Result<Vec<TransitRoute>, DirectionsError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("origin", origin),
                ("destination", destination),
                ("mode", mode.as_str()),
                ("key", self.api_key.as_str()),
                ("alternatives", "true"),
                ("transit_mode", TRANSIT_MODE_FILTER),
            ])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DirectionsError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let parsed: DirectionsResponse =
            serde_json::from_str(&body).map_err(|e| DirectionsError::Json {
                message: e.to_string(),
            })?;

        if parsed.status != "OK" {
            return Err(DirectionsError::Upstream {
                status: parsed.status,
                message: parsed
                    .error_message
                    .unwrap_or_else(|| "Unknown error".to_string()),
            });
        }

        Ok(convert_directions(&parsed))
    }
}
