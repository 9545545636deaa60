//! Nominatim geocoding client.

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;
use tracing::warn;

use crate::domain::Location;

use super::error::GeocodeError;

/// Default base URL for the Nominatim search endpoint.
const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org/search";

/// User agent sent with every request. Nominatim rejects anonymous
/// clients, so this must identify the application.
const DEFAULT_USER_AGENT: &str = "travelbuddy-transit-server";

/// One place in a Nominatim search response. Coordinates arrive as
/// strings and are parsed during conversion.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceDto {
    pub lat: String,
    pub lon: String,
    pub display_name: String,
}

/// Configuration for the geocoding client.
#[derive(Debug, Clone)]
pub struct GeocodeConfig {
    /// Base URL for the search endpoint
    pub base_url: String,
    /// User agent identifying this application
    pub user_agent: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GeocodeConfig {
    /// Create a config with production defaults.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 10,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

impl Default for GeocodeConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Geocoding client.
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    http: reqwest::Client,
    base_url: String,
}

impl GeocodeClient {
    /// Create a new geocoding client.
    pub fn new(config: GeocodeConfig) -> Result<Self, GeocodeError> {
        let mut headers = HeaderMap::new();
        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|_| GeocodeError::InvalidConfig("invalid user agent".to_string()))?;
        headers.insert(USER_AGENT, user_agent);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Look up coordinates for a place name.
    ///
    /// Misses and transport failures both come back as `None`; failures
    /// are logged for diagnostics but never surfaced to the caller.
    pub async fn lookup(&self, name: &str) -> Option<Location> {
        match self.try_lookup(name).await {
            Ok(location) => location,
            Err(e) => {
                warn!(error = %e, name, "geocoding failed");
                None
            }
        }
    }

    /// Look up coordinates, keeping failure information.
    ///
    /// `Ok(None)` is a miss (the geocoder found nothing); `Err` is a
    /// transport or parse failure.
    pub async fn try_lookup(&self, name: &str) -> Result<Option<Location>, GeocodeError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("q", name), ("format", "json"), ("limit", "1")])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodeError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let places: Vec<PlaceDto> =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Json {
                message: e.to_string(),
            })?;

        Ok(places.into_iter().next().and_then(|p| convert_place(name, &p)))
    }
}

/// Convert a place DTO into a domain location.
///
/// Coordinates that fail to parse count as a miss, not an error.
fn convert_place(name: &str, place: &PlaceDto) -> Option<Location> {
    let latitude = place.lat.parse().ok()?;
    let longitude = place.lon.parse().ok()?;

    Some(Location {
        name: name.to_string(),
        latitude,
        longitude,
        address: place.display_name.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = GeocodeConfig::new();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn client_creation() {
        assert!(GeocodeClient::new(GeocodeConfig::new()).is_ok());
    }

    #[test]
    fn convert_parses_string_coordinates() {
        let place = PlaceDto {
            lat: "40.7580".to_string(),
            lon: "-73.9855".to_string(),
            display_name: "Times Square, Manhattan, New York".to_string(),
        };

        let location = convert_place("Times Square", &place).unwrap();

        assert_eq!(location.name, "Times Square");
        assert!((location.latitude - 40.758).abs() < 1e-6);
        assert!((location.longitude + 73.9855).abs() < 1e-6);
        assert!(location.address.contains("Manhattan"));
    }

    #[test]
    fn convert_rejects_malformed_coordinates() {
        let place = PlaceDto {
            lat: "not-a-number".to_string(),
            lon: "-73.9855".to_string(),
            display_name: "Somewhere".to_string(),
        };

        assert!(convert_place("Somewhere", &place).is_none());
    }

    #[test]
    fn deserialize_search_response() {
        let json = r#"[
            {"lat": "40.7580", "lon": "-73.9855", "display_name": "Times Square", "place_id": 1}
        ]"#;

        let places: Vec<PlaceDto> = serde_json::from_str(json).unwrap();
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].lat, "40.7580");
    }

    #[test]
    fn deserialize_empty_response_is_a_miss() {
        let places: Vec<PlaceDto> = serde_json::from_str("[]").unwrap();
        assert!(places.is_empty());
    }
}
