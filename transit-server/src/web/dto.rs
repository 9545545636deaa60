//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Location, TransitRoute, TransportType};
use crate::ranking::RoutePreferences;
use crate::stops::{NearbyStop, ServiceAlert};

/// Request to find routes between two places.
#[derive(Debug, Deserialize)]
pub struct FindRoutesRequest {
    /// Origin place name or address
    pub origin: String,

    /// Destination place name or address
    pub destination: String,

    /// Comma-separated preferred transport categories,
    /// e.g. "train,subway". Unrecognized names are rejected.
    pub transport_types: Option<String>,

    /// Whether cheaper routes should rank higher
    pub prefer_cheaper: Option<bool>,
}

impl FindRoutesRequest {
    /// Build ranking preferences from the request.
    ///
    /// Returns `None` when the caller expressed no preference at all, so
    /// the finder keeps the adapter-given order. An unrecognized category
    /// name is a caller error, reported as `Err`.
    pub fn preferences(&self) -> Result<Option<RoutePreferences>, String> {
        let mut prefs = RoutePreferences::new();

        if let Some(types) = &self.transport_types {
            for name in types.split(',').filter(|s| !s.trim().is_empty()) {
                let transport_type = TransportType::parse(name)
                    .ok_or_else(|| format!("unknown transport type: {}", name.trim()))?;
                prefs.transport_types.insert(transport_type);
            }
        }

        prefs.prefer_cheaper = self.prefer_cheaper.unwrap_or(false);

        if prefs.transport_types.is_empty() && !prefs.prefer_cheaper {
            Ok(None)
        } else {
            Ok(Some(prefs))
        }
    }
}

/// Response for a route query.
#[derive(Debug, Serialize)]
pub struct FindRoutesResponse {
    /// Ranked route candidates, best-first when preferences were given
    pub routes: Vec<TransitRoute>,

    /// Deep link opening the same query in a map application
    pub maps_link: String,
}

/// Request to geocode a place name.
#[derive(Debug, Deserialize)]
pub struct GeocodeRequest {
    /// Free-text place name
    pub q: String,
}

/// Response for a geocoding query. `location` is null on a miss.
#[derive(Debug, Serialize)]
pub struct GeocodeResponse {
    pub location: Option<Location>,
}

/// Request for stops near a coordinate.
#[derive(Debug, Deserialize)]
pub struct NearbyStopsRequest {
    pub latitude: f64,
    pub longitude: f64,

    /// Search radius in kilometres (defaults to 1.0)
    pub radius_km: Option<f64>,
}

/// Response listing nearby stops.
#[derive(Debug, Serialize)]
pub struct NearbyStopsResponse {
    pub stops: Vec<NearbyStop>,
}

/// Request for service alerts.
#[derive(Debug, Deserialize)]
pub struct AlertsRequest {
    /// City key (defaults to "default")
    pub city: Option<String>,
}

/// Response listing service alerts.
#[derive(Debug, Serialize)]
pub struct AlertsResponse {
    pub alerts: Vec<ServiceAlert>,
}

/// Error body returned with non-2xx statuses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
