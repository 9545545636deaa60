//! Geocoded location.

use serde::{Deserialize, Serialize};

/// A geocoding result for a free-text place name.
///
/// Lives only for the duration of a single lookup; never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// The name the caller asked about, as supplied.
    pub name: String,

    /// Latitude in decimal degrees.
    pub latitude: f64,

    /// Longitude in decimal degrees.
    pub longitude: f64,

    /// Formatted address returned by the geocoder.
    pub address: String,
}
