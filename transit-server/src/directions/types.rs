//! Directions API response DTOs.
//!
//! These types map directly to the upstream directions JSON. The
//! provider omits fields rather than sending null values, so everything
//! that may be absent is an `Option`; defaults are substituted during
//! conversion, not here.

use serde::Deserialize;

/// Top-level directions response.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    /// Payload-level status, "OK" on success. Other values ("ZERO_RESULTS",
    /// "REQUEST_DENIED", "OVER_QUERY_LIMIT", ...) indicate failure even
    /// when the HTTP status was 200.
    pub status: String,

    /// Candidate routes; multiple entries when alternatives are enabled.
    #[serde(default)]
    pub routes: Vec<RouteDto>,

    /// Human-readable error detail accompanying a non-OK status.
    pub error_message: Option<String>,
}

/// One candidate route.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteDto {
    /// Journey legs; a single origin/destination query yields one leg.
    #[serde(default)]
    pub legs: Vec<LegDto>,
}

/// One leg of a route.
#[derive(Debug, Clone, Deserialize)]
pub struct LegDto {
    /// Steps within the leg (walking, transit, ...).
    #[serde(default)]
    pub steps: Vec<StepDto>,
}

/// One step within a leg.
#[derive(Debug, Clone, Deserialize)]
pub struct StepDto {
    /// Travel mode, e.g. "WALKING" or "TRANSIT". Only transit steps
    /// become routes.
    pub travel_mode: Option<String>,

    /// Step duration.
    pub duration: Option<TextValue>,

    /// Transit-specific detail, present only on transit steps.
    pub transit_details: Option<TransitDetailsDto>,
}

/// A value with a display-text rendering. The upstream pairs a numeric
/// `value` with `text`; we only consume the text.
#[derive(Debug, Clone, Deserialize)]
pub struct TextValue {
    pub text: Option<String>,
}

/// Transit detail for a step.
#[derive(Debug, Clone, Deserialize)]
pub struct TransitDetailsDto {
    /// The line being ridden.
    pub line: Option<LineDto>,

    /// Headsign shown on the vehicle.
    pub headsign: Option<String>,

    /// Departure time display text.
    pub departure_time: Option<TextValue>,

    /// Arrival time display text.
    pub arrival_time: Option<TextValue>,

    /// The stop the passenger boards at.
    pub departure_stop: Option<StopDto>,
}

/// A transit line.
#[derive(Debug, Clone, Deserialize)]
pub struct LineDto {
    /// Short identifier, e.g. "101" or "A".
    pub short_name: Option<String>,

    /// Full line name.
    pub name: Option<String>,

    /// The vehicle serving the line.
    pub vehicle: Option<VehicleDto>,
}

/// Vehicle description for a line.
#[derive(Debug, Clone, Deserialize)]
pub struct VehicleDto {
    /// Free-text vehicle type, e.g. "BUS" or "HEAVY_RAIL".
    #[serde(rename = "type")]
    pub vehicle_type: Option<String>,
}

/// A transit stop.
#[derive(Debug, Clone, Deserialize)]
pub struct StopDto {
    pub name: Option<String>,
}
