//! Transit route value types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::TransportType;

/// Live status of a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteStatus {
    #[serde(rename = "On Time")]
    OnTime,
    Delayed,
    Early,
    Cancelled,
}

impl RouteStatus {
    /// All statuses, in the order the simulated overlay draws from.
    pub const ALL: [RouteStatus; 4] = [
        RouteStatus::OnTime,
        RouteStatus::Delayed,
        RouteStatus::Early,
        RouteStatus::Cancelled,
    ];
}

impl Default for RouteStatus {
    fn default() -> Self {
        RouteStatus::OnTime
    }
}

impl fmt::Display for RouteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RouteStatus::OnTime => "On Time",
            RouteStatus::Delayed => "Delayed",
            RouteStatus::Early => "Early",
            RouteStatus::Cancelled => "Cancelled",
        };
        f.write_str(s)
    }
}

/// How busy a service currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrowdingLevel {
    Low,
    Medium,
    High,
}

impl CrowdingLevel {
    /// All levels, in the order the simulated overlay draws from.
    pub const ALL: [CrowdingLevel; 3] = [
        CrowdingLevel::Low,
        CrowdingLevel::Medium,
        CrowdingLevel::High,
    ];
}

impl fmt::Display for CrowdingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CrowdingLevel::Low => "Low",
            CrowdingLevel::Medium => "Medium",
            CrowdingLevel::High => "High",
        };
        f.write_str(s)
    }
}

/// Best-effort live information for a route.
///
/// Attached to a `TransitRoute` exactly once, by the real-time overlay,
/// after the route has been fetched and before ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealTimeInfo {
    /// Live status, which may disagree with the route's scheduled status.
    pub status: RouteStatus,

    /// Delay in minutes. Negative values mean the service is running early.
    pub delay_minutes: i64,

    /// Current crowding level.
    pub crowding_level: CrowdingLevel,

    /// Next departure time in HH:MM.
    pub next_departure: String,

    /// Platform or stop label.
    pub platform: String,

    /// Whether live data was actually available for this route.
    pub available: bool,
}

/// One candidate transit option between an origin and a destination.
///
/// Times, durations and costs are provider-native display text and are
/// passed through unmodified; no timezone normalization is performed.
/// Apart from `real_time_info`, a route is never mutated after the
/// directions adapter creates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitRoute {
    /// Short identifier, e.g. a line number ("101") or letter ("A").
    /// "Unknown" when the provider omits it.
    pub route_id: String,

    /// Human-readable line or service name.
    pub route_name: String,

    /// Transport category; always a member of the fixed set.
    pub transport_type: TransportType,

    /// Headsign / final stop label.
    pub destination: String,

    /// Departure time display text (HH:MM or provider-native).
    pub departure_time: String,

    /// Arrival time display text.
    pub arrival_time: String,

    /// Duration display text, e.g. "20 minutes". Also used for scoring;
    /// see `ranking::parse_leading_minutes` for its limits.
    pub duration: String,

    /// Price text with currency symbol, e.g. "$2.50". Absent when unknown.
    pub cost: Option<String>,

    /// Departure stop or platform label.
    pub platform: Option<String>,

    /// Scheduled status as reported at fetch time.
    pub status: RouteStatus,

    /// Live overlay, populated by the real-time step.
    pub real_time_info: Option<RealTimeInfo>,
}

impl TransitRoute {
    /// Create a route with the given core fields; cost and platform unset,
    /// status On Time, no real-time overlay.
    pub fn new(
        route_id: impl Into<String>,
        route_name: impl Into<String>,
        transport_type: TransportType,
        destination: impl Into<String>,
        departure_time: impl Into<String>,
        arrival_time: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            route_id: route_id.into(),
            route_name: route_name.into(),
            transport_type,
            destination: destination.into(),
            departure_time: departure_time.into(),
            arrival_time: arrival_time.into(),
            duration: duration.into(),
            cost: None,
            platform: None,
            status: RouteStatus::OnTime,
            real_time_info: None,
        }
    }
}
