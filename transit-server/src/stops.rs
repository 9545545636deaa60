//! Nearby stops and service alerts.
//!
//! Both feeds are mocked: real data would come from a places API and
//! per-agency alert feeds. The shapes are stable so the web layer and
//! UI can integrate against them now.

use serde::Serialize;

/// A transit stop near a queried coordinate.
#[derive(Debug, Clone, Serialize)]
pub struct NearbyStop {
    /// Stop name.
    pub name: String,

    /// Display distance from the query point, e.g. "0.2 km".
    pub distance: String,

    /// Routes serving this stop.
    pub routes: Vec<String>,

    /// Stop coordinates as [latitude, longitude].
    pub coordinates: [f64; 2],
}

/// Severity of a service alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
}

/// A service disruption notice.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceAlert {
    /// Kind of disruption, e.g. "Delay" or "Service Change".
    #[serde(rename = "type")]
    pub alert_type: String,

    /// The affected route's display name.
    pub route: String,

    /// Human-readable description.
    pub message: String,

    /// How disruptive the alert is.
    pub severity: AlertSeverity,

    /// Stops affected by the disruption.
    pub affected_stops: Vec<String>,
}

/// Stops near a coordinate.
///
/// Mock data offset from the query point; the radius is accepted for
/// interface stability but not yet applied.
pub fn nearby_stops(latitude: f64, longitude: f64, _radius_km: f64) -> Vec<NearbyStop> {
    vec![
        NearbyStop {
            name: "Central Station".to_string(),
            distance: "0.2 km".to_string(),
            routes: vec![
                "Bus 101".to_string(),
                "Train A".to_string(),
                "Subway Line 1".to_string(),
            ],
            coordinates: [latitude + 0.001, longitude + 0.001],
        },
        NearbyStop {
            name: "Downtown Bus Stop".to_string(),
            distance: "0.5 km".to_string(),
            routes: vec!["Bus 102".to_string(), "Bus 103".to_string()],
            coordinates: [latitude - 0.002, longitude + 0.002],
        },
    ]
}

/// Current service alerts for a city.
///
/// Mock data; the city key is accepted for interface stability.
pub fn service_alerts(_city: &str) -> Vec<ServiceAlert> {
    vec![
        ServiceAlert {
            alert_type: "Delay".to_string(),
            route: "Bus 101".to_string(),
            message: "Bus 101 is running 10 minutes late due to traffic".to_string(),
            severity: AlertSeverity::Medium,
            affected_stops: vec!["Central Station".to_string(), "Downtown".to_string()],
        },
        ServiceAlert {
            alert_type: "Service Change".to_string(),
            route: "Train A".to_string(),
            message: "Train A will not stop at Main Street Station today".to_string(),
            severity: AlertSeverity::High,
            affected_stops: vec!["Main Street Station".to_string()],
        },
    ]
}
