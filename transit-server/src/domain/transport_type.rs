//! Transport category classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed set of transport categories.
///
/// Every route carries exactly one of these. Upstream vehicle names that
/// match nothing degrade to `Unknown` rather than failing, so callers can
/// rely on classification never being an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportType {
    Bus,
    Train,
    Subway,
    Tram,
    Unknown,
}

impl TransportType {
    /// Classify a free-text vehicle type into a transport category.
    ///
    /// Matching is case-insensitive substring search, in priority order:
    /// "bus", then "train"/"rail", then "subway"/"metro", then
    /// "tram"/"streetcar". Anything else is `Unknown`.
    ///
    /// This is a best-effort heuristic, not an exhaustive taxonomy -
    /// providers use names like "HEAVY_RAIL" or "COMMUTER_TRAIN" that we
    /// only need to bucket coarsely.
    pub fn classify(vehicle_type: &str) -> Self {
        let vehicle_type = vehicle_type.to_lowercase();

        if vehicle_type.contains("bus") {
            TransportType::Bus
        } else if vehicle_type.contains("train") || vehicle_type.contains("rail") {
            TransportType::Train
        } else if vehicle_type.contains("subway") || vehicle_type.contains("metro") {
            TransportType::Subway
        } else if vehicle_type.contains("tram") || vehicle_type.contains("streetcar") {
            TransportType::Tram
        } else {
            TransportType::Unknown
        }
    }

    /// Returns the lowercase name used in queries and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportType::Bus => "bus",
            TransportType::Train => "train",
            TransportType::Subway => "subway",
            TransportType::Tram => "tram",
            TransportType::Unknown => "unknown",
        }
    }

    /// Parse a category name as written by `as_str`.
    ///
    /// Unlike `classify`, this expects an exact (case-insensitive) name;
    /// it is used for caller-supplied preference lists.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "bus" => Some(TransportType::Bus),
            "train" => Some(TransportType::Train),
            "subway" => Some(TransportType::Subway),
            "tram" => Some(TransportType::Tram),
            "unknown" => Some(TransportType::Unknown),
            _ => None,
        }
    }
}

impl fmt::Display for TransportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
