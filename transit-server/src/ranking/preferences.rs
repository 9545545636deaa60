//! Caller-supplied ranking preferences.

use std::collections::HashSet;

use crate::domain::TransportType;

/// Weighting used to reorder route candidates.
///
/// Preferences never drop routes; a non-preferred route simply scores
/// lower than a preferred one.
#[derive(Debug, Clone, Default)]
pub struct RoutePreferences {
    /// Transport categories the caller prefers. Each matching route gets
    /// a flat score bonus.
    pub transport_types: HashSet<TransportType>,

    /// When set, cheaper routes score higher (parseable costs only).
    pub prefer_cheaper: bool,
}

impl RoutePreferences {
    /// Preferences with no weighting at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a preferred transport category.
    pub fn with_transport_type(mut self, transport_type: TransportType) -> Self {
        self.transport_types.insert(transport_type);
        self
    }

    /// Enable cost-based scoring.
    pub fn with_prefer_cheaper(mut self) -> Self {
        self.prefer_cheaper = true;
        self
    }
}
