//! Application state for the web layer.

use std::sync::Arc;

use crate::directions::DirectionsClient;
use crate::finder::RouteFinder;
use crate::geocode::GeocodeClient;
use crate::realtime::SimulatedRealTime;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Route finder pipeline
    pub finder: Arc<RouteFinder<DirectionsClient, SimulatedRealTime>>,

    /// Geocoding client
    pub geocoder: Arc<GeocodeClient>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        finder: RouteFinder<DirectionsClient, SimulatedRealTime>,
        geocoder: GeocodeClient,
    ) -> Self {
        Self {
            finder: Arc::new(finder),
            geocoder: Arc::new(geocoder),
        }
    }
}
