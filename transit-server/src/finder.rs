//! Route finding orchestration.
//!
//! Composes the pipeline: fetch routes from the upstream adapter (or
//! the mock fixture), attach the real-time overlay, rank by preferences,
//! truncate. `find` never fails - every upstream failure mode degrades
//! to mock data, so callers always get a usable, non-empty list even
//! when the provider is completely unavailable.

use tracing::{debug, warn};

use crate::directions::mock::mock_routes;
use crate::directions::{DirectionsClient, DirectionsError, TravelMode};
use crate::domain::TransitRoute;
use crate::ranking::{RoutePreferences, rank_routes};
use crate::realtime::RealTimeProvider;

/// Source of raw route candidates.
///
/// This abstraction lets tests drive the finder with canned routes or
/// injected failures instead of a live HTTP client.
#[allow(async_fn_in_trait)]
pub trait RouteSource {
    /// Fetch route candidates between two free-text places.
    async fn fetch_routes(
        &self,
        origin: &str,
        destination: &str,
        mode: TravelMode,
    ) -> Result<Vec<TransitRoute>, DirectionsError>;
}

impl RouteSource for DirectionsClient {
    async fn fetch_routes(
        &self,
        origin: &str,
        destination: &str,
        mode: TravelMode,
    ) -> Result<Vec<TransitRoute>, DirectionsError> {
        DirectionsClient::fetch_routes(self, origin, destination, mode).await
    }
}

/// Configuration for the route finder.
#[derive(Debug, Clone)]
pub struct FinderConfig {
    /// Maximum number of routes returned per query.
    pub max_results: usize,

    /// City key passed to the real-time provider.
    pub city: String,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            max_results: 5,
            city: "default".to_string(),
        }
    }
}

/// Finds and ranks transit routes between two places.
///
/// Holds an optional upstream source - `None` means no API credential is
/// configured and every query is served from the mock fixture without
/// attempting a network call.
pub struct RouteFinder<S, R> {
    source: Option<S>,
    realtime: R,
    config: FinderConfig,
}

impl<S: RouteSource, R: RealTimeProvider> RouteFinder<S, R> {
    /// Create a new finder.
    pub fn new(source: Option<S>, realtime: R, config: FinderConfig) -> Self {
        Self {
            source,
            realtime,
            config,
        }
    }

    /// Find the best routes between origin and destination.
    ///
    /// Without preferences the adapter-given order is kept; with
    /// preferences the routes are reordered best-first. At most
    /// `max_results` routes are returned.
    pub async fn find(
        &self,
        origin: &str,
        destination: &str,
        preferences: Option<&RoutePreferences>,
    ) -> Vec<TransitRoute> {
        let mut routes = self.fetch(origin, destination).await;
        debug!(count = routes.len(), origin, destination, "fetched routes");

        self.realtime.attach_all(&mut routes, &self.config.city);

        if let Some(preferences) = preferences {
            routes = rank_routes(routes, preferences);
        }

        routes.truncate(self.config.max_results);
        routes
    }

    /// Fetch raw candidates, falling back to mock data on any failure.
    ///
    /// The fallback decision is made here, once, so the client itself can
    /// keep reporting failures as plain `Result`s.
    async fn fetch(&self, origin: &str, destination: &str) -> Vec<TransitRoute> {
        let Some(source) = &self.source else {
            debug!("no directions API key configured; serving mock routes");
            return mock_routes(destination);
        };

        match source
            .fetch_routes(origin, destination, TravelMode::Transit)
            .await
        {
            Ok(routes) => routes,
            Err(e) => {
                warn!(error = %e, "directions fetch failed; serving mock routes");
                mock_routes(destination)
            }
        }
    }
}
