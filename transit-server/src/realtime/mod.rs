//! Real-time status overlay.
//!
//! Attaches best-effort live data to routes after they are fetched and
//! before they are ranked. The provider is a trait so the orchestrator
//! can be tested with a fixed fake, and so a genuine per-city transit
//! integration can replace the simulation behind the same contract.

use chrono::{Duration, Local};
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::domain::{CrowdingLevel, RealTimeInfo, RouteStatus, TransitRoute, TransportType};

/// Source of live status for a route.
///
/// Keyed by route identifier, transport category and city. Lookups never
/// fail; a provider that cannot answer returns an `available: false`
/// record rather than an error.
pub trait RealTimeProvider {
    /// Produce the current live status for a route.
    fn live_status(
        &self,
        route_id: &str,
        transport_type: TransportType,
        city: &str,
    ) -> RealTimeInfo;

    /// Attach live status to every route in place.
    ///
    /// Only `real_time_info` is touched; all other fields keep the values
    /// the directions adapter gave them.
    fn attach_all(&self, routes: &mut [TransitRoute], city: &str) {
        for route in routes {
            route.real_time_info =
                Some(self.live_status(&route.route_id, route.transport_type, city));
        }
    }
}

/// Delay values (minutes) the simulation draws from. Negative values
/// mean the service is running early.
const DELAY_CHOICES: [i64; 6] = [0, 5, 10, 15, -5, -10];

/// Simulated live data, used while no real per-city feed is integrated.
///
/// Draws a uniformly random status, delay, crowding level, next
/// departure within the coming 30 minutes, and platform label.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedRealTime;

impl RealTimeProvider for SimulatedRealTime {
    fn live_status(
        &self,
        _route_id: &str,
        _transport_type: TransportType,
        _city: &str,
    ) -> RealTimeInfo {
        let mut rng = rand::rng();

        let status = *RouteStatus::ALL.choose(&mut rng).unwrap_or(&RouteStatus::OnTime);
        let delay_minutes = *DELAY_CHOICES.choose(&mut rng).unwrap_or(&0);
        let crowding_level = *CrowdingLevel::ALL
            .choose(&mut rng)
            .unwrap_or(&CrowdingLevel::Medium);

        let next_departure = (Local::now() + Duration::minutes(rng.random_range(1..=30)))
            .format("%H:%M")
            .to_string();

        RealTimeInfo {
            status,
            delay_minutes,
            crowding_level,
            next_departure,
            platform: format!("Platform {}", rng.random_range(1..=20)),
            available: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directions::mock::mock_routes;

    #[test]
    fn simulated_fields_stay_in_range() {
        let provider = SimulatedRealTime;

        for _ in 0..50 {
            let info = provider.live_status("101", TransportType::Bus, "default");

            assert!(RouteStatus::ALL.contains(&info.status));
            assert!(DELAY_CHOICES.contains(&info.delay_minutes));
            assert!(CrowdingLevel::ALL.contains(&info.crowding_level));
            assert!(info.available);

            // "Platform 1" through "Platform 20"
            let n: u32 = info
                .platform
                .strip_prefix("Platform ")
                .and_then(|s| s.parse().ok())
                .unwrap();
            assert!((1..=20).contains(&n));

            // HH:MM
            assert_eq!(info.next_departure.len(), 5);
            assert_eq!(info.next_departure.as_bytes()[2], b':');
        }
    }

    #[test]
    fn attach_all_overlays_every_route_and_nothing_else() {
        let provider = SimulatedRealTime;
        let mut routes = mock_routes("Downtown");
        let before = routes.clone();

        provider.attach_all(&mut routes, "default");

        for (route, original) in routes.iter().zip(&before) {
            assert!(route.real_time_info.is_some());

            // Everything but the overlay is untouched
            assert_eq!(route.route_id, original.route_id);
            assert_eq!(route.departure_time, original.departure_time);
            assert_eq!(route.cost, original.cost);
            assert_eq!(route.status, original.status);
        }
    }
}
