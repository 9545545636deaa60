//! Mock route generator for running without API credentials.
//!
//! Produces a fixed three-route set (bus, train, subway) so the rest of
//! the pipeline - overlay, ranking, display - is always exercisable.
//! The structure is deterministic: always the same three records in the
//! same order; only the clock-derived time fields vary between calls.

use chrono::{DateTime, Duration, Local};

use crate::domain::{CrowdingLevel, RealTimeInfo, RouteStatus, TransitRoute, TransportType};

/// Generate the fallback route set for a destination, timed from now.
pub fn mock_routes(destination: &str) -> Vec<TransitRoute> {
    mock_routes_at(destination, Local::now())
}

/// Generate the fallback route set with an explicit clock (for tests).
pub fn mock_routes_at(destination: &str, now: DateTime<Local>) -> Vec<TransitRoute> {
    let hhmm = |mins: i64| (now + Duration::minutes(mins)).format("%H:%M").to_string();

    let mut bus = TransitRoute::new(
        "101",
        "Express Bus 101",
        TransportType::Bus,
        destination,
        hhmm(5),
        hhmm(25),
        "20 minutes",
    );
    bus.cost = Some("$2.50".to_string());
    bus.platform = Some("Platform 3".to_string());
    bus.real_time_info = Some(RealTimeInfo {
        status: RouteStatus::OnTime,
        delay_minutes: 0,
        crowding_level: CrowdingLevel::Medium,
        next_departure: hhmm(5),
        platform: "Platform 3".to_string(),
        available: true,
    });

    let mut train = TransitRoute::new(
        "A",
        "Train Line A",
        TransportType::Train,
        destination,
        hhmm(8),
        hhmm(18),
        "10 minutes",
    );
    train.cost = Some("$3.75".to_string());
    train.platform = Some("Platform 1".to_string());
    train.status = RouteStatus::Delayed;
    train.real_time_info = Some(RealTimeInfo {
        status: RouteStatus::Delayed,
        delay_minutes: 3,
        crowding_level: CrowdingLevel::Low,
        next_departure: hhmm(8),
        platform: "Platform 1".to_string(),
        available: true,
    });

    let mut subway = TransitRoute::new(
        "1",
        "Subway Line 1",
        TransportType::Subway,
        destination,
        hhmm(2),
        hhmm(22),
        "20 minutes",
    );
    subway.cost = Some("$2.00".to_string());
    subway.platform = Some("Platform 2".to_string());
    subway.real_time_info = Some(RealTimeInfo {
        status: RouteStatus::OnTime,
        delay_minutes: 0,
        crowding_level: CrowdingLevel::High,
        next_departure: hhmm(2),
        platform: "Platform 2".to_string(),
        available: true,
    });

    vec![bus, train, subway]
}
