//! Route scoring and ordering.

use std::cmp::Ordering;

use crate::domain::TransitRoute;

use super::parse::{parse_cost_amount, parse_leading_minutes};
use super::preferences::RoutePreferences;

/// Flat bonus for a route of a preferred transport category.
const TRANSPORT_TYPE_BONUS: f64 = 10.0;

/// Weight applied to the cost amount when cost scoring is enabled.
const COST_WEIGHT: f64 = 0.1;

/// Score a route against preferences; higher is better.
///
/// Three terms, each skipped silently when its input is unusable:
/// - minus the duration in minutes (leading token of the duration text)
/// - plus 10 when the transport category is preferred
/// - minus 0.1 x the cost amount, when cost scoring is enabled
///
/// Given the same route and preferences the score is deterministic;
/// randomness lives in the real-time overlay, never here.
pub fn route_score(route: &TransitRoute, preferences: &RoutePreferences) -> f64 {
    let mut score = 0.0;

    if let Some(minutes) = parse_leading_minutes(&route.duration) {
        score -= minutes as f64;
    }

    if preferences.transport_types.contains(&route.transport_type) {
        score += TRANSPORT_TYPE_BONUS;
    }

    if preferences.prefer_cheaper {
        if let Some(amount) = route.cost.as_deref().and_then(parse_cost_amount) {
            score -= amount * COST_WEIGHT;
        }
    }

    score
}

/// Order routes best-first according to preferences.
///
/// A total reordering: no routes are dropped. The sort is stable, so
/// routes with equal scores keep their relative input order.
pub fn rank_routes(routes: Vec<TransitRoute>, preferences: &RoutePreferences) -> Vec<TransitRoute> {
    let mut scored: Vec<(f64, TransitRoute)> = routes
        .into_iter()
        .map(|route| (route_score(&route, preferences), route))
        .collect();

    // Descending by score; sort_by is stable
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

    scored.into_iter().map(|(_, route)| route).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransportType;

    fn route(
        id: &str,
        transport_type: TransportType,
        duration: &str,
        cost: Option<&str>,
    ) -> TransitRoute {
        let mut r = TransitRoute::new(
            id,
            format!("Line {id}"),
            transport_type,
            "Downtown",
            "10:05",
            "10:25",
            duration,
        );
        r.cost = cost.map(str::to_string);
        r
    }

    #[test]
    fn preferred_cheap_train_outranks_bus() {
        let prefs = RoutePreferences::new()
            .with_transport_type(TransportType::Train)
            .with_prefer_cheaper();

        let train = route("A", TransportType::Train, "10 minutes", Some("$2.00"));
        let bus = route("101", TransportType::Bus, "20 minutes", Some("$2.50"));

        // -10 + 10 - 0.2 = -0.2
        assert!((route_score(&train, &prefs) - (-0.2)).abs() < 1e-9);
        // -20 - 0.25 = -20.25
        assert!((route_score(&bus, &prefs) - (-20.25)).abs() < 1e-9);

        let ranked = rank_routes(vec![bus.clone(), train.clone()], &prefs);
        assert_eq!(ranked[0].route_id, "A");
        assert_eq!(ranked[1].route_id, "101");
    }

    #[test]
    fn unparseable_duration_skips_that_term() {
        let prefs = RoutePreferences::new();

        let parseable = route("1", TransportType::Bus, "20 minutes", None);
        let opaque = route("2", TransportType::Bus, "Unknown", None);

        assert_eq!(route_score(&parseable, &prefs), -20.0);
        assert_eq!(route_score(&opaque, &prefs), 0.0);
    }

    #[test]
    fn cost_term_requires_the_preference_flag() {
        let without = RoutePreferences::new();
        let with = RoutePreferences::new().with_prefer_cheaper();

        let r = route("1", TransportType::Bus, "Unknown", Some("$5.00"));

        assert_eq!(route_score(&r, &without), 0.0);
        assert_eq!(route_score(&r, &with), -0.5);
    }

    #[test]
    fn unparseable_cost_skips_that_term() {
        let prefs = RoutePreferences::new().with_prefer_cheaper();
        let r = route("1", TransportType::Bus, "Unknown", Some("varies"));

        assert_eq!(route_score(&r, &prefs), 0.0);
    }

    #[test]
    fn ties_keep_input_order() {
        let prefs = RoutePreferences::new();

        // Identical scores, distinct ids
        let first = route("first", TransportType::Bus, "15 minutes", None);
        let second = route("second", TransportType::Tram, "15 minutes", None);
        let third = route("third", TransportType::Subway, "15 minutes", None);

        let ranked = rank_routes(vec![first, second, third], &prefs);

        assert_eq!(ranked[0].route_id, "first");
        assert_eq!(ranked[1].route_id, "second");
        assert_eq!(ranked[2].route_id, "third");
    }

    #[test]
    fn ranking_is_idempotent() {
        let prefs = RoutePreferences::new()
            .with_transport_type(TransportType::Subway)
            .with_prefer_cheaper();

        let routes = vec![
            route("101", TransportType::Bus, "20 minutes", Some("$2.50")),
            route("A", TransportType::Train, "10 minutes", Some("$3.75")),
            route("1", TransportType::Subway, "20 minutes", Some("$2.00")),
            route("X", TransportType::Unknown, "Unknown", None),
        ];

        let once = rank_routes(routes, &prefs);
        let twice = rank_routes(once.clone(), &prefs);

        assert_eq!(once, twice);
    }

    #[test]
    fn empty_input() {
        assert!(rank_routes(vec![], &RoutePreferences::new()).is_empty());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::TransportType;
    use proptest::prelude::*;

    fn transport_type_strategy() -> impl Strategy<Value = TransportType> {
        prop::sample::select(vec![
            TransportType::Bus,
            TransportType::Train,
            TransportType::Subway,
            TransportType::Tram,
            TransportType::Unknown,
        ])
    }

    fn duration_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            (1u32..180).prop_map(|m| format!("{m} minutes")),
            (1u32..180).prop_map(|m| format!("{m} mins")),
            Just("Unknown".to_string()),
            Just("about an hour".to_string()),
        ]
    }

    fn cost_strategy() -> impl Strategy<Value = Option<String>> {
        prop_oneof![
            Just(None),
            (0u32..5000).prop_map(|cents| Some(format!("${}.{:02}", cents / 100, cents % 100))),
            Just(Some("varies".to_string())),
        ]
    }

    fn route_strategy() -> impl Strategy<Value = TransitRoute> {
        (
            0u32..100,
            transport_type_strategy(),
            duration_strategy(),
            cost_strategy(),
        )
            .prop_map(|(id, transport_type, duration, cost)| {
                let mut r = TransitRoute::new(
                    format!("R{id}"),
                    format!("Route {id}"),
                    transport_type,
                    "Downtown",
                    "10:00",
                    "10:30",
                    duration,
                );
                r.cost = cost;
                r
            })
    }

    fn preferences_strategy() -> impl Strategy<Value = RoutePreferences> {
        (
            prop::collection::hash_set(transport_type_strategy(), 0..3),
            any::<bool>(),
        )
            .prop_map(|(transport_types, prefer_cheaper)| RoutePreferences {
                transport_types,
                prefer_cheaper,
            })
    }

    proptest! {
        #[test]
        fn rank_preserves_elements(
            routes in prop::collection::vec(route_strategy(), 0..12),
            prefs in preferences_strategy(),
        ) {
            let original_len = routes.len();
            let mut original_ids: Vec<String> =
                routes.iter().map(|r| r.route_id.clone()).collect();

            let ranked = rank_routes(routes, &prefs);

            prop_assert_eq!(ranked.len(), original_len);

            let mut ranked_ids: Vec<String> =
                ranked.iter().map(|r| r.route_id.clone()).collect();
            original_ids.sort();
            ranked_ids.sort();
            prop_assert_eq!(ranked_ids, original_ids);
        }

        #[test]
        fn rank_orders_by_descending_score(
            routes in prop::collection::vec(route_strategy(), 0..12),
            prefs in preferences_strategy(),
        ) {
            let ranked = rank_routes(routes, &prefs);

            for window in ranked.windows(2) {
                prop_assert!(
                    route_score(&window[0], &prefs) >= route_score(&window[1], &prefs),
                    "not sorted best-first"
                );
            }
        }

        #[test]
        fn rank_is_idempotent(
            routes in prop::collection::vec(route_strategy(), 0..12),
            prefs in preferences_strategy(),
        ) {
            let once = rank_routes(routes, &prefs);
            let twice = rank_routes(once.clone(), &prefs);

            prop_assert_eq!(once, twice);
        }
    }
}
