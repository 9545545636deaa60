//! Conversion from directions DTOs to domain routes.

use crate::domain::{TransitRoute, TransportType};

use super::types::{DirectionsResponse, StepDto, TextValue};

/// Extract transit routes from a successful directions response.
///
/// Walks every alternative route, every leg, every step, and produces
/// one `TransitRoute` per step whose travel mode is `TRANSIT`. A single
/// upstream route may therefore yield zero, one, or several records;
/// no deduplication is performed.
///
/// Fields the provider omitted become "Unknown" (or "Unknown Route" for
/// the line name). The upstream schema carries no fare or live-status
/// data at this point, so `cost` stays unset and `status` stays On Time.
pub fn convert_directions(response: &DirectionsResponse) -> Vec<TransitRoute> {
    let mut routes = Vec::new();

    for route in &response.routes {
        for leg in &route.legs {
            for step in &leg.steps {
                if step.travel_mode.as_deref() == Some("TRANSIT") {
                    routes.push(convert_step(step));
                }
            }
        }
    }

    routes
}

fn convert_step(step: &StepDto) -> TransitRoute {
    let details = step.transit_details.as_ref();
    let line = details.and_then(|d| d.line.as_ref());

    let vehicle_type = line
        .and_then(|l| l.vehicle.as_ref())
        .and_then(|v| v.vehicle_type.as_deref())
        .unwrap_or("");

    let mut record = TransitRoute::new(
        line.and_then(|l| l.short_name.clone())
            .unwrap_or_else(|| "Unknown".to_string()),
        line.and_then(|l| l.name.clone())
            .unwrap_or_else(|| "Unknown Route".to_string()),
        TransportType::classify(vehicle_type),
        details
            .and_then(|d| d.headsign.clone())
            .unwrap_or_else(|| "Unknown".to_string()),
        text_or_unknown(details.and_then(|d| d.departure_time.as_ref())),
        text_or_unknown(details.and_then(|d| d.arrival_time.as_ref())),
        text_or_unknown(step.duration.as_ref()),
    );

    record.platform = Some(
        details
            .and_then(|d| d.departure_stop.as_ref())
            .and_then(|s| s.name.clone())
            .unwrap_or_else(|| "Unknown".to_string()),
    );

    record
}

fn text_or_unknown(value: Option<&TextValue>) -> String {
    value
        .and_then(|v| v.text.clone())
        .unwrap_or_else(|| "Unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RouteStatus;

    fn parse(json: &str) -> DirectionsResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn converts_transit_steps_only() {
        let response = parse(
            r#"{
                "status": "OK",
                "routes": [{
                    "legs": [{
                        "steps": [
                            {"travel_mode": "WALKING", "duration": {"text": "4 mins"}},
                            {
                                "travel_mode": "TRANSIT",
                                "duration": {"text": "20 mins"},
                                "transit_details": {
                                    "line": {
                                        "short_name": "101",
                                        "name": "Express Bus 101",
                                        "vehicle": {"type": "BUS"}
                                    },
                                    "headsign": "Downtown",
                                    "departure_time": {"text": "10:05 AM"},
                                    "arrival_time": {"text": "10:25 AM"},
                                    "departure_stop": {"name": "Central Station"}
                                }
                            },
                            {"travel_mode": "WALKING", "duration": {"text": "2 mins"}}
                        ]
                    }]
                }]
            }"#,
        );

        let routes = convert_directions(&response);

        assert_eq!(routes.len(), 1);
        let route = &routes[0];
        assert_eq!(route.route_id, "101");
        assert_eq!(route.route_name, "Express Bus 101");
        assert_eq!(route.transport_type, TransportType::Bus);
        assert_eq!(route.destination, "Downtown");
        assert_eq!(route.departure_time, "10:05 AM");
        assert_eq!(route.arrival_time, "10:25 AM");
        assert_eq!(route.duration, "20 mins");
        assert_eq!(route.platform.as_deref(), Some("Central Station"));
        assert_eq!(route.cost, None);
        assert_eq!(route.status, RouteStatus::OnTime);
        assert!(route.real_time_info.is_none());
    }

    #[test]
    fn missing_fields_become_unknown() {
        let response = parse(
            r#"{
                "status": "OK",
                "routes": [{
                    "legs": [{
                        "steps": [{"travel_mode": "TRANSIT"}]
                    }]
                }]
            }"#,
        );

        let routes = convert_directions(&response);

        assert_eq!(routes.len(), 1);
        let route = &routes[0];
        assert_eq!(route.route_id, "Unknown");
        assert_eq!(route.route_name, "Unknown Route");
        assert_eq!(route.transport_type, TransportType::Unknown);
        assert_eq!(route.destination, "Unknown");
        assert_eq!(route.departure_time, "Unknown");
        assert_eq!(route.arrival_time, "Unknown");
        assert_eq!(route.duration, "Unknown");
        assert_eq!(route.platform.as_deref(), Some("Unknown"));
    }

    #[test]
    fn multiple_alternatives_and_legs_all_contribute() {
        let transit_step = r#"{
            "travel_mode": "TRANSIT",
            "transit_details": {
                "line": {"short_name": "1", "vehicle": {"type": "SUBWAY"}}
            }
        }"#;
        let json = format!(
            r#"{{
                "status": "OK",
                "routes": [
                    {{"legs": [{{"steps": [{s}, {s}]}}, {{"steps": [{s}]}}]}},
                    {{"legs": [{{"steps": [{s}]}}]}}
                ]
            }}"#,
            s = transit_step
        );

        let routes = convert_directions(&parse(&json));

        // One per transit step across all legs and alternatives, no dedup
        assert_eq!(routes.len(), 4);
        assert!(
            routes
                .iter()
                .all(|r| r.transport_type == TransportType::Subway)
        );
    }

    #[test]
    fn empty_routes_convert_to_empty_list() {
        let response = parse(r#"{"status": "OK", "routes": []}"#);
        assert!(convert_directions(&response).is_empty());
    }
}
