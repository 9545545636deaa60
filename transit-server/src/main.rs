use std::net::SocketAddr;

use tracing::warn;
use tracing_subscriber::EnvFilter;

use transit_server::directions::{DirectionsClient, DirectionsConfig};
use transit_server::finder::{FinderConfig, RouteFinder};
use transit_server::geocode::{GeocodeClient, GeocodeConfig};
use transit_server::realtime::SimulatedRealTime;
use transit_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Missing credential is not an error: the finder serves mock data
    let directions = match std::env::var("GOOGLE_MAPS_API_KEY") {
        Ok(key) if !key.is_empty() => {
            let config = DirectionsConfig::new(key);
            Some(DirectionsClient::new(config).expect("Failed to create directions client"))
        }
        _ => {
            warn!("GOOGLE_MAPS_API_KEY not set; serving mock route data");
            None
        }
    };

    let finder = RouteFinder::new(directions, SimulatedRealTime, FinderConfig::default());

    let geocoder =
        GeocodeClient::new(GeocodeConfig::new()).expect("Failed to create geocoding client");

    // Build app state
    let state = AppState::new(finder, geocoder);

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Transit route finder listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET /health   - Health check");
    println!("  GET /routes   - Find routes (origin, destination, transport_types, prefer_cheaper)");
    println!("  GET /geocode  - Geocode a place name (q)");
    println!("  GET /stops    - Nearby stops (latitude, longitude, radius_km)");
    println!("  GET /alerts   - Service alerts (city)");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
