//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::error;

use crate::links::directions_link;
use crate::stops::{nearby_stops, service_alerts};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/routes", get(find_routes))
        .route("/geocode", get(geocode))
        .route("/stops", get(stops))
        .route("/alerts", get(alerts))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Find ranked routes between two places.
///
/// Never fails on upstream trouble - the finder degrades to mock data -
/// so the only error here is a malformed request.
async fn find_routes(
    State(state): State<AppState>,
    Query(req): Query<FindRoutesRequest>,
) -> Result<Json<FindRoutesResponse>, AppError> {
    if req.origin.trim().is_empty() || req.destination.trim().is_empty() {
        return Err(AppError::BadRequest {
            message: "origin and destination must be non-empty".to_string(),
        });
    }

    let preferences = req
        .preferences()
        .map_err(|message| AppError::BadRequest { message })?;

    let routes = state
        .finder
        .find(&req.origin, &req.destination, preferences.as_ref())
        .await;

    Ok(Json(FindRoutesResponse {
        routes,
        maps_link: directions_link(&req.origin, &req.destination),
    }))
}

/// Geocode a place name. A miss is a null location, not an error.
async fn geocode(
    State(state): State<AppState>,
    Query(req): Query<GeocodeRequest>,
) -> Result<Json<GeocodeResponse>, AppError> {
    if req.q.trim().is_empty() {
        return Err(AppError::BadRequest {
            message: "q must be non-empty".to_string(),
        });
    }

    let location = state.geocoder.lookup(&req.q).await;

    Ok(Json(GeocodeResponse { location }))
}

/// List stops near a coordinate.
async fn stops(Query(req): Query<NearbyStopsRequest>) -> Json<NearbyStopsResponse> {
    let stops = nearby_stops(req.latitude, req.longitude, req.radius_km.unwrap_or(1.0));
    Json(NearbyStopsResponse { stops })
}

/// List current service alerts.
async fn alerts(Query(req): Query<AlertsRequest>) -> Json<AlertsResponse> {
    let alerts = service_alerts(req.city.as_deref().unwrap_or("default"));
    Json(AlertsResponse { alerts })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        error!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
