//! Web layer for the transit route finder.
//!
//! Provides JSON endpoints for finding routes, geocoding place names,
//! and listing nearby stops and service alerts.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
