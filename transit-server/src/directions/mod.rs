//! Upstream directions provider client.
//!
//! This module adapts a third-party directions API into the domain's
//! `TransitRoute` shape. Key characteristics of the upstream schema:
//! - A response nests `routes[].legs[].steps[]`; only steps with travel
//!   mode `TRANSIT` carry line/headsign/stop data we can use.
//! - Fields are omitted rather than null, so the DTOs use `Option`
//!   liberally and conversion substitutes "Unknown" defaults.
//! - The payload carries its own `status` field on top of the HTTP
//!   status; both must say success before any routes are extracted.
//!
//! When no API key is configured, or a call fails, callers fall back to
//! the deterministic fixture in [`mock`].

mod client;
mod convert;
mod error;
pub mod mock;
mod types;

pub use client::{DirectionsClient, DirectionsConfig, TravelMode};
pub use convert::convert_directions;
pub use error::DirectionsError;
pub use types::{
    DirectionsResponse, LegDto, LineDto, RouteDto, StepDto, StopDto, TextValue, TransitDetailsDto,
    VehicleDto,
};
