//! Domain types for the transit route finder.
//!
//! This module contains the core value types that flow through the
//! route pipeline. A `TransitRoute` is created by the directions
//! adapter, enriched once with real-time data, ranked, and returned
//! to the caller; nothing here is persisted.

mod location;
mod route;
mod transport_type;

pub use location::Location;
pub use route::{CrowdingLevel, RealTimeInfo, RouteStatus, TransitRoute};
pub use transport_type::TransportType;
