//! Geocoding collaborator.
//!
//! Resolves free-text place names to coordinates. Misses and failures
//! are reported as absence at the public boundary, never as errors;
//! the underlying `Result` is only visible to tests and diagnostics.

mod client;
mod error;

pub use client::{GeocodeClient, GeocodeConfig};
pub use error::GeocodeError;
