//! Transit route finder for tourists.
//!
//! A web application that answers: "how do I get from here to there
//! by public transport, and which option suits me best?"
//!
//! Routes come from an upstream directions provider when an API key is
//! configured, and from a deterministic fixture otherwise, so the whole
//! pipeline (real-time overlay, preference ranking, display) works
//! without live credentials.

pub mod directions;
pub mod domain;
pub mod finder;
pub mod geocode;
pub mod links;
pub mod ranking;
pub mod realtime;
pub mod stops;
pub mod web;
