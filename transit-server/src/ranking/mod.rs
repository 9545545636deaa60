//! Preference-based route ranking.
//!
//! Reorders route candidates according to caller preferences. Ranking
//! is a total reordering, never a filter; truncation to the top few
//! results happens later, in the route finder.

mod parse;
mod preferences;
mod rank;

pub use parse::{parse_cost_amount, parse_leading_minutes};
pub use preferences::RoutePreferences;
pub use rank::{rank_routes, route_score};
