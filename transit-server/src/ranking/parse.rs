//! Optional-number parsers for display text.
//!
//! Duration and cost arrive as provider display strings, not numbers.
//! These parsers return `None` rather than erroring, and the scorer
//! skips the corresponding term when a parse fails.

/// Parse the leading integer token of a duration string as minutes.
///
/// "20 minutes" and "20 mins" parse as 20. Text that does not start with
/// a bare integer ("about 20 mins", "Unknown") returns `None` and the
/// duration term is skipped during scoring.
///
/// Known limitation, kept deliberately: the unit is never inspected, so
/// "1 hour 5 mins" parses as 1. Generalizing this would change ranking
/// outcomes for provider-native phrasing.
pub fn parse_leading_minutes(duration: &str) -> Option<i64> {
    duration.split_whitespace().next()?.parse().ok()
}

/// Parse the numeric amount out of a price string.
///
/// Strips the currency symbol and thousands separators, so "$2.50"
/// parses as 2.5 and "$1,200" as 1200.0. Anything left unparseable
/// returns `None`.
pub fn parse_cost_amount(cost: &str) -> Option<f64> {
    cost.replace(['$', ','], "").trim().parse().ok()
}
