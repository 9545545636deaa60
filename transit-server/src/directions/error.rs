//! Directions client error types.

/// Errors from the directions HTTP client.
///
/// These never reach end users: the route finder maps every variant to
/// the mock-data fallback. They exist so that the failure path is an
/// explicit `Result` branch rather than a swallowed exception, and so
/// tests can assert on the specific failure.
#[derive(Debug, thiserror::Error)]
pub enum DirectionsError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success HTTP status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// The JSON payload reported a non-OK status of its own
    #[error("upstream status {status}: {message}")]
    Upstream { status: String, message: String },

    /// JSON deserialization failed
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
