//! Geocoding client error types.

/// Errors from the geocoding HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// JSON deserialization failed
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// The geocoder rejected the configured user agent or parameters
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
