//! Map deep-link generation.

/// Fixed tail of the directions URL selecting the transit layer.
const DIRECTIONS_LINK_SUFFIX: &str = "data=!3m1!4b1!4m2!4m1!3e3";

/// Build a map-application directions link for an origin/destination pair.
///
/// Both place strings are percent-encoded so addresses with spaces and
/// punctuation still produce a valid URL.
pub fn directions_link(origin: &str, destination: &str) -> String {
    format!(
        "https://www.google.com/maps/dir/{}/{}/{}",
        urlencoding::encode(origin),
        urlencoding::encode(destination),
        DIRECTIONS_LINK_SUFFIX
    )
}
