//! API utilities for frontend-backend communication
//!
//! The API is served from the same origin as the frontend.

/// Origin of the current page, e.g. "https://inventory.example.com"
///
/// Empty string if window is not available, which keeps paths relative.
pub fn api_base() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Join a base and a path with exactly one slash between them
pub fn join_url(base: &str, path: &str) -> String {
    if base.is_empty() {
        return path.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/part/");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}
