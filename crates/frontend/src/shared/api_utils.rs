//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Get the base URL for API requests
///
/// The backend serves both the admin pages and the API, so requests go to
/// the same origin the page was loaded from.
///
/// # Returns
/// - API base URL like "http://localhost:5000" or "https://example.com"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location.host().unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}", protocol, host)
}

/// Build a full API URL from a path
///
/// # Example
/// ```no_run
/// let url = frontend::shared::api_utils::api_url("/delete_tab");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
