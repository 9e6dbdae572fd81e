//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing Policy API URLs.

use super::config::config;

/// Get the base URL for API requests
///
/// Uses the configured base URL when present, otherwise constructs it from
/// the current window location and the configured API port.
///
/// # Returns
/// - API base URL like "http://localhost:8080"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let api = &config().api;
    if !api.base_url.is_empty() {
        return api.base_url.clone();
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, api.port)
}

/// Build a full API URL from a path and query
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/policy-terms?page=0&size=20");
/// ```
pub fn api_url(path_and_query: &str) -> String {
    format!("{}{}", api_base(), path_and_query)
}
