//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use crate::config::{app_config, ApiConfig};

/// Get the base URL for API requests
///
/// Uses the configured `base_url` when present; otherwise constructs it from
/// the current window location and the configured backend port.
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let api = &app_config().api;
    if let Some(base) = &api.base_url {
        return base.clone();
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
    base_from_location(api, &protocol, &hostname)
}

fn base_from_location(api: &ApiConfig, protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, api.port)
}

/// Join a base URL, a path and query pairs
///
/// # Example
/// ```ignore
/// let url = build_url("http://localhost:3000", "/api/categories", &[]);
/// ```
pub fn build_url(base: &str, path: &str, query: &[(String, String)]) -> String {
    let mut url = format!("{}{}", base.trim_end_matches('/'), path);
    if !query.is_empty() {
        let encoded: Vec<String> = query
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect();
        url.push('?');
        url.push_str(&encoded.join("&"));
    }
    url
}

/// REST path of a collection, e.g. `/api/inquiry-types`
pub fn collection_path(collection: &str) -> String {
    format!("/api/{}", collection)
}

/// REST path of a single record, e.g. `/api/categories/7`
pub fn item_path(collection: &str, id: &str) -> String {
    format!("/api/{}/{}", collection, urlencoding::encode(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_encodes_query() {
        let url = build_url(
            "http://localhost:3000/",
            "/api/projects",
            &[
                ("search".into(), "web app".into()),
                ("page".into(), "2".into()),
            ],
        );
        assert_eq!(url, "http://localhost:3000/api/projects?search=web%20app&page=2");
    }

    #[test]
    fn test_paths() {
        assert_eq!(collection_path("inquiry-types"), "/api/inquiry-types");
        assert_eq!(item_path("categories", "a/b"), "/api/categories/a%2Fb");
    }

    #[test]
    fn test_base_from_location() {
        let api = ApiConfig {
            port: 4000,
            base_url: None,
        };
        assert_eq!(
            base_from_location(&api, "https:", "example.com"),
            "https://example.com:4000"
        );
    }
}
