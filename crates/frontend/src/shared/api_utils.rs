//! API utilities for frontend-backend communication
//!
//! Resolves the API root that every report and CMS URL is built on.

use crate::shared::config::ApiConfig;

/// Get the base URL for API requests
///
/// An explicit `base_url` from the configuration wins. Otherwise the URL is
/// derived from the current window location on the configured port.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://api.example.com"
/// - Empty string if neither a configured URL nor a window is available
pub fn api_base(config: &ApiConfig) -> String {
    if !config.base_url.trim().is_empty() {
        return resolve_api_base(&config.base_url, "", "", config.port);
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
    resolve_api_base("", &protocol, &hostname, config.port)
}

/// Pure part of [`api_base`].
pub fn resolve_api_base(base_url: &str, protocol: &str, hostname: &str, port: u16) -> String {
    let base_url = base_url.trim();
    if !base_url.is_empty() {
        return base_url.trim_end_matches('/').to_string();
    }
    format!("{}//{}:{}", protocol, hostname, port)
}

/// Build a full URL for a same-origin auth route (`/api/auth/...`).
///
/// Session routes are served by the page host, not by the report API.
pub fn auth_url(path: &str) -> String {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    format!("{}{}", origin, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_base_wins_and_loses_trailing_slash() {
        assert_eq!(
            resolve_api_base("https://api.example.com/v1/", "http:", "localhost", 3000),
            "https://api.example.com/v1"
        );
    }

    #[test]
    fn derived_from_location() {
        assert_eq!(
            resolve_api_base("", "https:", "dash.example.com", 3000),
            "https://dash.example.com:3000"
        );
    }
}
