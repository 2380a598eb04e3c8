//! API utilities for talking to the inventory API
//!
//! Provides URL helpers, the error type shared by all `api` modules and a
//! typed JSON GET.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failure of a read request against the inventory API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server responded with HTTP {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Get the API base URL from the current window location
///
/// Uses the page's protocol and hostname with the given backend port.
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available
pub fn api_base_from_location(port: u16) -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, port)
}

/// Build a full API URL from a base and a path starting with "/api/"
///
/// # Example
/// ```rust,ignore
/// let url = api_url("http://localhost:3000/", "/api/warehouses");
/// assert_eq!(url, "http://localhost:3000/api/warehouses");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// GET a JSON document and decode it
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    log::debug!("GET {}", url);

    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_joins_without_double_slash() {
        assert_eq!(
            api_url("http://localhost:3000/", "/api/warehouses"),
            "http://localhost:3000/api/warehouses"
        );
        assert_eq!(api_url("", "/api/packages"), "/api/packages");
    }

    #[test]
    fn test_error_messages_include_cause() {
        assert_eq!(ApiError::Status(502).to_string(), "Server responded with HTTP 502");
        assert_eq!(
            ApiError::Network("connection refused".into()).to_string(),
            "Network error: connection refused"
        );
    }
}
