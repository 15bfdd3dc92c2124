//! HTTP helper functions for Crux Core
//!
//! This module extracts common HTTP response handling logic from macros
//! into debuggable, testable functions.

use crux_http::Response;

/// Base URL for backend API endpoints.
///
/// NOTE: This is a dummy prefix required because `crux_http` requires
/// absolute URLs and rejects relative paths (`RelativeUrlWithoutBase` error).
/// The UI shell strips this prefix before sending requests via `fetch()`,
/// making them relative to the origin that served the page.
pub const BASE_URL: &str = "https://relative";

/// Constructs the full address from a given endpoint.
///
/// # Example
/// ```
/// use wifi_connector_core::http_helpers::build_url;
/// let url = build_url("/suggest-password");
/// assert_eq!(url, "https://relative/suggest-password");
/// ```
pub fn build_url(endpoint: &str) -> String {
    format!("{BASE_URL}{endpoint}")
}

/// Returns `true` if the response status is 2xx.
pub fn is_response_success(response: &Response<Vec<u8>>) -> bool {
    response.status().is_success()
}

/// Extracts error message from HTTP response.
pub fn extract_error_message(action: &str, response: &mut Response<Vec<u8>>) -> String {
    let status = response.status().to_string();

    match response.take_body() {
        Some(body) if body.is_empty() => format!("{action} failed: HTTP {status} (Empty body)"),
        Some(body) => match String::from_utf8(body) {
            Ok(msg) => format!("{action} failed: HTTP {status}: {msg}"),
            Err(e) => format!("{action} failed: HTTP {status} (Invalid UTF-8: {e})"),
        },
        None => format!("{action} failed: HTTP {status} (No body)"),
    }
}

/// Parse JSON from response body.
///
/// Returns error if response is not successful or JSON parsing fails.
pub fn parse_json_response<T: serde::de::DeserializeOwned>(
    action: &str,
    response: &mut Response<Vec<u8>>,
) -> Result<T, String> {
    if !is_response_success(response) {
        return Err(extract_error_message(action, response));
    }

    match response.take_body() {
        Some(body) => {
            serde_json::from_slice(&body).map_err(|e| format!("{action}: JSON parse error: {e}"))
        }
        None => Err(format!("{action}: Empty response body")),
    }
}

/// Process HTTP response result and parse JSON
pub fn process_json_response<T: serde::de::DeserializeOwned>(
    action: &str,
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<T, String> {
    match result {
        Ok(mut response) => parse_json_response(action, &mut response),
        Err(e) => Err(format!("{action} failed: {e}")),
    }
}

// Note: Unit tests for these helpers are not included because crux_http::Response
// has a private constructor. They are exercised through the suggestion handler.
