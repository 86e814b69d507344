//! HTTP client construction, bearer headers, and status mapping.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};

use crate::error::{Result, SwiftyError};

/// Build the reqwest client owned by a [`TokenedClient`](super::TokenedClient).
pub fn build_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .pool_max_idle_per_host(4)
        .build()
        .map_err(SwiftyError::from)
}

/// Default headers for a Bearer-token API call.
pub fn bearer_headers(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if let Ok(val) = HeaderValue::from_str(&format!("Bearer {token}")) {
        headers.insert(AUTHORIZATION, val);
    }
    headers
}

/// Map a non-success resource status to a typed error.
///
/// A 401 is reported as-is; the caller decides whether to reset the token.
pub fn status_to_error(status: u16, body: &str) -> SwiftyError {
    match status {
        404 => SwiftyError::NotFound(non_empty_or(body, "resource not found")),
        401 => SwiftyError::authentication(401, non_empty_or(body, "authentication failed")),
        500..=u16::MAX => SwiftyError::Server {
            status,
            message: non_empty_or(body, "server error, please try again later"),
        },
        _ => SwiftyError::Request {
            status,
            message: non_empty_or(body, "API request failed"),
        },
    }
}

fn non_empty_or(body: &str, fallback: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}
