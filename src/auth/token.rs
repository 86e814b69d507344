use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Margin subtracted from the server-reported lifetime so a cached token is
/// dropped before the server starts rejecting it.
pub const EXPIRY_SAFETY_BUFFER: Duration = Duration::seconds(30);

/// Body returned by `POST {auth_url}/token` for a client-credentials grant.
///
/// # Example
/// ```
/// use swifty::auth::TokenResponse;
///
/// let body = r#"{"access_token":"tok1","token_type":"bearer","expires_in":7200,
///                "scope":"public","created_at":1700000000}"#;
/// let token: TokenResponse = serde_json::from_str(body).unwrap();
/// assert_eq!(token.access_token, "tok1");
/// assert_eq!(token.expires_in, 7200);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    pub expires_in: i64,
    #[serde(default)]
    pub scope: String,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_valid_until: Option<i64>,
}

impl TokenResponse {
    /// Instant after which the token must no longer be used.
    ///
    /// Lifetimes outside chrono's range saturate at the representable bounds.
    pub fn expires_at(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let bound = if self.expires_in < 0 {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        };
        Duration::try_seconds(self.expires_in)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .and_then(|at| at.checked_sub_signed(EXPIRY_SAFETY_BUFFER))
            .unwrap_or(bound)
    }
}

/// Body returned by `GET {auth_url}/token/info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    pub resource_owner_id: Option<i64>,
    #[serde(default)]
    pub scopes: Vec<String>,
    pub expires_in_seconds: i64,
    pub application: TokenApplication,
    pub created_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenApplication {
    pub uid: String,
}

/// The single in-memory bearer token and its expiry.
///
/// `token` is only ever set together with `expires_at`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenState {
    token: Option<String>,
    expires_at: Option<DateTime<Utc>>,
}

impl TokenState {
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// Cached token, if `now` is strictly before its expiry.
    pub fn valid_token(&self, now: DateTime<Utc>) -> Option<&str> {
        match (&self.token, self.expires_at) {
            (Some(token), Some(expires_at)) if now < expires_at => Some(token.as_str()),
            _ => None,
        }
    }

    pub(crate) fn store(&mut self, token: String, expires_at: DateTime<Utc>) {
        self.token = Some(token);
        self.expires_at = Some(expires_at);
    }

    pub(crate) fn clear(&mut self) {
        self.token = None;
        self.expires_at = None;
    }

    /// Move expiry into the past, keeping the token value.
    pub(crate) fn expire(&mut self, now: DateTime<Utc>) {
        if self.token.is_some() {
            self.expires_at = Some(now - Duration::seconds(1));
        }
    }

    pub fn status(&self, now: DateTime<Utc>) -> TokenStatus {
        let (is_expired, expires_in_secs) = match self.expires_at {
            Some(expires_at) => (
                now >= expires_at,
                (expires_at - now).num_seconds().max(0),
            ),
            None => (true, 0),
        };
        TokenStatus {
            has_token: self.token.is_some(),
            is_expired,
            expires_in_secs,
        }
    }
}

/// Snapshot of the cache for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TokenStatus {
    pub has_token: bool,
    pub is_expired: bool,
    pub expires_in_secs: i64,
}
