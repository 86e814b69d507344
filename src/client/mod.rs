//! Authenticated 42 API client with transparent token refresh.

pub mod http;

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::auth::{
    Clock, ClientCredentialsGrant, SystemClock, TokenCache, TokenInfo, TokenState, TokenStatus,
};
use crate::config::{ClientConfig, Credentials};
use crate::error::{Result, SwiftyError};
use crate::models::User;
use crate::util::timeout::with_timeout;

/// API client that owns one cached bearer token.
///
/// Tokens are obtained with a client-credentials grant and refreshed when
/// they expire, never in reaction to a 401. A resource call that comes back
/// 401 surfaces [`SwiftyError::Authentication`]; callers that want a retry
/// call [`reset_token`](Self::reset_token) first.
///
/// # Example
/// ```no_run
/// use swifty::client::TokenedClient;
/// use swifty::config::ClientConfig;
///
/// # async fn example() -> swifty::error::Result<()> {
/// let client = TokenedClient::new(ClientConfig::from_env()?)?;
/// let user = client.get_user_details("mmourdal").await?;
/// println!("{} has {} wallet points", user.login, user.wallet);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct TokenedClient {
    http: reqwest::Client,
    credentials: Credentials,
    base_url: String,
    auth_url: String,
    grant: ClientCredentialsGrant,
    cache: TokenCache,
    timeout: Duration,
}

impl TokenedClient {
    /// Build a client driven by the system clock.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Build a client whose expiry decisions use `clock`.
    pub fn with_clock(config: ClientConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        let http = http::build_client(config.timeout)?;
        let base_url = config.base_url.trim_end_matches('/').to_string();
        let auth_url = config.auth_url.trim_end_matches('/').to_string();
        Ok(Self {
            http,
            credentials: config.credentials,
            grant: ClientCredentialsGrant::new(&auth_url),
            base_url,
            auth_url,
            cache: TokenCache::new(clock),
            timeout: config.timeout,
        })
    }

    /// Swap in a pre-built reqwest client (proxies, custom TLS, ...).
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn auth_url(&self) -> &str {
        &self.auth_url
    }

    /// Both client id and secret are present.
    pub fn is_configured(&self) -> bool {
        self.credentials.is_complete()
    }

    /// Return a valid bearer token, running a grant if none is cached or it expired.
    pub async fn get_access_token(&self) -> Result<String> {
        if !self.is_configured() {
            return Err(SwiftyError::Configuration(
                "API credentials not configured; set CLIENT_ID and CLIENT_SECRET".to_string(),
            ));
        }
        self.cache
            .get_or_refresh(|| {
                with_timeout(
                    self.timeout,
                    self.grant.request(&self.http, &self.credentials),
                )
            })
            .await
    }

    /// GET `base_url + path` with the bearer token and decode the JSON body.
    pub async fn authenticated_request<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let token = self.get_access_token().await?;
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "authenticated request");
        with_timeout(self.timeout, async {
            let resp = self
                .http
                .get(&url)
                .headers(http::bearer_headers(&token))
                .send()
                .await?;
            let status = resp.status();
            let body = resp.text().await?;
            if !status.is_success() {
                debug!(status = status.as_u16(), %url, "request failed");
                return Err(http::status_to_error(status.as_u16(), &body));
            }
            Ok(serde_json::from_str(&body)?)
        })
        .await
    }

    /// Fetch the full profile for `login`.
    pub async fn get_user_details(&self, login: &str) -> Result<User> {
        let login = login.trim();
        if login.is_empty() {
            return Err(SwiftyError::Validation("login cannot be empty".to_string()));
        }
        self.authenticated_request(&format!("/users/{}", urlencoding::encode(login)))
            .await
    }

    /// Users whose login matches `query`.
    pub async fn search_users(&self, query: &str) -> Result<Vec<User>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SwiftyError::Validation("search query cannot be empty".to_string()));
        }
        self.authenticated_request(&format!("/users?search={}", urlencoding::encode(query)))
            .await
    }

    /// Ask the authorization server about the current token.
    pub async fn token_info(&self) -> Result<TokenInfo> {
        let token = self.get_access_token().await?;
        let url = format!("{}/token/info", self.auth_url);
        with_timeout(self.timeout, async {
            let resp = self
                .http
                .get(&url)
                .headers(http::bearer_headers(&token))
                .send()
                .await?;
            let status = resp.status();
            let body = resp.text().await?;
            if !status.is_success() {
                return Err(SwiftyError::authentication(
                    status.as_u16(),
                    format!("failed to get token info: {body}"),
                ));
            }
            Ok(serde_json::from_str(&body)?)
        })
        .await
    }

    /// Drop the cached token; the next call performs a fresh grant.
    pub fn reset_token(&self) {
        self.cache.reset();
    }

    /// Mark the cached token as expired without dropping it.
    pub fn force_token_expiration(&self) {
        self.cache.force_expiration();
    }

    pub fn token_status(&self) -> TokenStatus {
        self.cache.status()
    }

    pub fn token_state(&self) -> TokenState {
        self.cache.snapshot()
    }
}
