//! Client configuration (explicit builder, or environment with `.env` support).

pub mod credentials;

pub use credentials::Credentials;

use std::time::Duration;

use bon::Builder;

use crate::error::{Result, SwiftyError};

/// Default REST API root.
pub const DEFAULT_BASE_URL: &str = "https://api.intra.42.fr/v2";
/// Default OAuth root; `/token` and `/token/info` hang off it.
pub const DEFAULT_AUTH_URL: &str = "https://api.intra.42.fr/oauth";
/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything a [`TokenedClient`](crate::client::TokenedClient) needs at construction.
///
/// # Example
/// ```
/// use swifty::config::{ClientConfig, Credentials};
///
/// let config = ClientConfig::builder()
///     .credentials(Credentials::new("uid", "secret"))
///     .base_url("http://localhost:8080/v2")
///     .build();
/// assert_eq!(config.auth_url, swifty::config::DEFAULT_AUTH_URL);
/// ```
#[derive(Debug, Clone, Builder)]
pub struct ClientConfig {
    pub credentials: Credentials,
    #[builder(into, default = DEFAULT_BASE_URL.to_string())]
    pub base_url: String,
    #[builder(into, default = DEFAULT_AUTH_URL.to_string())]
    pub auth_url: String,
    #[builder(default = DEFAULT_TIMEOUT)]
    pub timeout: Duration,
}

impl ClientConfig {
    /// Load from environment variables, reading `.env` first if present.
    ///
    /// `CLIENT_ID` / `CLIENT_SECRET` may be absent; the client then reports
    /// itself unconfigured instead of failing here.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let credentials = Credentials::new(
            lookup("CLIENT_ID").unwrap_or_default(),
            lookup("CLIENT_SECRET").unwrap_or_default(),
        );

        let timeout = match non_empty("API_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    SwiftyError::Configuration(format!(
                        "API_TIMEOUT_SECS must be a whole number of seconds, got '{raw}'"
                    ))
                })?;
                if secs == 0 {
                    return Err(SwiftyError::Configuration(
                        "API_TIMEOUT_SECS must be greater than zero".to_string(),
                    ));
                }
                Duration::from_secs(secs)
            }
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            credentials,
            base_url: non_empty("API_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            auth_url: non_empty("API_AUTH_URL").unwrap_or_else(|| DEFAULT_AUTH_URL.to_string()),
            timeout,
        })
    }
}
