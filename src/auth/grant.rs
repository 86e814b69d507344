//! OAuth2 client-credentials grant.

use crate::config::Credentials;
use crate::error::{Result, SwiftyError};

use super::token::TokenResponse;

/// Issues client-credentials grants against `{auth_url}/token`.
#[derive(Debug, Clone)]
pub struct ClientCredentialsGrant {
    token_url: String,
}

impl ClientCredentialsGrant {
    pub fn new(auth_url: &str) -> Self {
        Self {
            token_url: format!("{}/token", auth_url.trim_end_matches('/')),
        }
    }

    pub fn token_url(&self) -> &str {
        &self.token_url
    }

    /// POST the grant and decode the token body.
    ///
    /// Any non-success status becomes [`SwiftyError::Authentication`] carrying
    /// the status code and raw response body.
    pub async fn request(
        &self,
        http: &reqwest::Client,
        credentials: &Credentials,
    ) -> Result<TokenResponse> {
        let resp = http
            .post(&self.token_url)
            .header("Accept", "application/json")
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", credentials.client_id()),
                ("client_secret", credentials.client_secret()),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "token grant rejected");
            return Err(SwiftyError::authentication(
                status.as_u16(),
                format!("failed to get access token: {body}"),
            ));
        }

        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
