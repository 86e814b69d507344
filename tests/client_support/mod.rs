#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use swifty::auth::ManualClock;
use swifty::client::TokenedClient;
use swifty::config::{ClientConfig, Credentials};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub const CLIENT_ID: &str = "uid-test";
pub const CLIENT_SECRET: &str = "secret-test";

pub fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::builder()
        .credentials(Credentials::new(CLIENT_ID, CLIENT_SECRET))
        .base_url(format!("{}/v2", server.uri()))
        .auth_url(format!("{}/oauth", server.uri()))
        .timeout(Duration::from_secs(5))
        .build()
}

pub fn client_for(server: &MockServer) -> (Arc<ManualClock>, TokenedClient) {
    client_with_config(config_for(server))
}

pub fn client_with_config(config: ClientConfig) -> (Arc<ManualClock>, TokenedClient) {
    let clock = Arc::new(ManualClock::default());
    let client = TokenedClient::with_clock(config, clock.clone()).expect("build client");
    (clock, client)
}

pub fn token_body(access_token: &str, expires_in: i64) -> serde_json::Value {
    json!({
        "access_token": access_token,
        "token_type": "bearer",
        "expires_in": expires_in,
        "scope": "public",
        "created_at": 1_700_000_000
    })
}

pub fn user_body(login: &str) -> serde_json::Value {
    json!({
        "id": 1,
        "login": login,
        "email": format!("{login}@student.42.fr"),
        "displayname": login.to_uppercase(),
        "wallet": 10,
        "correction_point": 3,
        "campus": [{ "id": 1, "name": "Paris" }],
        "cursus_users": [],
        "projects_users": []
    })
}

/// Mount a grant endpoint answering `access_token` for a single call.
pub async fn mount_grant_once(server: &MockServer, access_token: &str, expires_in: i64) {
    let body = token_body(access_token, expires_in);
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .up_to_n_times(1)
        .mount(server)
        .await;
}

pub async fn grant_requests(server: &MockServer) -> Vec<Request> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|r| r.url.path() == "/oauth/token")
        .collect()
}

pub async fn resource_requests(server: &MockServer) -> Vec<Request> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|r| r.url.path().starts_with("/v2/"))
        .collect()
}
