//! In-memory bearer token cache with single-flight refresh.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::Result;

use super::clock::Clock;
use super::token::{TokenResponse, TokenState, TokenStatus};

/// Holds the one cached token and serialises refreshes.
///
/// Reads and resets go through a plain mutex and never wait on I/O. A
/// separate async lock is held for the whole grant request, so concurrent
/// callers that miss the cache queue behind the first refresh and then reuse
/// its token.
#[derive(Debug)]
pub struct TokenCache {
    state: Mutex<TokenState>,
    refresh: tokio::sync::Mutex<()>,
    clock: Arc<dyn Clock>,
}

impl TokenCache {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            state: Mutex::new(TokenState::default()),
            refresh: tokio::sync::Mutex::new(()),
            clock,
        }
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    /// Cached token if still valid, without touching the network.
    pub fn cached(&self) -> Option<String> {
        let now = self.clock.now();
        self.lock_state().valid_token(now).map(str::to_owned)
    }

    /// Return the cached token, or run `grant` and cache what it returns.
    ///
    /// On error nothing is written; the cache keeps whatever it held.
    pub async fn get_or_refresh<F, Fut>(&self, grant: F) -> Result<String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<TokenResponse>>,
    {
        if let Some(token) = self.cached() {
            tracing::trace!("access token cache hit");
            return Ok(token);
        }

        let _refreshing = self.refresh.lock().await;

        // Another caller may have refreshed while we waited.
        if let Some(token) = self.cached() {
            tracing::debug!("access token refreshed by concurrent caller");
            return Ok(token);
        }

        tracing::debug!("access token missing or expired, requesting grant");
        let response = grant().await?;
        let expires_at = response.expires_at(self.clock.now());
        let token = response.access_token;
        self.lock_state().store(token.clone(), expires_at);
        tracing::info!(
            expires_in = response.expires_in,
            %expires_at,
            "access token acquired"
        );
        Ok(token)
    }

    /// Forget the token entirely.
    pub fn reset(&self) {
        self.lock_state().clear();
        tracing::debug!("access token reset");
    }

    /// Keep the token but mark it expired.
    pub fn force_expiration(&self) {
        let now = self.clock.now();
        self.lock_state().expire(now);
        tracing::debug!("access token marked expired");
    }

    pub fn status(&self) -> TokenStatus {
        let now = self.clock.now();
        self.lock_state().status(now)
    }

    pub fn snapshot(&self) -> TokenState {
        self.lock_state().clone()
    }

    fn lock_state(&self) -> MutexGuard<'_, TokenState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
