//! Swifty: 42 intranet profile lookup.
//!
//! The heart of the crate is [`client::TokenedClient`], an API client that
//! acquires an OAuth bearer token with the client-credentials grant, caches it
//! in memory, and refreshes it transparently once it expires. Profiles come
//! back as lenient [`models::User`] values; [`format`] holds the helpers used
//! to turn them into identity, skills and project cards.
//!
//! # Quick Start
//!
//! ```no_run
//! use swifty::prelude::*;
//!
//! # async fn example() -> swifty::error::Result<()> {
//! let client = TokenedClient::new(ClientConfig::from_env()?)?;
//! let user = client.get_user_details("mmourdal").await?;
//! println!("{} ({})", user.display_name(), user.login);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod prelude;
pub mod util;

#[cfg(feature = "cli")]
pub mod cli;
