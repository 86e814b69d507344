//! OAuth client-credentials grant and in-memory token caching.

pub mod cache;
pub mod clock;
pub mod grant;
pub mod token;

pub use cache::TokenCache;
pub use clock::{Clock, ManualClock, SystemClock};
pub use grant::ClientCredentialsGrant;
pub use token::{TokenInfo, TokenResponse, TokenState, TokenStatus, EXPIRY_SAFETY_BUFFER};
