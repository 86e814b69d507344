//! Convenience re-exports for common use.

pub use crate::auth::{Clock, ManualClock, SystemClock, TokenStatus};
pub use crate::client::TokenedClient;
pub use crate::config::{ClientConfig, Credentials};
pub use crate::error::{Result, SwiftyError, UserFacingError};
pub use crate::models::{CursusUser, ProjectUser, Skill, User};
