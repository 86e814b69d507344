//! CLI-specific error formatting for user-facing messages.

use serde::Serialize;

use crate::error::{ErrorCategory, SwiftyError, UserFacingError};

/// Machine-readable failure printed by `--json` commands.
#[derive(Debug, Serialize)]
pub struct ErrorReport {
    pub error: String,
    pub category: ErrorCategory,
    pub retryable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl From<&SwiftyError> for ErrorReport {
    fn from(err: &SwiftyError) -> Self {
        Self {
            error: err.to_string(),
            category: err.category(),
            retryable: err.is_retryable(),
            status: err.status(),
        }
    }
}

/// Map a [`SwiftyError`] to the message shown under the search box.
///
/// `login` is the term the user searched for, when there is one.
pub fn format_error_help(err: &SwiftyError, login: Option<&str>) -> String {
    match err {
        SwiftyError::Configuration(msg) => {
            format!("Configuration error: {msg}. Check your .env file.")
        }
        SwiftyError::Validation(_) => "Please enter a username.".to_string(),
        _ => match (err.user_facing(), login) {
            (UserFacingError::NetworkUnreachable, _) => {
                "Network error. Please check your internet connection and try again.".to_string()
            }
            (UserFacingError::NotFound, Some(login)) => {
                format!("User \"{login}\" not found. Please check the login and try again.")
            }
            (UserFacingError::NotFound, None) => "Not found.".to_string(),
            (UserFacingError::Generic, _) => {
                "Unable to search. Please check your connection and try again.".to_string()
            }
        },
    }
}
