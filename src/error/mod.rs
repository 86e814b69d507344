//! Error types for Swifty.

pub mod unified;

pub use unified::{ErrorCategory, RecoverySuggestion, UserFacingError};

use thiserror::Error;

/// Primary error type for all Swifty operations.
#[derive(Error, Debug)]
pub enum SwiftyError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Authentication error{}: {message}", status_suffix(.status))]
    Authentication {
        status: Option<u16>,
        message: String,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Server error (status {status}): {message}")]
    Server { status: u16, message: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Request failed (status {status}): {message}")]
    Request { status: u16, message: String },

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SwiftyError {
    /// Authentication failure that carries the HTTP status and response body.
    pub fn authentication(status: u16, message: impl Into<String>) -> Self {
        Self::Authentication {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Classify this error into a category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Configuration(_) => ErrorCategory::Configuration,
            Self::Authentication { .. } => ErrorCategory::Authentication,
            Self::NotFound(_) => ErrorCategory::NotFound,
            Self::Server { .. } => ErrorCategory::Server,
            Self::Validation(_) => ErrorCategory::Validation,
            Self::Request { .. } => ErrorCategory::Request,
            Self::Timeout(_) => ErrorCategory::Timeout,
            Self::Network(e) if e.is_timeout() => ErrorCategory::Timeout,
            Self::Network(_) => ErrorCategory::Network,
            Self::Serialization(_) => ErrorCategory::Serialization,
        }
    }

    /// Whether this error is potentially retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Network | ErrorCategory::Timeout | ErrorCategory::Server
        )
    }

    /// HTTP status attached to the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Authentication { status, .. } => *status,
            Self::NotFound(_) => Some(404),
            Self::Server { status, .. } | Self::Request { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Suggest recovery actions.
    pub fn recovery_suggestion(&self) -> RecoverySuggestion {
        match self.category() {
            ErrorCategory::Authentication => RecoverySuggestion::ResetTokenAndRetry,
            ErrorCategory::Configuration => RecoverySuggestion::CheckConfiguration,
            ErrorCategory::NotFound | ErrorCategory::Validation => {
                RecoverySuggestion::CheckInput
            }
            ErrorCategory::Network | ErrorCategory::Server => {
                RecoverySuggestion::RetryWithBackoff
            }
            ErrorCategory::Timeout => RecoverySuggestion::IncreaseTimeout,
            ErrorCategory::Request | ErrorCategory::Serialization => {
                RecoverySuggestion::ContactSupport
            }
        }
    }

    /// Bucket used by presentation layers to pick a message.
    pub fn user_facing(&self) -> UserFacingError {
        match self.category() {
            ErrorCategory::Network | ErrorCategory::Timeout => UserFacingError::NetworkUnreachable,
            ErrorCategory::NotFound => UserFacingError::NotFound,
            _ => UserFacingError::Generic,
        }
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (status {s})")).unwrap_or_default()
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, SwiftyError>;
