//! Unified error classification and recovery.

use serde::Serialize;

/// Broad error category for routing recovery logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    Configuration,
    Authentication,
    NotFound,
    Server,
    Validation,
    Request,
    Timeout,
    Network,
    Serialization,
}

/// Suggested recovery action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoverySuggestion {
    /// Transient; the caller may retry later.
    RetryWithBackoff,
    /// Credentials or URLs are wrong or missing.
    CheckConfiguration,
    /// Drop the cached token and retry once.
    ResetTokenAndRetry,
    /// The request input itself is wrong.
    CheckInput,
    IncreaseTimeout,
    ContactSupport,
}

/// What a person looking at the screen should be told.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserFacingError {
    NetworkUnreachable,
    NotFound,
    Generic,
}
