//! Core error types and traits

use crate::policy::{RequestKind, ViolationReason};
use thiserror::Error;

/// Result type alias for hfguard operations
pub type GuardResult<T> = Result<T, GuardError>;

/// Common accessors shared by hfguard errors.
pub trait UnifiedError: std::error::Error + Send + Sync {
    /// Stable code for programmatic handling
    fn error_code(&self) -> &str;

    /// Internal, diagnostic message. Not safe to show to end users.
    fn message(&self) -> String;

    /// Optional context about where the error occurred
    fn context(&self) -> Option<&str> {
        None
    }

    /// Whether the fallback loop may move on to the next candidate
    fn is_retryable(&self) -> bool {
        false
    }
}

/// Main error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuardError {
    /// Request rejected by the allow-list before any network call.
    /// Fatal for the current operation and never retried.
    #[error("Policy violation: {reason}")]
    PolicyViolation { reason: ViolationReason },

    /// Non-2xx response, network failure or undecodable success payload
    /// from a single candidate model
    #[error("Remote failure from '{model}': {message}")]
    TransientRemote {
        model: String,
        message: String,
        status_code: Option<u16>,
    },

    /// Every candidate model failed transiently
    #[error("Service unavailable: all {attempts} {kind} models failed")]
    ServiceUnavailable { kind: RequestKind, attempts: usize },

    /// Request kind outside the supported enumeration
    #[error("Unsupported request kind: '{kind}'")]
    UnsupportedKind { kind: String },

    /// Caller supplied an unusable argument
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        field: Option<String>,
    },

    /// Configuration load or validation errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// IO errors
    #[error("IO error: {message}")]
    Io { message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {message}")]
    Json { message: String },
}
