//! User-facing error messages
//!
//! `GuardError::user_message` is the only text that should cross the
//! boundary to an end user. Policy violations collapse to one generic
//! notice so the allow-list contents and the exact rule that fired stay
//! internal.

use super::classifiers::{classify_config_error, classify_remote_failure};
use super::types::GuardError;

/// Shown for every policy violation, whatever the reason
pub const POLICY_NOTICE: &str = "Request blocked: only authorized Hugging Face models may be used.";

/// Shown when every candidate model failed
pub const UNAVAILABLE_NOTICE: &str = "Hugging Face is unavailable, please try again later.";

/// Shown for anything else
pub const TEMPORARY_NOTICE: &str = "Temporary error. Please try again later.";

/// Error category for user-facing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Allow-list rejection
    Policy,
    /// Configuration issues
    Configuration,
    /// Token rejected by the remote service
    Authentication,
    /// Rate limiting / quota exceeded
    RateLimit,
    /// Network connectivity issues
    Network,
    /// Model responded with an unusable payload
    InvalidResponse,
    /// Invalid caller input
    UserInput,
    /// Model or service not available
    ResourceUnavailable,
    /// Internal errors
    Internal,
}

impl ErrorCategory {
    /// Get a user-friendly category name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Policy => "Security Policy",
            Self::Configuration => "Configuration Error",
            Self::Authentication => "Authentication Error",
            Self::RateLimit => "Rate Limit Exceeded",
            Self::Network => "Network Error",
            Self::InvalidResponse => "Invalid Response",
            Self::UserInput => "Invalid Input",
            Self::ResourceUnavailable => "Resource Unavailable",
            Self::Internal => "Internal Error",
        }
    }
}

/// User-friendly error information
#[derive(Debug, Clone)]
pub struct UserFriendlyError {
    /// The error category
    pub category: ErrorCategory,
    /// Short summary
    pub title: String,
    /// Message safe to display
    pub message: String,
    /// Suggested actions
    pub suggestions: Vec<String>,
    /// Technical error code
    pub error_code: String,
}

impl UserFriendlyError {
    /// Create a new user-friendly error
    pub fn new(
        category: ErrorCategory,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            title: title.into(),
            message: message.into(),
            suggestions: Vec::new(),
            error_code: String::new(),
        }
    }

    /// Add a suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Add multiple suggestions
    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions.extend(suggestions);
        self
    }

    /// Set the technical error code
    pub fn with_error_code(mut self, code: impl Into<String>) -> Self {
        self.error_code = code.into();
        self
    }

    /// Format the error for display
    pub fn format_display(&self) -> String {
        let mut output = format!(
            "{}: {}\n\n{}",
            self.category.display_name(),
            self.title,
            self.message
        );

        if !self.suggestions.is_empty() {
            output.push_str("\n\nSuggested actions:");
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                output.push_str(&format!("\n  {}. {}", i + 1, suggestion));
            }
        }

        output
    }
}

impl GuardError {
    /// Short, user-safe message. Never includes the violation reason.
    pub fn user_message(&self) -> String {
        match self {
            Self::PolicyViolation { .. } => POLICY_NOTICE.to_string(),
            Self::ServiceUnavailable { .. } => UNAVAILABLE_NOTICE.to_string(),
            Self::UnsupportedKind { kind } => {
                format!("Unsupported request kind '{}'. Use 'chat' or 'image'.", kind)
            }
            Self::InvalidInput { message, .. } => format!("Invalid request: {}", message),
            _ => TEMPORARY_NOTICE.to_string(),
        }
    }

    /// Category used to pick an icon or exit code in front ends
    pub fn category(&self) -> ErrorCategory {
        UserFriendlyError::from(self).category
    }
}

impl From<&GuardError> for UserFriendlyError {
    fn from(error: &GuardError) -> Self {
        match error {
            GuardError::PolicyViolation { reason } if reason.is_credential() => {
                UserFriendlyError::new(
                    ErrorCategory::Authentication,
                    "Credential rejected",
                    POLICY_NOTICE,
                )
                .with_suggestion("Set HFGUARD_TOKEN or HF_TOKEN to a Hugging Face token (hf_...)")
                .with_error_code("HFGUARD_POLICY")
            }

            GuardError::PolicyViolation { .. } => {
                UserFriendlyError::new(ErrorCategory::Policy, "Request blocked", POLICY_NOTICE)
                    .with_suggestion("Only the models listed by 'hfguard models' are permitted")
                    .with_error_code("HFGUARD_POLICY")
            }

            GuardError::TransientRemote {
                message,
                status_code,
                ..
            } => {
                let (category, title, suggestions) =
                    classify_remote_failure(message, *status_code);
                UserFriendlyError::new(category, title, TEMPORARY_NOTICE)
                    .with_suggestions(suggestions)
                    .with_error_code("HFGUARD_REMOTE")
            }

            GuardError::ServiceUnavailable { .. } => UserFriendlyError::new(
                ErrorCategory::ResourceUnavailable,
                "All models failed",
                UNAVAILABLE_NOTICE,
            )
            .with_suggestion("Wait a minute for cold models to load, then retry")
            .with_error_code("HFGUARD_UNAVAILABLE"),

            GuardError::UnsupportedKind { .. } => UserFriendlyError::new(
                ErrorCategory::UserInput,
                "Unsupported request kind",
                error.user_message(),
            )
            .with_error_code("HFGUARD_UNSUPPORTED_KIND"),

            GuardError::InvalidInput { field, .. } => {
                let title = match field {
                    Some(f) => format!("Invalid value for '{}'", f),
                    None => "Invalid input".to_string(),
                };
                UserFriendlyError::new(ErrorCategory::UserInput, title, error.user_message())
                    .with_suggestion("Check the input and try again")
                    .with_error_code("HFGUARD_INVALID_INPUT")
            }

            GuardError::Config { message, .. } => {
                let (title, suggestions) = classify_config_error(message);
                UserFriendlyError::new(ErrorCategory::Configuration, title, message.clone())
                    .with_suggestions(suggestions)
                    .with_error_code("HFGUARD_CONFIG")
            }

            GuardError::Io { message } => {
                UserFriendlyError::new(ErrorCategory::Internal, "I/O error", message.clone())
                    .with_error_code("HFGUARD_IO")
            }

            GuardError::Json { message } => UserFriendlyError::new(
                ErrorCategory::Internal,
                "Data format error",
                message.clone(),
            )
            .with_error_code("HFGUARD_JSON"),
        }
    }
}
