//! Constructor methods for GuardError

use super::types::GuardError;
use crate::policy::{RequestKind, ViolationReason};

impl GuardError {
    /// Create a policy violation
    pub fn policy(reason: ViolationReason) -> Self {
        Self::PolicyViolation { reason }
    }

    /// Create a transient failure attributed to a model
    pub fn transient(model: impl Into<String>, message: impl Into<String>) -> Self {
        Self::TransientRemote {
            model: model.into(),
            message: message.into(),
            status_code: None,
        }
    }

    /// Create a transient failure carrying the HTTP status
    pub fn transient_with_status(
        model: impl Into<String>,
        message: impl Into<String>,
        status_code: u16,
    ) -> Self {
        Self::TransientRemote {
            model: model.into(),
            message: message.into(),
            status_code: Some(status_code),
        }
    }

    /// Create the terminal exhaustion error
    pub fn service_unavailable(kind: RequestKind, attempts: usize) -> Self {
        Self::ServiceUnavailable { kind, attempts }
    }

    /// Create an unsupported kind error
    pub fn unsupported_kind(kind: impl Into<String>) -> Self {
        Self::UnsupportedKind { kind: kind.into() }
    }

    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
            field: None,
        }
    }

    /// Create an invalid input error for a named field
    pub fn invalid_input_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: None,
        }
    }

    /// Create a configuration error with context
    pub fn config_with_context(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: Some(context.into()),
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Create a JSON error
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json {
            message: message.into(),
        }
    }

    /// Whether this error must stop the fallback loop immediately
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::TransientRemote { .. })
    }

    /// Whether this error lets the fallback loop advance to the next model
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::TransientRemote { .. })
    }

    /// Whether this is an allow-list rejection
    pub fn is_policy_violation(&self) -> bool {
        matches!(self, Self::PolicyViolation { .. })
    }

    /// The violation reason, if this is a policy violation
    pub fn violation_reason(&self) -> Option<&ViolationReason> {
        match self {
            Self::PolicyViolation { reason } => Some(reason),
            _ => None,
        }
    }
}
