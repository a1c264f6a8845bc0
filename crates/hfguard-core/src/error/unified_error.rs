//! UnifiedError trait implementation for GuardError

use super::types::{GuardError, UnifiedError};

impl UnifiedError for GuardError {
    fn error_code(&self) -> &str {
        match self {
            Self::PolicyViolation { .. } => "HFGUARD_POLICY",
            Self::TransientRemote { .. } => "HFGUARD_REMOTE",
            Self::ServiceUnavailable { .. } => "HFGUARD_UNAVAILABLE",
            Self::UnsupportedKind { .. } => "HFGUARD_UNSUPPORTED_KIND",
            Self::InvalidInput { .. } => "HFGUARD_INVALID_INPUT",
            Self::Config { .. } => "HFGUARD_CONFIG",
            Self::Io { .. } => "HFGUARD_IO",
            Self::Json { .. } => "HFGUARD_JSON",
        }
    }

    fn message(&self) -> String {
        match self {
            Self::PolicyViolation { reason } => reason.to_string(),
            Self::TransientRemote { message, .. } => message.clone(),
            Self::ServiceUnavailable { .. } => self.to_string(),
            Self::UnsupportedKind { kind } => format!("unsupported kind '{}'", kind),
            Self::InvalidInput { message, .. } => message.clone(),
            Self::Config { message, .. } => message.clone(),
            Self::Io { message } => message.clone(),
            Self::Json { message } => message.clone(),
        }
    }

    fn context(&self) -> Option<&str> {
        match self {
            Self::Config { context, .. } => context.as_deref(),
            Self::InvalidInput { field, .. } => field.as_deref(),
            Self::TransientRemote { model, .. } => Some(model),
            _ => None,
        }
    }

    fn is_retryable(&self) -> bool {
        self.is_transient()
    }
}
