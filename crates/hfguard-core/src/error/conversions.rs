//! From trait implementations for GuardError conversions

use super::types::GuardError;
use crate::policy::ViolationReason;

impl From<ViolationReason> for GuardError {
    fn from(reason: ViolationReason) -> Self {
        Self::policy(reason)
    }
}

impl From<std::io::Error> for GuardError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<serde_json::Error> for GuardError {
    fn from(error: serde_json::Error) -> Self {
        Self::json(error.to_string())
    }
}
