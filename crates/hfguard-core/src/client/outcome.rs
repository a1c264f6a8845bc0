//! Per-attempt outcomes and the traced generation result

use super::output::GeneratedOutput;
use crate::error::{GuardError, UnifiedError};
use serde::Serialize;

/// Result of one attempt against one candidate model.
///
/// Produced per attempt and consumed immediately by the fallback loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    Success { data: GeneratedOutput },
    Failure { error: GuardError },
}

impl AttemptOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Whether this failure was a policy violation
    pub fn is_policy_violation(&self) -> bool {
        match self {
            Self::Success { .. } => false,
            Self::Failure { error } => error.is_policy_violation(),
        }
    }
}

/// Recorded status of an attempt, without the payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AttemptStatus {
    Succeeded,
    Failed {
        reason: String,
        is_policy_violation: bool,
    },
}

/// One entry of the attempt trace
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttemptRecord {
    pub model: String,
    pub endpoint: String,
    pub status: AttemptStatus,
}

impl AttemptRecord {
    pub(crate) fn from_outcome(model: &str, endpoint: &str, outcome: &AttemptOutcome) -> Self {
        let status = match outcome {
            AttemptOutcome::Success { .. } => AttemptStatus::Succeeded,
            AttemptOutcome::Failure { error } => AttemptStatus::Failed {
                reason: error.message(),
                is_policy_violation: error.is_policy_violation(),
            },
        };

        Self {
            model: model.to_string(),
            endpoint: endpoint.to_string(),
            status,
        }
    }

    /// Whether this attempt issued a remote call.
    /// Policy violations are caught before the network.
    pub fn reached_network(&self) -> bool {
        !matches!(
            self.status,
            AttemptStatus::Failed {
                is_policy_violation: true,
                ..
            }
        )
    }
}

/// Traced result of a successful `generate` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Generation {
    /// Model that produced the output
    pub model: String,
    pub output: GeneratedOutput,
    /// Every attempt in order, the successful one last
    pub attempts: Vec<AttemptRecord>,
}

impl Generation {
    /// Number of models tried before the successful one
    pub fn fallbacks(&self) -> usize {
        self.attempts.len().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::ViolationReason;

    fn failed(error: GuardError) -> AttemptRecord {
        AttemptRecord::from_outcome(
            "gpt2",
            "https://api-inference.huggingface.co/models/gpt2",
            &AttemptOutcome::Failure { error },
        )
    }

    #[test]
    fn test_policy_failure_never_reached_network() {
        let record = failed(GuardError::policy(ViolationReason::UnauthorizedModel));
        assert!(!record.reached_network());
        assert_eq!(
            record.status,
            AttemptStatus::Failed {
                reason: "unauthorized-model".into(),
                is_policy_violation: true,
            }
        );
    }

    #[test]
    fn test_remote_failure_records_remote_message() {
        let record = failed(GuardError::transient_with_status(
            "gpt2",
            "HF error (503): Model gpt2 is currently loading",
            503,
        ));
        assert!(record.reached_network());
        assert_eq!(
            record.status,
            AttemptStatus::Failed {
                reason: "HF error (503): Model gpt2 is currently loading".into(),
                is_policy_violation: false,
            }
        );

        let ok = AttemptRecord::from_outcome(
            "gpt2",
            "https://api-inference.huggingface.co/models/gpt2",
            &AttemptOutcome::Success {
                data: GeneratedOutput::Text("hi".into()),
            },
        );
        assert!(ok.reached_network());
    }
}
