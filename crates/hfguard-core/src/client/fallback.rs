//! Ordered model fallback
//!
//! `generate` walks the allowed models for a kind as a small state
//! machine. Each candidate attempt ends in one of three transitions:
//!
//! - `TryNext`: transient failure, advance to the next candidate
//! - `Succeed`: terminal, return the output
//! - `FailFatal`: terminal, return the error without touching the
//!   remaining candidates
//!
//! Running past the last candidate is the exhausted terminal state and
//! yields `ServiceUnavailable`. Candidates are tried strictly one at a
//! time and a failed model is never retried.

use super::credential::Credential;
use super::decode::decode_response;
use super::outcome::{AttemptOutcome, AttemptRecord, Generation};
use super::output::GeneratedOutput;
use super::transport::{
    HttpTransport, InferencePayload, InferenceRequest, InferenceTransport,
};
use crate::config::HttpConfig;
use crate::error::{GuardError, GuardResult, UnifiedError};
use crate::policy::{PolicyGuard, RequestKind};
use tracing::{debug, info, instrument, warn};

/// Step taken after one attempt
#[derive(Debug)]
enum Transition {
    TryNext,
    Succeed(GeneratedOutput),
    FailFatal(GuardError),
}

impl From<AttemptOutcome> for Transition {
    fn from(outcome: AttemptOutcome) -> Self {
        match outcome {
            AttemptOutcome::Success { data } => Self::Succeed(data),
            AttemptOutcome::Failure { error } if error.is_retryable() => {
                debug!(code = error.error_code(), "retryable failure");
                Self::TryNext
            }
            AttemptOutcome::Failure { error } => Self::FailFatal(error),
        }
    }
}

/// Where the walk over candidates ended
#[derive(Debug)]
enum Terminal {
    Succeeded { model: String, output: GeneratedOutput },
    Aborted(GuardError),
    Exhausted,
}

/// Issues generation requests, falling back across allowed models.
///
/// Holds no policy of its own: the guard is passed into every call, so
/// one client can serve several policies and nothing is process-global.
#[derive(Debug, Clone)]
pub struct FallbackClient<T> {
    transport: T,
    credential: Credential,
}

impl FallbackClient<HttpTransport> {
    /// Client over the real Inference API
    pub fn http(config: &HttpConfig, credential: Credential) -> GuardResult<Self> {
        Ok(Self::new(HttpTransport::new(config)?, credential))
    }
}

impl<T: InferenceTransport> FallbackClient<T> {
    pub fn new(transport: T, credential: Credential) -> Self {
        Self {
            transport,
            credential,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Generate output for `prompt`, trying each allowed model for `kind`
    /// in preference order.
    pub async fn generate(
        &self,
        guard: &PolicyGuard,
        kind: RequestKind,
        prompt: &str,
    ) -> GuardResult<GeneratedOutput> {
        self.generate_traced(guard, kind, prompt)
            .await
            .map(|generation| generation.output)
    }

    /// Like `generate`, also returning the model used and the attempt trace
    #[instrument(
        skip(self, guard, prompt),
        fields(request_id = %uuid::Uuid::new_v4(), kind = %kind)
    )]
    pub async fn generate_traced(
        &self,
        guard: &PolicyGuard,
        kind: RequestKind,
        prompt: &str,
    ) -> GuardResult<Generation> {
        if prompt.trim().is_empty() {
            return Err(GuardError::invalid_input_field("prompt must not be empty", "prompt"));
        }

        let candidates = guard.candidates(kind);
        let mut attempts = Vec::with_capacity(candidates.len());
        let mut index = 0;

        let terminal = loop {
            let Some(model) = candidates.get(index) else {
                break Terminal::Exhausted;
            };

            let endpoint = guard.build_endpoint(model);
            let outcome = self.attempt(guard, kind, model, &endpoint, prompt).await;
            attempts.push(AttemptRecord::from_outcome(model, &endpoint, &outcome));

            match Transition::from(outcome) {
                Transition::TryNext => index += 1,
                Transition::Succeed(output) => {
                    break Terminal::Succeeded {
                        model: model.clone(),
                        output,
                    };
                }
                Transition::FailFatal(error) => break Terminal::Aborted(error),
            }
        };

        match terminal {
            Terminal::Succeeded { model, output } => {
                info!(model = %model, attempts = attempts.len(), "generation succeeded");
                Ok(Generation {
                    model,
                    output,
                    attempts,
                })
            }
            Terminal::Aborted(error) => {
                warn!(error = %error, attempts = attempts.len(), "generation aborted");
                Err(error)
            }
            Terminal::Exhausted => {
                warn!(attempts = attempts.len(), "all candidate models failed");
                Err(GuardError::service_unavailable(kind, attempts.len()))
            }
        }
    }

    /// Validate and, if allowed, call one candidate
    async fn attempt(
        &self,
        guard: &PolicyGuard,
        kind: RequestKind,
        model: &str,
        endpoint: &str,
        prompt: &str,
    ) -> AttemptOutcome {
        if let Err(reason) = guard.validate_target(endpoint, model, kind) {
            warn!(model, reason = %reason, "candidate blocked by policy");
            return AttemptOutcome::Failure {
                error: GuardError::policy(reason),
            };
        }

        debug!(model, credential = %self.credential, "trying model");

        let request = InferenceRequest {
            model: model.to_string(),
            endpoint: endpoint.to_string(),
            credential: self.credential.clone(),
            payload: InferencePayload {
                inputs: prompt.to_string(),
            },
        };

        let result = self
            .transport
            .post(&request)
            .await
            .and_then(|response| decode_response(kind, model, &response));

        match result {
            Ok(data) => AttemptOutcome::Success { data },
            Err(error) => {
                if error.is_transient() {
                    warn!(model, error = %error, "model failed, falling back");
                }
                AttemptOutcome::Failure { error }
            }
        }
    }
}
