//! Caller-facing request processing

use super::fallback::FallbackClient;
use super::output::GeneratedOutput;
use super::transport::InferenceTransport;
use crate::error::GuardResult;
use crate::policy::{PolicyGuard, RequestKind};
use serde::{Deserialize, Serialize};
use tracing::error;

/// `{ success: true, data }` or `{ success: false, error }`.
///
/// `error` is always a user-safe message; policy violations never reveal
/// which rule fired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RequestResult {
    pub fn ok(data: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data.into()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

impl From<GuardResult<GeneratedOutput>> for RequestResult {
    fn from(result: GuardResult<GeneratedOutput>) -> Self {
        match result {
            Ok(output) => Self::ok(output.to_display_string()),
            Err(e) => Self::failed(e.user_message()),
        }
    }
}

/// Routes free-form input to a kind and runs it through the fallback client.
pub struct SecureInterface<T> {
    guard: PolicyGuard,
    client: FallbackClient<T>,
    image_keywords: Vec<String>,
}

impl<T: InferenceTransport> SecureInterface<T> {
    pub fn new(guard: PolicyGuard, client: FallbackClient<T>, image_keywords: Vec<String>) -> Self {
        Self {
            guard,
            client,
            image_keywords,
        }
    }

    /// Kind the interface would pick for `input`
    pub fn detect_kind(&self, input: &str) -> RequestKind {
        RequestKind::detect(input, &self.image_keywords)
    }

    /// Detect the kind and generate
    pub async fn process(&self, input: &str) -> RequestResult {
        self.process_kind(self.detect_kind(input), input).await
    }

    /// Generate with an explicit kind
    pub async fn process_kind(&self, kind: RequestKind, input: &str) -> RequestResult {
        let result = self.client.generate(&self.guard, kind, input).await;
        if let Err(e) = &result {
            error!(error = %e, "request processing failed");
        }
        RequestResult::from(result)
    }

    pub fn guard(&self) -> &PolicyGuard {
        &self.guard
    }

    pub fn client(&self) -> &FallbackClient<T> {
        &self.client
    }
}
