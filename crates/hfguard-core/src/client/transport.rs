//! Transport seam between the fallback client and the network

use super::credential::Credential;
use crate::config::HttpConfig;
use crate::error::{GuardError, GuardResult};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, instrument};

/// JSON body sent to the Inference API
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InferencePayload {
    pub inputs: String,
}

/// One validated request for one candidate model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferenceRequest {
    /// Model the request is for, used to attribute failures
    pub model: String,
    /// Endpoint that already passed the policy guard
    pub endpoint: String,
    pub credential: Credential,
    pub payload: InferencePayload,
}

/// Raw response, before kind-specific decoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferenceResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl InferenceResponse {
    pub fn new(status: u16, content_type: Option<String>, body: Vec<u8>) -> Self {
        Self {
            status,
            content_type,
            body,
        }
    }

    /// JSON success response
    pub fn json(value: &serde_json::Value) -> Self {
        Self::new(
            200,
            Some("application/json".to_string()),
            value.to_string().into_bytes(),
        )
    }

    /// Whether the status is 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Canonical reason phrase for the status, e.g. "Bad Gateway"
    pub fn status_text(&self) -> &'static str {
        StatusCode::from_u16(self.status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("Unknown Status")
    }
}

/// Issues a single POST for a validated request.
///
/// Implementations report network failures as `GuardError::TransientRemote`
/// and return every HTTP response, including non-2xx ones, as
/// `Ok(InferenceResponse)`. Timeouts belong to the implementation; the
/// fallback client imposes none.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InferenceTransport: Send + Sync {
    async fn post(&self, request: &InferenceRequest) -> GuardResult<InferenceResponse>;
}

#[async_trait]
impl<T: InferenceTransport + ?Sized> InferenceTransport for Arc<T> {
    async fn post(&self, request: &InferenceRequest) -> GuardResult<InferenceResponse> {
        (**self).post(request).await
    }
}

/// `reqwest`-backed transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http_client: Client,
}

impl HttpTransport {
    /// Build a transport with the configured timeouts
    pub fn new(config: &HttpConfig) -> GuardResult<Self> {
        let http_client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| {
                GuardError::config_with_context(
                    format!("Failed to create HTTP client: {}", e),
                    "building the inference transport",
                )
            })?;

        debug!(
            connect_timeout = ?config.connect_timeout,
            request_timeout = ?config.request_timeout,
            "created HTTP transport"
        );

        Ok(Self { http_client })
    }

    /// Wrap an existing client
    pub fn with_client(http_client: Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl InferenceTransport for HttpTransport {
    #[instrument(skip(self, request), fields(model = %request.model), level = "debug")]
    async fn post(&self, request: &InferenceRequest) -> GuardResult<InferenceResponse> {
        let response = self
            .http_client
            .post(&request.endpoint)
            .bearer_auth(request.credential.expose())
            .json(&request.payload)
            .send()
            .await
            .map_err(|e| {
                let message = if e.is_timeout() {
                    format!("request timed out: {}", e)
                } else if e.is_connect() {
                    format!("connection failed: {}", e)
                } else {
                    format!("request failed: {}", e)
                };
                GuardError::transient(&request.model, message)
            })?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response.bytes().await.map_err(|e| {
            GuardError::transient(&request.model, format!("failed to read response body: {}", e))
        })?;

        debug!(status, bytes = body.len(), "inference response received");

        Ok(InferenceResponse::new(status, content_type, body.to_vec()))
    }
}
