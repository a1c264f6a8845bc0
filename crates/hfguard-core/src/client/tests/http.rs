//! HTTP transport against a mock server

use super::{credential, guard_with};
use crate::client::{FallbackClient, HttpTransport};
use crate::config::HttpConfig;
use crate::error::GuardError;
use crate::policy::{PolicyGuard, RequestKind};
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 13];

fn local_guard(server: &MockServer) -> PolicyGuard {
    guard_with(
        &format!("{}/models", server.uri()),
        &["127.0.0.1"],
        &["gpt2", "gpt2-medium", "gpt2-large"],
        &["black-forest-labs/FLUX.1-dev", "black-forest-labs/FLUX.1-schnell"],
    )
}

fn http_client(guard: &PolicyGuard) -> FallbackClient<HttpTransport> {
    let http_client = Client::builder()
        .no_proxy()
        .build()
        .expect("Failed to create HTTP client");
    FallbackClient::new(HttpTransport::with_client(http_client), credential(guard))
}

#[tokio::test]
async fn test_sends_bearer_token_and_inputs() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gpt2"))
        .and(header("authorization", "Bearer hf_test_token_123"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "inputs": "hello" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "generated_text": "hi there" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let guard = local_guard(&server);
    let client = http_client(&guard);
    let output = client
        .generate(&guard, RequestKind::Chat, "hello")
        .await
        .unwrap();

    assert_eq!(output.as_text(), Some("hi there"));
}

#[tokio::test]
async fn test_falls_back_on_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gpt2"))
        .respond_with(
            ResponseTemplate::new(503)
                .set_body_json(json!({ "error": "Model gpt2 is currently loading" })),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/models/gpt2-medium"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "generated_text": "from medium" }
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/models/gpt2-large"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let guard = local_guard(&server);
    let generation = http_client(&guard)
        .generate_traced(&guard, RequestKind::Chat, "hello")
        .await
        .unwrap();

    assert_eq!(generation.model, "gpt2-medium");
    assert_eq!(generation.output.as_text(), Some("from medium"));
    match &generation.attempts[0].status {
        crate::client::AttemptStatus::Failed { reason, .. } => {
            assert!(reason.contains("currently loading"), "{reason}");
        }
        other => panic!("unexpected status: {other:?}"),
    }
}

#[tokio::test]
async fn test_binary_image_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/black-forest-labs/FLUX.1-dev"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(PNG.to_vec(), "image/png"))
        .expect(1)
        .mount(&server)
        .await;

    let guard = local_guard(&server);
    let output = http_client(&guard)
        .generate(&guard, RequestKind::Image, "a cyberpunk garden")
        .await
        .unwrap();

    let image = output.as_image().unwrap();
    assert_eq!(image.bytes, PNG);
    assert!(output.to_display_string().starts_with("data:image/png;base64,"));
}

#[tokio::test]
async fn test_every_model_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .expect(2)
        .mount(&server)
        .await;

    let guard = local_guard(&server);
    let err = http_client(&guard)
        .generate(&guard, RequestKind::Image, "forest")
        .await
        .unwrap_err();

    assert_eq!(err, GuardError::service_unavailable(RequestKind::Image, 2));
}

#[tokio::test]
async fn test_connection_failure_is_transient() {
    let guard = guard_with(
        "http://127.0.0.1:1/models",
        &["127.0.0.1"],
        &["gpt2"],
        &["black-forest-labs/FLUX.1-dev"],
    );
    let config = HttpConfig {
        connect_timeout: Duration::from_secs(2),
        request_timeout: Duration::from_secs(5),
        ..HttpConfig::default()
    };
    let client = FallbackClient::http(&config, credential(&guard)).unwrap();

    let generation = client
        .generate_traced(&guard, RequestKind::Chat, "hello")
        .await;

    assert_eq!(
        generation.unwrap_err(),
        GuardError::service_unavailable(RequestKind::Chat, 1)
    );
}
