//! Fallback client tests

mod http;

use crate::client::{Credential, InferenceRequest, InferenceResponse, InferenceTransport};
use crate::error::{GuardError, GuardResult};
use crate::policy::{AllowedDomainSet, AllowedModelSet, DeniedProviderTokens, PolicyGuard, RequestKind};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

pub(super) fn guard_with(base_url: &str, domains: &[&str], chat: &[&str], image: &[&str]) -> PolicyGuard {
    let to_vec = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    PolicyGuard::new(
        base_url,
        AllowedDomainSet::new(domains.iter().copied()).unwrap(),
        AllowedModelSet::new([
            (RequestKind::Chat, to_vec(chat)),
            (RequestKind::Image, to_vec(image)),
        ])
        .unwrap(),
        DeniedProviderTokens::new(["replicate", "openai", "stability", "midjourney"]),
    )
}

pub(super) fn hf_guard(chat: &[&str], image: &[&str]) -> PolicyGuard {
    guard_with(
        "https://api-inference.huggingface.co/models",
        &["api-inference.huggingface.co", "huggingface.co"],
        chat,
        image,
    )
}

pub(super) fn credential(guard: &PolicyGuard) -> Credential {
    Credential::new("hf_test_token_123", guard).unwrap()
}

/// Replays canned results in order and records every request
#[derive(Default)]
pub(super) struct ScriptedTransport {
    replies: Mutex<VecDeque<GuardResult<InferenceResponse>>>,
    calls: Mutex<Vec<InferenceRequest>>,
}

impl ScriptedTransport {
    pub(super) fn new(replies: Vec<GuardResult<InferenceResponse>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn called_models(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.model.clone())
            .collect()
    }

    pub(super) fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl InferenceTransport for ScriptedTransport {
    async fn post(&self, request: &InferenceRequest) -> GuardResult<InferenceResponse> {
        self.calls.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GuardError::transient(&request.model, "no scripted reply")))
    }
}
