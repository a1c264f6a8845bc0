//! The policy guard

use super::kind::RequestKind;
use super::sets::{AllowedDomainSet, AllowedModelSet, DeniedProviderTokens};
use super::violation::ViolationReason;
use tracing::debug;
use url::Url;

/// Prefix every Hugging Face user access token carries
pub const CREDENTIAL_PREFIX: &str = "hf_";

/// Immutable allow-list policy.
///
/// Built once from configuration and passed by reference to every
/// `generate` call. All checks are pure and may be called concurrently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyGuard {
    base_url: String,
    domains: AllowedDomainSet,
    models: AllowedModelSet,
    denied: DeniedProviderTokens,
    credential_prefix: String,
}

impl PolicyGuard {
    /// Create a guard. A trailing `/` on `base_url` is dropped.
    pub fn new(
        base_url: impl Into<String>,
        domains: AllowedDomainSet,
        models: AllowedModelSet,
        denied: DeniedProviderTokens,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            domains,
            models,
            denied,
            credential_prefix: CREDENTIAL_PREFIX.to_string(),
        }
    }

    /// Override the recognized credential prefix
    pub fn with_credential_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.credential_prefix = prefix.into();
        self
    }

    /// Check that `endpoint` targets an allowed host and names no denied
    /// provider.
    ///
    /// The host check and the denied-token scan are independent layers: an
    /// allowed host never skips the scan, so a trusted domain carrying a
    /// provider name in its path is still rejected.
    pub fn validate_endpoint(&self, endpoint: &str) -> Result<(), ViolationReason> {
        let url = Url::parse(endpoint).map_err(|e| {
            debug!(error = %e, "endpoint failed to parse");
            ViolationReason::MalformedUrl
        })?;

        match url.host_str() {
            Some(host) if self.domains.contains(host) => {}
            host => {
                debug!(host = ?host, "endpoint host not allowed");
                return Err(ViolationReason::UnauthorizedDomain);
            }
        }

        if let Some(token) = self.denied.find_in(endpoint) {
            debug!(token, "endpoint names a denied provider");
            return Err(ViolationReason::DeniedProvider(token.to_string()));
        }

        Ok(())
    }

    /// Check that `model` is on the list for `kind`
    pub fn validate_model(&self, model: &str, kind: RequestKind) -> Result<(), ViolationReason> {
        if self.models.contains(model, kind) {
            Ok(())
        } else {
            debug!(model, %kind, "model not allowed");
            Err(ViolationReason::UnauthorizedModel)
        }
    }

    /// Check that a credential is present and carries the recognized prefix
    pub fn validate_credential(&self, token: Option<&str>) -> Result<(), ViolationReason> {
        match token {
            None => Err(ViolationReason::MissingCredential),
            Some(t) if t.is_empty() => Err(ViolationReason::MissingCredential),
            Some(t) if !t.starts_with(&self.credential_prefix) => {
                Err(ViolationReason::MalformedCredential)
            }
            Some(_) => Ok(()),
        }
    }

    /// Run both endpoint and model checks for one candidate
    pub fn validate_target(
        &self,
        endpoint: &str,
        model: &str,
        kind: RequestKind,
    ) -> Result<(), ViolationReason> {
        self.validate_endpoint(endpoint)?;
        self.validate_model(model, kind)
    }

    /// Join the base URL and a model id with exactly one `/`
    pub fn build_endpoint(&self, model: &str) -> String {
        format!("{}/{}", self.base_url, model.trim_start_matches('/'))
    }

    /// Quick boolean check: mentions `huggingface.co` and no denied token.
    ///
    /// Substring based, so weaker than `validate_endpoint`; used for
    /// reporting only.
    pub fn is_huggingface_endpoint(&self, url: &str) -> bool {
        url.contains("huggingface.co") && self.denied.find_in(url).is_none()
    }

    /// Candidates for `kind`, most preferred first
    pub fn candidates(&self, kind: RequestKind) -> &[String] {
        self.models.candidates(kind)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn domains(&self) -> &AllowedDomainSet {
        &self.domains
    }

    pub fn models(&self) -> &AllowedModelSet {
        &self.models
    }

    pub fn denied_providers(&self) -> &DeniedProviderTokens {
        &self.denied
    }

    pub fn credential_prefix(&self) -> &str {
        &self.credential_prefix
    }
}
