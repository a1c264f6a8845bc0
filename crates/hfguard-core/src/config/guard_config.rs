//! Top-level configuration

use super::defaults::{
    DEFAULT_ALLOWED_DOMAINS, DEFAULT_BASE_URL, DEFAULT_CHAT_MODELS, DEFAULT_DENIED_PROVIDERS,
    DEFAULT_IMAGE_KEYWORDS, DEFAULT_IMAGE_MODELS, to_strings,
};
use super::http_config::HttpConfig;
use super::logging_config::LoggingConfig;
use crate::client::{Credential, FallbackClient, HttpTransport, SecureInterface};
use crate::error::{GuardError, GuardResult};
use crate::policy::{
    AllowedDomainSet, AllowedModelSet, CREDENTIAL_PREFIX, DeniedProviderTokens, PolicyGuard,
    RequestKind,
};
use serde::{Deserialize, Serialize};

/// Preference-ordered model lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelLists {
    pub chat: Vec<String>,
    pub image: Vec<String>,
}

impl Default for ModelLists {
    fn default() -> Self {
        Self {
            chat: to_strings(DEFAULT_CHAT_MODELS),
            image: to_strings(DEFAULT_IMAGE_MODELS),
        }
    }
}

impl ModelLists {
    pub fn for_kind(&self, kind: RequestKind) -> &[String] {
        match kind {
            RequestKind::Chat => &self.chat,
            RequestKind::Image => &self.image,
        }
    }
}

/// hfguard configuration.
///
/// Plain data; `build_guard` checks the invariants and produces the
/// immutable `PolicyGuard`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    pub base_url: String,
    pub allowed_domains: Vec<String>,
    pub models: ModelLists,
    pub denied_providers: Vec<String>,
    pub credential_prefix: String,
    pub image_keywords: Vec<String>,
    /// Bearer token. Prefer the environment over storing it in a file.
    #[serde(skip_serializing)]
    pub token: Option<String>,
    pub http: HttpConfig,
    pub logging: LoggingConfig,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            allowed_domains: to_strings(DEFAULT_ALLOWED_DOMAINS),
            models: ModelLists::default(),
            denied_providers: to_strings(DEFAULT_DENIED_PROVIDERS),
            credential_prefix: CREDENTIAL_PREFIX.to_string(),
            image_keywords: to_strings(DEFAULT_IMAGE_KEYWORDS),
            token: None,
            http: HttpConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl GuardConfig {
    /// Validate the lists and build the guard
    pub fn build_guard(&self) -> GuardResult<PolicyGuard> {
        if self.base_url.trim().is_empty() {
            return Err(GuardError::config("base_url must not be empty"));
        }
        if self.credential_prefix.is_empty() {
            return Err(GuardError::config("credential_prefix must not be empty"));
        }

        let domains = AllowedDomainSet::new(self.allowed_domains.iter().cloned())?;
        let models = AllowedModelSet::new(
            RequestKind::ALL.map(|kind| (kind, self.models.for_kind(kind).to_vec())),
        )?;
        let denied = DeniedProviderTokens::new(self.denied_providers.iter().cloned());

        Ok(PolicyGuard::new(self.base_url.trim(), domains, models, denied)
            .with_credential_prefix(self.credential_prefix.clone()))
    }

    /// Validate the configured token against `guard`
    pub fn credential(&self, guard: &PolicyGuard) -> GuardResult<Credential> {
        Credential::from_optional(self.token.clone(), guard)
    }

    /// Guard, credential and HTTP client wired into a `SecureInterface`
    pub fn build_interface(&self) -> GuardResult<SecureInterface<HttpTransport>> {
        let guard = self.build_guard()?;
        let credential = self.credential(&guard)?;
        let client = FallbackClient::http(&self.http, credential)?;
        Ok(SecureInterface::new(
            guard,
            client,
            self.image_keywords.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::ViolationReason;

    #[test]
    fn test_default_config_builds() {
        let config = GuardConfig::default();
        let guard = config.build_guard().unwrap();
        assert_eq!(guard.base_url(), DEFAULT_BASE_URL);
        assert_eq!(guard.candidates(RequestKind::Chat)[0], "gpt2");
        assert_eq!(
            guard.candidates(RequestKind::Image)[0],
            "black-forest-labs/FLUX.1-dev"
        );
        assert_eq!(guard.denied_providers().len(), 4);
        assert_eq!(guard.credential_prefix(), "hf_");
    }

    #[test]
    fn test_invariant_violations_are_config_errors() {
        let mut config = GuardConfig::default();
        config.models.image.clear();
        assert!(matches!(
            config.build_guard(),
            Err(GuardError::Config { .. })
        ));

        let mut config = GuardConfig::default();
        config.models.chat.push("gpt2".into());
        assert!(config.build_guard().is_err());

        let mut config = GuardConfig::default();
        config.allowed_domains = vec!["HuggingFace.co".into()];
        assert!(config.build_guard().is_err());

        let mut config = GuardConfig::default();
        config.allowed_domains.clear();
        assert!(config.build_guard().is_err());
    }

    #[test]
    fn test_credential_from_config() {
        let mut config = GuardConfig::default();
        let guard = config.build_guard().unwrap();
        assert_eq!(
            config.credential(&guard),
            Err(GuardError::policy(ViolationReason::MissingCredential))
        );

        config.token = Some("sk-openai-token".into());
        assert_eq!(
            config.credential(&guard),
            Err(GuardError::policy(ViolationReason::MalformedCredential))
        );

        config.token = Some("hf_valid_token_123".into());
        assert_eq!(
            config.credential(&guard).unwrap().expose(),
            "hf_valid_token_123"
        );
    }

    #[test]
    fn test_token_is_not_serialized() {
        let config = GuardConfig {
            token: Some("hf_secret_value".into()),
            ..GuardConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("hf_secret_value"));
    }

    #[test]
    fn test_build_interface_requires_token() {
        let config = GuardConfig::default();
        assert!(config.build_interface().is_err());

        let config = GuardConfig {
            token: Some("hf_abc123".into()),
            ..GuardConfig::default()
        };
        let interface = config.build_interface().unwrap();
        assert_eq!(interface.detect_kind("Dibuja un gato"), RequestKind::Image);
        assert_eq!(interface.detect_kind("hello"), RequestKind::Chat);
    }
}
