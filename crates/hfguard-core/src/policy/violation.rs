//! Reasons a request can be rejected by the guard

use std::fmt;

/// Why the guard rejected a request.
///
/// `Display` yields the stable reason string used in logs and attempt
/// traces (`unauthorized-domain`, `denied-provider:<token>`, ...). These
/// strings are internal; end users only ever see the generic notice.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ViolationReason {
    /// Endpoint hostname is not on the domain allow-list
    UnauthorizedDomain,
    /// Endpoint contains a denied provider name
    DeniedProvider(String),
    /// Endpoint could not be parsed as a URL
    MalformedUrl,
    /// Model is not allowed for the requested kind
    UnauthorizedModel,
    /// No credential, or an empty one
    MissingCredential,
    /// Credential does not carry the recognized prefix
    MalformedCredential,
}

impl fmt::Display for ViolationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnauthorizedDomain => write!(f, "unauthorized-domain"),
            Self::DeniedProvider(token) => write!(f, "denied-provider:{}", token),
            Self::MalformedUrl => write!(f, "malformed-url"),
            Self::UnauthorizedModel => write!(f, "unauthorized-model"),
            Self::MissingCredential => write!(f, "missing-credential"),
            Self::MalformedCredential => write!(f, "malformed-credential"),
        }
    }
}

impl ViolationReason {
    /// Whether the rejection concerns the credential rather than the target
    pub fn is_credential(&self) -> bool {
        matches!(self, Self::MissingCredential | Self::MalformedCredential)
    }
}

impl std::error::Error for ViolationReason {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_strings() {
        assert_eq!(
            ViolationReason::UnauthorizedDomain.to_string(),
            "unauthorized-domain"
        );
        assert_eq!(
            ViolationReason::DeniedProvider("replicate".into()).to_string(),
            "denied-provider:replicate"
        );
        assert_eq!(ViolationReason::MalformedUrl.to_string(), "malformed-url");
        assert_eq!(
            ViolationReason::UnauthorizedModel.to_string(),
            "unauthorized-model"
        );
    }

    #[test]
    fn test_credential_reasons() {
        assert!(ViolationReason::MissingCredential.is_credential());
        assert!(ViolationReason::MalformedCredential.is_credential());
        assert!(!ViolationReason::UnauthorizedDomain.is_credential());
        assert!(!ViolationReason::DeniedProvider("openai".into()).is_credential());
    }
}
