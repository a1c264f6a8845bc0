//! Immutable allow-list and deny-list sets

use super::kind::RequestKind;
use crate::error::{GuardError, GuardResult};
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Hostnames requests may target. Non-empty, lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedDomainSet {
    domains: BTreeSet<String>,
}

impl AllowedDomainSet {
    /// Build the set, rejecting empty input and non-lowercase hostnames
    pub fn new<I, S>(domains: I) -> GuardResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = BTreeSet::new();
        for domain in domains {
            let domain = domain.into();
            let trimmed = domain.trim();
            if trimmed.is_empty() {
                return Err(GuardError::config("allowed domain entries must not be empty"));
            }
            if trimmed != trimmed.to_lowercase() {
                return Err(GuardError::config_with_context(
                    format!("allowed domain '{}' must be lowercase", trimmed),
                    "validating allowed_domains",
                ));
            }
            set.insert(trimmed.to_string());
        }

        if set.is_empty() {
            return Err(GuardError::config("allowed_domains must not be empty"));
        }

        Ok(Self { domains: set })
    }

    /// Exact, case-sensitive membership test against a parsed hostname
    pub fn contains(&self, host: &str) -> bool {
        self.domains.contains(host)
    }

    /// Iterate the domains in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.domains.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

/// Preference-ordered model lists per request kind.
///
/// Every kind has a non-empty list without duplicates; index 0 is the most
/// preferred model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedModelSet {
    models: BTreeMap<RequestKind, Vec<String>>,
}

impl AllowedModelSet {
    /// Build the set from `(kind, models)` pairs
    pub fn new<I>(entries: I) -> GuardResult<Self>
    where
        I: IntoIterator<Item = (RequestKind, Vec<String>)>,
    {
        let mut models = BTreeMap::new();

        for (kind, list) in entries {
            let mut seen = HashSet::new();
            let mut cleaned = Vec::with_capacity(list.len());
            for model in list {
                let model = model.trim().to_string();
                if model.is_empty() {
                    return Err(GuardError::config_with_context(
                        "model identifiers must not be empty",
                        format!("validating {} models", kind),
                    ));
                }
                if !seen.insert(model.clone()) {
                    return Err(GuardError::config_with_context(
                        format!("duplicate model '{}'", model),
                        format!("validating {} models", kind),
                    ));
                }
                cleaned.push(model);
            }
            models.insert(kind, cleaned);
        }

        for kind in RequestKind::ALL {
            match models.get(&kind) {
                Some(list) if !list.is_empty() => {}
                _ => {
                    return Err(GuardError::config(format!(
                        "model list for '{}' must not be empty",
                        kind
                    )));
                }
            }
        }

        Ok(Self { models })
    }

    /// Candidates for a kind, most preferred first
    pub fn candidates(&self, kind: RequestKind) -> &[String] {
        self.models.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `model` is allowed for `kind`
    pub fn contains(&self, model: &str, kind: RequestKind) -> bool {
        self.candidates(kind).iter().any(|m| m == model)
    }

    /// Kind that lists `model`, if any. Chat is checked first.
    pub fn kind_of(&self, model: &str) -> Option<RequestKind> {
        RequestKind::ALL
            .into_iter()
            .find(|kind| self.contains(model, *kind))
    }
}

/// Provider names that must never appear in an endpoint string.
///
/// Stored lowercase; matching lowercases the endpoint first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeniedProviderTokens {
    tokens: Vec<String>,
}

impl DeniedProviderTokens {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for token in tokens {
            let token = token.into().trim().to_lowercase();
            if !token.is_empty() && !out.contains(&token) {
                out.push(token);
            }
        }
        Self { tokens: out }
    }

    /// First token contained in `haystack`, case-insensitively
    pub fn find_in(&self, haystack: &str) -> Option<&str> {
        let haystack = haystack.to_lowercase();
        self.tokens
            .iter()
            .find(|t| haystack.contains(t.as_str()))
            .map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
