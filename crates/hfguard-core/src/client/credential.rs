//! Bearer credential

use crate::error::GuardResult;
use crate::policy::PolicyGuard;
use std::fmt;

/// Validated bearer token.
///
/// Only constructible through the guard's prefix check. `Debug` and
/// `Display` show a masked form; call `expose` at the single place the
/// header is written.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Validate `token` against the guard and wrap it
    pub fn new(token: impl Into<String>, guard: &PolicyGuard) -> GuardResult<Self> {
        let token = token.into();
        guard.validate_credential(Some(&token))?;
        Ok(Self(token))
    }

    /// Validate an optional token, e.g. one read from the environment
    pub fn from_optional(token: Option<String>, guard: &PolicyGuard) -> GuardResult<Self> {
        guard.validate_credential(token.as_deref())?;
        Ok(Self(token.unwrap_or_default()))
    }

    /// Raw token for the Authorization header
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Display-safe form
    pub fn masked(&self) -> String {
        mask_token(&self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&self.masked()).finish()
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

/// Mask a token for safe display
pub fn mask_token(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let len = chars.len();
    if len <= 12 {
        return "*".repeat(len);
    }

    let prefix: String = chars[..5].iter().collect();
    let suffix: String = chars[len - 4..].iter().collect();
    let mask_len = len - 9;

    format!("{}{}...{}", prefix, "*".repeat(mask_len.min(8)), suffix)
}
