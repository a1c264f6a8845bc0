//! Error types for hfguard
//!
//! Every failure the library can produce is a `GuardError` variant. Callers
//! branch on the variant (or on `is_fatal` / `is_transient`), never on the
//! message text. User-facing strings come from `user_message`, which hides
//! the allow-list internals behind generic notices.

mod classifiers;
mod constructors;
mod conversions;
mod types;
mod unified_error;
mod user_messages;

pub use types::{GuardError, GuardResult, UnifiedError};
pub use user_messages::{
    ErrorCategory, POLICY_NOTICE, TEMPORARY_NOTICE, UNAVAILABLE_NOTICE, UserFriendlyError,
};
