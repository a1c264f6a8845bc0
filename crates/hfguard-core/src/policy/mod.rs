//! Allow-list policy enforcement
//!
//! Everything here is pure: the guard holds immutable sets built once from
//! configuration and answers yes/no questions about endpoints, models and
//! credentials before any network traffic happens.

mod guard;
mod kind;
mod sets;
mod violation;


pub use guard::{CREDENTIAL_PREFIX, PolicyGuard};
pub use kind::RequestKind;
pub use sets::{AllowedDomainSet, AllowedModelSet, DeniedProviderTokens};
pub use violation::ViolationReason;
