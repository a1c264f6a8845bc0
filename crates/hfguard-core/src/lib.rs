//! hfguard core library
//!
//! A Hugging Face only inference client. Every request passes a policy
//! guard (domain allow-list, denied-provider scan, model allow-list,
//! credential prefix) before any network call, and generation falls back
//! across the allowed models for the request kind in preference order.
//!
//! ```no_run
//! use hfguard_core::client::{Credential, FallbackClient};
//! use hfguard_core::config::GuardConfig;
//! use hfguard_core::policy::RequestKind;
//!
//! # async fn example() -> hfguard_core::GuardResult<()> {
//! let config = GuardConfig::default();
//! let guard = config.build_guard()?;
//! let credential = Credential::new("hf_your_token", &guard)?;
//! let client = FallbackClient::http(&config.http, credential)?;
//!
//! let output = client.generate(&guard, RequestKind::Chat, "hello").await?;
//! println!("{}", output.to_display_string());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod policy;

pub use client::{
    Credential, FallbackClient, GeneratedImage, GeneratedOutput, Generation, HttpTransport,
    InferenceTransport, RequestResult, SecureInterface,
};
pub use config::{GuardConfig, load_config};
pub use error::{GuardError, GuardResult};
pub use policy::{PolicyGuard, RequestKind, ViolationReason};
