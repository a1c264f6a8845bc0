//! hfguard
//!
//! Facade over `hfguard-core`. The `hfguard` binary lives in
//! `crates/hfguard-cli`.

pub use hfguard_core::*;
