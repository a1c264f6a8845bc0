//! Single policy checks (no network)

use crate::console::CliConsole;
use colored::*;
use hfguard_core::client::mask_token;
use hfguard_core::config::GuardConfig;
use hfguard_core::policy::{RequestKind, ViolationReason};

/// `hfguard check endpoint <url>`
pub fn endpoint(config: &GuardConfig, url: &str) -> anyhow::Result<()> {
    let guard = config.build_guard()?;
    report(&format!("Endpoint {}", url), guard.validate_endpoint(url))
}

/// `hfguard check model <id> [--kind]`
pub fn model(config: &GuardConfig, model: &str, kind: Option<RequestKind>) -> anyhow::Result<()> {
    let guard = config.build_guard()?;
    let subject = format!("Model {}", model);

    let verdict = match kind {
        Some(kind) => guard.validate_model(model, kind).map(|_| kind),
        None => guard
            .models()
            .kind_of(model)
            .ok_or(ViolationReason::UnauthorizedModel),
    };

    match verdict {
        Ok(kind) => {
            // the endpoint built for an allowed model can still be blocked
            let endpoint = guard.build_endpoint(model);
            report(
                &format!("{} ({})", subject, kind),
                guard.validate_endpoint(&endpoint),
            )
        }
        Err(reason) => report(&subject, Err(reason)),
    }
}

/// `hfguard check token [<token>]`; falls back to the configured token
pub fn token(config: &GuardConfig, token: Option<&str>) -> anyhow::Result<()> {
    let guard = config.build_guard()?;
    let token = token.or(config.token.as_deref());
    let subject = format!("Token {}", token.map(mask_token).unwrap_or_else(|| "(none)".into()));
    report(&subject, guard.validate_credential(token))
}

fn report(subject: &str, verdict: Result<(), ViolationReason>) -> anyhow::Result<()> {
    let console = CliConsole::new(true);
    match verdict {
        Ok(()) => {
            console.success(&format!("{} - allowed", subject));
            Ok(())
        }
        Err(reason) => {
            console.error(&format!("{} - {}", subject, "blocked".bold()));
            Err(anyhow::Error::new(reason).context("policy check failed"))
        }
    }
}
