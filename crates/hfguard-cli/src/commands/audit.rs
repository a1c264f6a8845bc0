//! Security self-audit
//!
//! Replays a fixed set of allowed and hostile targets against the active
//! guard and reports whether each one is treated as expected. Nothing
//! here touches the network.

use crate::console::CliConsole;
use colored::*;
use hfguard_core::config::GuardConfig;
use hfguard_core::policy::{PolicyGuard, RequestKind, ViolationReason};

/// Endpoints that must pass the guard with the default domains
const TRUSTED_ENDPOINTS: &[&str] = &[
    "https://api-inference.huggingface.co/models/test",
    "https://huggingface.co/test",
];

/// Endpoints on foreign hosts or naming denied providers
const HOSTILE_ENDPOINTS: &[&str] = &[
    "https://api.openai.com/test",
    "https://replicate.com/test",
    "https://stability.ai/test",
    "https://api.replicate.com/v1/models",
    "https://api.openai.com/v1/completions",
    "https://api.stability.ai/v1/generation",
    "https://api.midjourney.com/v2/imagine",
    "https://huggingface.co/replicate-proxy",
    "https://evil.com/api",
];

/// Hosts that mention huggingface.co without being one of its domains
const LOOKALIKE_ENDPOINTS: &[&str] = &[
    "https://huggingface.co.evil.com/models/gpt2",
    "https://evil.com/huggingface.co/models/gpt2",
];

/// Model ids from other vendors; none may be allowed for any kind
const FOREIGN_MODELS: &[&str] = &["dall-e-3", "stable-diffusion", "claude-3", "gpt-4"];

/// Token samples and whether they should be accepted
const TOKEN_CASES: &[(Option<&str>, bool)] = &[
    (Some("hf_valid_token_123"), true),
    (Some("invalid_token"), false),
    (Some(""), false),
    (Some("sk-openai-token"), false),
    (Some("sk-malicious-token"), false),
    (None, false),
];

/// Check item result for the audit
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    pub hint: Option<String>,
}

/// Status of an audit check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Warn,
    Fail,
}

impl CheckResult {
    fn pass(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Pass,
            message: message.into(),
            hint: None,
        }
    }

    fn warn(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Warn,
            message: message.into(),
            hint: None,
        }
    }

    fn fail(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Fail,
            message: message.into(),
            hint: None,
        }
    }

    fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    fn icon(&self) -> ColoredString {
        match self.status {
            CheckStatus::Pass => "✓".green().bold(),
            CheckStatus::Warn => "⚠".yellow().bold(),
            CheckStatus::Fail => "✗".red().bold(),
        }
    }
}

/// Pass/warn/fail totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuditSummary {
    pub passed: usize,
    pub warned: usize,
    pub failed: usize,
}

impl AuditSummary {
    pub fn from_checks(checks: &[CheckResult]) -> Self {
        checks.iter().fold(Self::default(), |mut summary, check| {
            match check.status {
                CheckStatus::Pass => summary.passed += 1,
                CheckStatus::Warn => summary.warned += 1,
                CheckStatus::Fail => summary.failed += 1,
            }
            summary
        })
    }
}

/// `hfguard audit`
pub fn audit(config: &GuardConfig) -> anyhow::Result<()> {
    let guard = config.build_guard()?;
    let console = CliConsole::new(true);

    console.print_header("hfguard Security Audit");
    let checks = run_checks(config, &guard);
    let summary = print_checks(&checks);

    if summary.failed > 0 {
        anyhow::bail!("{} audit check(s) failed", summary.failed);
    }
    console.success("Only Hugging Face endpoints and allow-listed models are reachable");
    Ok(())
}

/// Every audit check against `guard`, in report order
pub fn run_checks(config: &GuardConfig, guard: &PolicyGuard) -> Vec<CheckResult> {
    let mut checks = Vec::new();
    checks.extend(check_trusted_endpoints(guard));
    checks.extend(check_hostile_endpoints(guard));
    checks.extend(check_endpoint_heuristic(guard));
    checks.extend(check_configured_models(guard));
    checks.extend(check_foreign_models(guard));
    checks.extend(check_token_samples(guard));
    checks.push(check_configured_token(config, guard));
    checks
}

/// Print each check and the totals
pub fn print_checks(checks: &[CheckResult]) -> AuditSummary {
    for check in checks {
        println!("{} {} - {}", check.icon(), check.name.bold(), check.message);
        if let Some(hint) = &check.hint {
            println!("    {} {}", "→".dimmed(), hint.dimmed());
        }
    }

    let summary = AuditSummary::from_checks(checks);
    println!();
    println!("{}", "-".repeat(50).dimmed());
    println!(
        "{} passed, {} warnings, {} failed",
        summary.passed.to_string().green().bold(),
        summary.warned.to_string().yellow().bold(),
        summary.failed.to_string().red().bold()
    );
    summary
}

fn check_trusted_endpoints(guard: &PolicyGuard) -> Vec<CheckResult> {
    TRUSTED_ENDPOINTS
        .iter()
        .map(|url| match guard.validate_endpoint(url) {
            Ok(()) => CheckResult::pass("Endpoint", format!("{} allowed", url)),
            // a narrowed domain list is a choice, not a hole
            Err(reason) => CheckResult::warn("Endpoint", format!("{} blocked ({})", url, reason)),
        })
        .collect()
}

fn check_hostile_endpoints(guard: &PolicyGuard) -> Vec<CheckResult> {
    HOSTILE_ENDPOINTS
        .iter()
        .map(|url| match guard.validate_endpoint(url) {
            Err(reason) => CheckResult::pass("Blocked", format!("{} ({})", url, reason)),
            Ok(()) => CheckResult::fail("Blocked", format!("{} was NOT blocked", url))
                .with_hint("Remove the host from allowed_domains or add a denied provider token"),
        })
        .collect()
}

/// Compare the substring heuristic with the full endpoint validation.
///
/// The guard may be stricter than the heuristic; an endpoint the guard
/// allows while the heuristic does not see Hugging Face is a warning.
fn check_endpoint_heuristic(guard: &PolicyGuard) -> Vec<CheckResult> {
    TRUSTED_ENDPOINTS
        .iter()
        .chain(HOSTILE_ENDPOINTS)
        .chain(LOOKALIKE_ENDPOINTS)
        .map(|url| {
            let looks_hf = guard.is_huggingface_endpoint(url);
            let allowed = guard.validate_endpoint(url).is_ok();
            match (looks_hf, allowed) {
                (true, true) => CheckResult::pass("Heuristic", format!("{} is Hugging Face", url)),
                (false, false) => CheckResult::pass("Heuristic", format!("{} is not Hugging Face", url)),
                (true, false) => {
                    CheckResult::pass("Heuristic", format!("{} only blocked by the guard", url))
                }
                (false, true) => CheckResult::warn(
                    "Heuristic",
                    format!("{} is allowed but does not look like Hugging Face", url),
                )
                .with_hint("Check allowed_domains for non Hugging Face hosts"),
            }
        })
        .collect()
}

fn check_configured_models(guard: &PolicyGuard) -> Vec<CheckResult> {
    RequestKind::ALL
        .iter()
        .flat_map(|&kind| {
            guard.candidates(kind).iter().map(move |model| {
                let endpoint = guard.build_endpoint(model);
                match guard.validate_target(&endpoint, model, kind) {
                    Ok(()) => CheckResult::pass("Model", format!("{} ({})", model, kind)),
                    Err(reason) => CheckResult::fail(
                        "Model",
                        format!("{} ({}) is unreachable: {}", model, kind, reason),
                    )
                    .with_hint("The model id contains a denied provider token; generation aborts here"),
                }
            })
        })
        .collect()
}

fn check_foreign_models(guard: &PolicyGuard) -> Vec<CheckResult> {
    FOREIGN_MODELS
        .iter()
        .map(|model| {
            let allowed_for: Vec<&str> = RequestKind::ALL
                .iter()
                .filter(|&&kind| guard.validate_model(model, kind).is_ok())
                .map(RequestKind::as_str)
                .collect();

            if allowed_for.is_empty() {
                CheckResult::pass("Foreign model", format!("{} rejected", model))
            } else {
                CheckResult::warn(
                    "Foreign model",
                    format!("{} is allowed for {}", model, allowed_for.join(", ")),
                )
                .with_hint("Only Hugging Face hosted models belong in the allow-list")
            }
        })
        .collect()
}

fn check_token_samples(guard: &PolicyGuard) -> Vec<CheckResult> {
    TOKEN_CASES
        .iter()
        .map(|&(token, expected)| {
            let shown = match token {
                None => "(none)".to_string(),
                Some("") => "(empty)".to_string(),
                Some(t) => format!("\"{}\"", t),
            };
            let accepted = guard.validate_credential(token).is_ok();
            if accepted == expected {
                let verdict = if accepted { "accepted" } else { "rejected" };
                CheckResult::pass("Token format", format!("{} {}", shown, verdict))
            } else {
                CheckResult::fail(
                    "Token format",
                    format!("{} accepted={} (expected {})", shown, accepted, expected),
                )
                .with_hint("credential_prefix should be \"hf_\"")
            }
        })
        .collect()
}

fn check_configured_token(config: &GuardConfig, guard: &PolicyGuard) -> CheckResult {
    match guard.validate_credential(config.token.as_deref()) {
        Ok(()) => CheckResult::pass("Configured token", "present with the expected prefix"),
        Err(ViolationReason::MissingCredential) => {
            CheckResult::warn("Configured token", "not set")
                .with_hint("Set HFGUARD_TOKEN or HF_TOKEN to run generations")
        }
        Err(reason) => CheckResult::fail("Configured token", reason.to_string())
            .with_hint("Hugging Face tokens start with hf_"),
    }
}
