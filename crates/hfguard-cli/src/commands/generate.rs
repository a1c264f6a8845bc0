//! Generation commands (generate, process)

use crate::console::CliConsole;
use colored::*;
use hfguard_core::client::{AttemptRecord, AttemptStatus, FallbackClient, GeneratedOutput};
use hfguard_core::config::GuardConfig;
use hfguard_core::error::{GuardError, UnifiedError, UserFriendlyError};
use hfguard_core::policy::RequestKind;
use std::path::PathBuf;

/// Arguments for `hfguard generate`
#[derive(Debug, Clone)]
pub struct GenerateArgs {
    pub prompt: String,
    pub kind: RequestKind,
    pub output: Option<PathBuf>,
    pub trace: bool,
}

/// One-shot generation with fallback over the allowed models
pub async fn generate(config: &GuardConfig, args: GenerateArgs) -> anyhow::Result<()> {
    let mut console = CliConsole::new(true);

    let guard = config.build_guard()?;
    let credential = config.credential(&guard).map_err(explain)?;
    let client = FallbackClient::http(&config.http, credential)?;

    console.start_progress(&format!(
        "Generating {} ({} candidate models)...",
        args.kind,
        guard.candidates(args.kind).len()
    ));
    let result = client
        .generate_traced(&guard, args.kind, &args.prompt)
        .await;
    console.finish_progress();

    let generation = result.map_err(explain)?;

    if args.trace {
        print_trace(&generation.attempts);
    }

    match &generation.output {
        GeneratedOutput::Image(image) => match &args.output {
            Some(path) => {
                tokio::fs::write(path, &image.bytes).await?;
                console.success(&format!(
                    "Saved {} ({} bytes) to {}",
                    image.mime_type,
                    image.len(),
                    path.display()
                ));
            }
            None => println!("{}", image.to_data_uri()),
        },
        GeneratedOutput::Text(text) => match &args.output {
            Some(path) => {
                tokio::fs::write(path, text.as_bytes()).await?;
                console.success(&format!("Saved text to {}", path.display()));
            }
            None => println!("{}", text),
        },
    }

    console.success(&format!(
        "Generated by {} after {} fallback(s)",
        generation.model.bold(),
        generation.fallbacks()
    ));
    Ok(())
}

/// Keyword-routed request printed in the caller-facing shape
pub async fn process(config: &GuardConfig, input: &str, json: bool) -> anyhow::Result<()> {
    let mut console = CliConsole::new(true);
    let interface = config.build_interface().map_err(explain)?;

    let kind = interface.detect_kind(input);
    tracing::info!(%kind, "routing input");

    console.start_progress(&format!("Processing {} request...", kind));
    let result = interface.process(input).await;
    console.finish_progress();

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if let Some(data) = &result.data {
        println!("{}", data);
    }

    if !result.success {
        anyhow::bail!(result.error.unwrap_or_else(|| "request failed".to_string()));
    }
    Ok(())
}

fn print_trace(attempts: &[AttemptRecord]) {
    println!("{}", "Attempts:".bold());
    for (index, attempt) in attempts.iter().enumerate() {
        let (icon, detail) = match &attempt.status {
            AttemptStatus::Succeeded => ("✓".green().bold(), "ok".green()),
            AttemptStatus::Failed {
                reason,
                is_policy_violation: true,
            } => ("✗".red().bold(), format!("blocked: {}", reason).red()),
            AttemptStatus::Failed { reason, .. } => ("⚠".yellow().bold(), reason.yellow()),
        };
        let stage = if attempt.reached_network() {
            "remote"
        } else {
            "local"
        };
        println!(
            "  {} {}. {} {} [{}]",
            icon,
            index + 1,
            attempt.model.bold(),
            attempt.endpoint.dimmed(),
            stage
        );
        println!("       {}", detail);
    }
    println!();
}

/// Attach the user-facing explanation and error code to the detailed error
fn explain(err: GuardError) -> anyhow::Error {
    tracing::debug!(
        code = err.error_code(),
        category = ?err.category(),
        context = ?err.context(),
        fatal = err.is_fatal(),
        "command failed"
    );
    let display = format!(
        "{}\n\n[{}]",
        UserFriendlyError::from(&err).format_display(),
        err.error_code()
    );
    anyhow::Error::new(err).context(display)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hfguard_core::policy::ViolationReason;

    #[test]
    fn test_explain_shows_code_but_not_reason() {
        let err = explain(GuardError::policy(ViolationReason::DeniedProvider("openai".into())));
        let top = err.to_string();
        assert!(top.contains("[HFGUARD_POLICY]"), "{top}");
        assert!(!top.contains("denied-provider"), "{top}");
        assert!(format!("{err:#}").contains("denied-provider"));
    }

    #[test]
    fn test_explain_for_unavailable() {
        let err = explain(GuardError::service_unavailable(RequestKind::Chat, 4));
        assert!(err.to_string().contains("[HFGUARD_UNAVAILABLE]"));
    }
}
