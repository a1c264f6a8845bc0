//! Demo run: audit, sample generations and a summary report

use super::audit::{self, AuditSummary};
use crate::console::CliConsole;
use anyhow::Context;
use chrono::{DateTime, Utc};
use colored::*;
use hfguard_core::config::GuardConfig;
use hfguard_core::policy::RequestKind;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

/// Sample prompts that should route to the image models
pub const IMAGE_PROMPTS: &[&str] = &[
    "Genera un paisaje montañoso al atardecer",
    "Crea una imagen de un robot en un jardín cyberpunk",
    "Dibuja un gato con alas volando sobre la ciudad",
    "Foto de un bosque mágico con luces flotantes",
    "Abstract art with vibrant colors, painted",
];

/// Sample prompts that should route to the chat models
pub const TEXT_PROMPTS: &[&str] = &[
    "Escribe un poema corto sobre la tecnología",
    "Cuéntame una historia de ciencia ficción",
    "Explica qué es la inteligencia artificial",
    "Describe el futuro de la energía renovable",
    "Write a dialogue between two robots",
];

/// Arguments for `hfguard demo`
#[derive(Debug, Clone)]
pub struct DemoArgs {
    pub token: Option<String>,
    pub report: Option<PathBuf>,
    pub per_kind: usize,
    pub delay_ms: u64,
    pub skip_generation: bool,
}

/// One sample request and what came back
#[derive(Debug, Clone, Serialize)]
pub struct DemoEntry {
    pub kind: RequestKind,
    pub prompt: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Summary written at the end of the demo
#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    pub generated_at: DateTime<Utc>,
    pub audit_passed: usize,
    pub audit_warnings: usize,
    pub audit_failed: usize,
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub entries: Vec<DemoEntry>,
}

impl DemoReport {
    pub fn new(audit: AuditSummary, entries: Vec<DemoEntry>) -> Self {
        let succeeded = entries.iter().filter(|e| e.success).count();
        Self {
            generated_at: Utc::now(),
            audit_passed: audit.passed,
            audit_warnings: audit.warned,
            audit_failed: audit.failed,
            total: entries.len(),
            succeeded,
            failed: entries.len() - succeeded,
            entries,
        }
    }

    /// Percentage of successful requests; 0 when nothing ran
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.succeeded as f64 * 100.0 / self.total as f64
        }
    }
}

/// `hfguard demo`
pub async fn run(mut config: GuardConfig, args: DemoArgs) -> anyhow::Result<()> {
    let console = CliConsole::new(true);
    console.print_header("hfguard Demo");

    if let Some(token) = args.token {
        config.token = Some(token);
    }

    let guard = config.build_guard()?;
    if let Err(reason) = guard.validate_credential(config.token.as_deref()) {
        console.warn(&format!("Demo stopped: token rejected ({})", reason));
        console.info("Pass --token hf_... or set HFGUARD_TOKEN to continue");
        return Ok(());
    }
    console.success("Guard initialized");

    console.print_section("Security checks");
    let checks = audit::run_checks(&config, &guard);
    let audit_summary = audit::print_checks(&checks);

    let mut entries = Vec::new();
    if !args.skip_generation {
        let interface = config.build_interface()?;
        let delay = Duration::from_millis(args.delay_ms);

        let prompts = IMAGE_PROMPTS
            .iter()
            .take(args.per_kind)
            .chain(TEXT_PROMPTS.iter().take(args.per_kind));

        console.print_section("Sample requests");
        for (index, prompt) in prompts.enumerate() {
            if index > 0 && !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }

            let kind = interface.detect_kind(prompt);
            println!("{} [{}] {}", "→".cyan(), kind, prompt);
            let result = interface.process(prompt).await;

            match (&result.data, &result.error) {
                (Some(data), _) => console.success(&preview(data)),
                (_, Some(error)) => console.warn(error),
                _ => {}
            }

            entries.push(DemoEntry {
                kind,
                prompt: prompt.to_string(),
                success: result.success,
                data: result.data,
                error: result.error,
            });
        }
    }

    let report = DemoReport::new(audit_summary, entries);
    print_report(&console, &report);

    if let Some(path) = &args.report {
        let json = serde_json::to_string_pretty(&report)?;
        tokio::fs::write(path, json)
            .await
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        console.success(&format!("Report written to {}", path.display()));
    }

    Ok(())
}

fn print_report(console: &CliConsole, report: &DemoReport) {
    console.print_section("Report");
    println!("  Generated at: {}", report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"));
    println!(
        "  Audit: {} passed, {} warnings, {} failed",
        report.audit_passed, report.audit_warnings, report.audit_failed
    );
    println!("  Requests: {}", report.total);
    if report.total > 0 {
        println!(
            "  Succeeded: {} ({:.1}%)",
            report.succeeded.to_string().green(),
            report.success_rate()
        );
        println!("  Failed: {}", report.failed.to_string().red());
    }

    let failures: Vec<_> = report.entries.iter().filter(|e| !e.success).collect();
    if !failures.is_empty() {
        println!();
        for (index, entry) in failures.iter().enumerate() {
            println!(
                "  {}. {}: {}",
                index + 1,
                entry.kind,
                entry.error.as_deref().unwrap_or_default()
            );
        }
    }
    console.print_separator();
}

/// First 100 characters of a result; data URIs are summarized
fn preview(data: &str) -> String {
    if let Some(rest) = data.strip_prefix("data:") {
        let mime = rest.split(';').next().unwrap_or_default();
        return format!("{} image ({} base64 chars)", mime, data.len());
    }
    let head: String = data.chars().take(100).collect();
    if head.len() < data.len() {
        format!("{}...", head)
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYWORDS: &[&str] = hfguard_core::config::DEFAULT_IMAGE_KEYWORDS;

    #[test]
    fn test_sample_prompts_route_as_labelled() {
        for prompt in IMAGE_PROMPTS {
            assert_eq!(RequestKind::detect(prompt, KEYWORDS), RequestKind::Image, "{prompt}");
        }
        for prompt in TEXT_PROMPTS {
            assert_eq!(RequestKind::detect(prompt, KEYWORDS), RequestKind::Chat, "{prompt}");
        }
    }

    #[test]
    fn test_report_totals() {
        let entry = |success: bool| DemoEntry {
            kind: RequestKind::Chat,
            prompt: "p".into(),
            success,
            data: success.then(|| "ok".to_string()),
            error: (!success).then(|| "failed".to_string()),
        };
        let report = DemoReport::new(
            AuditSummary::default(),
            vec![entry(true), entry(false), entry(true), entry(true)],
        );
        assert_eq!(report.total, 4);
        assert_eq!(report.succeeded, 3);
        assert_eq!(report.failed, 1);
        assert!((report.success_rate() - 75.0).abs() < f64::EPSILON);

        let empty = DemoReport::new(AuditSummary::default(), vec![]);
        assert_eq!(empty.success_rate(), 0.0);
    }

    #[test]
    fn test_report_serializes_without_empty_fields() {
        let report = DemoReport::new(
            AuditSummary::default(),
            vec![DemoEntry {
                kind: RequestKind::Image,
                prompt: "Dibuja".into(),
                success: false,
                data: None,
                error: Some("blocked".into()),
            }],
        );
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["entries"][0]["kind"], "image");
        assert!(json["entries"][0].get("data").is_none());
        assert!(json["generated_at"].is_string());
    }

    #[test]
    fn test_preview() {
        assert_eq!(preview("short"), "short");
        assert!(preview(&"x".repeat(150)).ends_with("..."));
        assert!(preview("data:image/png;base64,AAAA").starts_with("image/png image"));
    }
}
