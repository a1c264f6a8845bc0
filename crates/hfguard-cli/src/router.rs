//! Command routing logic for CLI

use crate::args::{CheckTarget, Cli, Commands};
use crate::commands;
use crate::logging;
use anyhow::Context;
use hfguard_core::config::{GuardConfig, load_config};
use std::path::PathBuf;

/// Load configuration, install logging and dispatch the subcommand
pub async fn route(cli: Cli) -> anyhow::Result<()> {
    let mut config = load_cli_config(cli.config.as_deref())?;
    if let Some(format) = cli.log_format {
        config.logging.format = format.as_str().to_string();
    }
    logging::init(&config.logging, cli.verbose);

    tracing::debug!(base_url = %config.base_url, "configuration loaded");

    match cli.command {
        Commands::Generate {
            prompt,
            kind,
            output,
            trace,
        } => {
            commands::generate::generate(
                &config,
                commands::generate::GenerateArgs {
                    prompt,
                    kind,
                    output,
                    trace,
                },
            )
            .await
        }
        Commands::Process { input, json } => {
            commands::generate::process(&config, &input, json).await
        }
        Commands::Check { target } => route_check(&config, target),
        Commands::Models { kind } => commands::models::list(&config, kind),
        Commands::Audit => commands::audit::audit(&config),
        Commands::Demo {
            token,
            report,
            per_kind,
            delay_ms,
            skip_generation,
        } => {
            commands::demo::run(
                config,
                commands::demo::DemoArgs {
                    token,
                    report,
                    per_kind,
                    delay_ms,
                    skip_generation,
                },
            )
            .await
        }
    }
}

fn route_check(config: &GuardConfig, target: CheckTarget) -> anyhow::Result<()> {
    match target {
        CheckTarget::Endpoint { url } => commands::check::endpoint(config, &url),
        CheckTarget::Model { model, kind } => commands::check::model(config, &model, kind),
        CheckTarget::Token { token } => commands::check::token(config, token.as_deref()),
    }
}

fn load_cli_config(path: Option<&str>) -> anyhow::Result<GuardConfig> {
    let path = path.map(|p| PathBuf::from(shellexpand::tilde(p).into_owned()));
    load_config(path.as_deref()).with_context(|| match &path {
        Some(path) => format!("Failed to load configuration from {}", path.display()),
        None => "Failed to load configuration".to_string(),
    })
}
