//! Allow-list listing command

use crate::console::CliConsole;
use colored::*;
use hfguard_core::config::GuardConfig;
use hfguard_core::policy::RequestKind;

/// List allowed models in preference order, plus domains and denied tokens
pub fn list(config: &GuardConfig, kind: Option<RequestKind>) -> anyhow::Result<()> {
    let console = CliConsole::new(true);
    let guard = config.build_guard()?;

    console.print_header("Allowed Models");

    let kinds: Vec<RequestKind> = match kind {
        Some(kind) => vec![kind],
        None => RequestKind::ALL.to_vec(),
    };

    for kind in kinds {
        console.print_section(kind.as_str());
        for (index, model) in guard.candidates(kind).iter().enumerate() {
            let marker = if index == 0 { "(preferred)".dimmed() } else { "".normal() };
            println!("  {}. {} {}", index + 1, model.green(), marker);
        }
    }

    if kind.is_none() {
        console.print_section("Endpoint");
        println!("  {}", guard.base_url());

        console.print_section("Allowed domains");
        for domain in guard.domains().iter() {
            println!("  • {}", domain);
        }

        console.print_section("Denied provider tokens");
        for token in guard.denied_providers().iter() {
            println!("  • {}", token.red());
        }
    }

    println!();
    Ok(())
}
