//! hfguard CLI
//!
//! Thin front end over `hfguard-core`:
//!
//! - `hfguard generate "prompt" --kind image`  # one-shot generation with fallback
//! - `hfguard process "Dibuja un paisaje"`     # keyword routing, `{success, data|error}`
//! - `hfguard check endpoint <url>`            # run a single policy check
//! - `hfguard models`                          # show the allow-lists
//! - `hfguard audit`                           # security self-audit of the active config
//! - `hfguard demo --report demo.json`         # audit plus sample prompts and a report
//!
//! Logging goes to stderr. `RUST_LOG` wins over the configured level.

mod args;
mod commands;
mod console;
mod logging;
mod router;

use args::Cli;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    router::route(cli).await
}
