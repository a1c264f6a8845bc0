//! CLI argument definitions using clap
//!
//! - hfguard generate "task"          # One-shot generation (chat by default)
//! - hfguard process "input"          # Keyword-routed request, caller-facing result
//! - hfguard check endpoint|model|token
//! - hfguard models / audit / demo    # Inspection and self-test commands

use clap::{Parser, Subcommand, ValueEnum};
use hfguard_core::policy::RequestKind;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hfguard")]
#[command(about = "hfguard - Hugging Face only inference client with model fallback")]
#[command(
    long_about = r#"hfguard - Hugging Face only inference client with model fallback

Every request is checked against the domain allow-list, the denied-provider
tokens, the model allow-list and the credential prefix before any network
call. Generation tries the allowed models for the request kind in order.

USAGE:
  hfguard generate "Explain transformers"       # Chat generation
  hfguard generate --kind image -o out.png "A cat"
  hfguard process "Dibuja un paisaje"           # Kind detected from keywords
  hfguard check endpoint https://huggingface.co/gpt2
  hfguard audit                                  # Security self-audit

The token is read from HFGUARD_TOKEN or HF_TOKEN (a .env file is honored)."#
)]
#[command(version)]
pub struct Cli {
    /// Path to a configuration file (.toml, .yaml, .json)
    #[arg(long, short = 'c', global = true, env = "HFGUARD_CONFIG")]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log output format
    #[arg(long, global = true, value_enum)]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate text or an image, falling back across allowed models
    #[command(verbatim_doc_comment)]
    Generate {
        /// Prompt sent as `inputs`
        prompt: String,

        /// Request kind: chat or image
        #[arg(long, short, default_value = "chat")]
        kind: RequestKind,

        /// Write image output to this file instead of printing a data URI
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Print every attempt (model, endpoint, outcome)
        #[arg(long)]
        trace: bool,
    },

    /// Route free-form input by keyword and print the caller-facing result
    #[command(verbatim_doc_comment)]
    Process {
        /// User input; image keywords select the image models
        input: String,

        /// Print the raw `{success, data|error}` JSON
        #[arg(long)]
        json: bool,
    },

    /// Run a single policy check without making any request
    #[command(verbatim_doc_comment)]
    Check {
        #[command(subcommand)]
        target: CheckTarget,
    },

    /// Show allowed models, domains and denied provider tokens
    #[command(verbatim_doc_comment)]
    Models {
        /// Only list models for this kind
        #[arg(long, short)]
        kind: Option<RequestKind>,
    },

    /// Security self-audit of the active configuration
    #[command(verbatim_doc_comment)]
    Audit,

    /// Audit, a few sample generations and a summary report
    #[command(verbatim_doc_comment)]
    Demo {
        /// Token to use instead of the configured one
        #[arg(long)]
        token: Option<String>,

        /// Write the report as JSON to this path
        #[arg(long)]
        report: Option<PathBuf>,

        /// Sample prompts to run per kind
        #[arg(long, default_value_t = 2)]
        per_kind: usize,

        /// Pause between requests, in milliseconds
        #[arg(long, default_value_t = 1000)]
        delay_ms: u64,

        /// Only run the audit part
        #[arg(long)]
        skip_generation: bool,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum CheckTarget {
    /// Validate an endpoint URL (domain and denied providers)
    Endpoint { url: String },

    /// Validate a model id against the allow-list
    Model {
        model: String,

        /// Kind to check against; any kind when omitted
        #[arg(long, short)]
        kind: Option<RequestKind>,
    },

    /// Validate a token's format (defaults to the configured token)
    Token { token: Option<String> },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Compact,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pretty => "pretty",
            Self::Compact => "compact",
            Self::Json => "json",
        }
    }
}
