//! Built-in policy defaults

use std::path::PathBuf;

/// Inference API base; model ids are appended as path segments
pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co/models";

pub const DEFAULT_ALLOWED_DOMAINS: &[&str] = &["api-inference.huggingface.co", "huggingface.co"];

/// Chat models, most preferred first
pub const DEFAULT_CHAT_MODELS: &[&str] = &["gpt2", "gpt2-medium", "gpt2-large", "gpt2-xl"];

/// Image models, most preferred first
pub const DEFAULT_IMAGE_MODELS: &[&str] = &[
    "black-forest-labs/FLUX.1-dev",
    "black-forest-labs/FLUX.1-schnell",
    "black-forest-labs/FLUX.1-schnell-4bit",
];

pub const DEFAULT_DENIED_PROVIDERS: &[&str] = &["replicate", "openai", "stability", "midjourney"];

/// Input containing any of these is routed to the image models
pub const DEFAULT_IMAGE_KEYWORDS: &[&str] = &[
    "imagen",
    "dibuja",
    "genera",
    "paisaje",
    "foto",
    "crea",
    "image",
    "picture",
    "draw",
    "photo",
    "landscape",
    "paint",
];

/// Environment variables checked for the token, in order
pub const TOKEN_ENV_VARS: &[&str] = &["HFGUARD_TOKEN", "HF_TOKEN"];

pub const CONFIG_FILE_NAME: &str = "hfguard.toml";

pub(crate) fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// `<config dir>/hfguard/hfguard.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("hfguard").join(CONFIG_FILE_NAME))
}
