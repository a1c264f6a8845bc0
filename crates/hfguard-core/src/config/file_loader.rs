//! File-based configuration loading

use super::guard_config::GuardConfig;
use crate::error::{GuardError, GuardResult};
use std::fs;
use std::path::Path;

/// Load configuration from a file.
///
/// The format follows the extension: `.toml`, `.yaml`/`.yml`, anything
/// else is parsed as JSON. Fields missing from the file keep their
/// defaults.
pub fn load_from_file(path: &Path) -> GuardResult<GuardConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        GuardError::config_with_context(
            format!("Failed to read config file: {}", e),
            format!("Reading configuration from '{}'", path.display()),
        )
    })?;

    let config: GuardConfig = match path.extension().and_then(|s| s.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(|e| {
            GuardError::config_with_context(
                format!("Failed to parse TOML config: {}", e),
                format!("Deserializing TOML configuration from '{}'", path.display()),
            )
        })?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content).map_err(|e| {
            GuardError::config_with_context(
                format!("Failed to parse YAML config: {}", e),
                format!("Deserializing YAML configuration from '{}'", path.display()),
            )
        })?,
        _ => serde_json::from_str(&content).map_err(|e| {
            GuardError::config_with_context(
                format!("Failed to parse JSON config: {}", e),
                format!("Deserializing JSON configuration from '{}'", path.display()),
            )
        })?,
    };

    Ok(config)
}
