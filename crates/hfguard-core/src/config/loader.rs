//! Layered configuration loading

use super::env_loader::apply_env_overrides;
use super::file_loader::load_from_file;
use super::guard_config::GuardConfig;
use crate::error::GuardResult;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Source of configuration data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Built-in defaults
    Default,
    /// A file that must exist
    File(PathBuf),
    /// A file used only if it exists
    OptionalFile(PathBuf),
    /// `HFGUARD_*` and token environment variables
    Environment,
}

/// Applies sources in order. A file source replaces the whole
/// configuration (its missing fields fall back to defaults); the
/// environment source only overrides what it sets.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    sources: Vec<ConfigSource>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_source(mut self, source: ConfigSource) -> Self {
        self.sources.push(source);
        self
    }

    pub fn with_defaults(self) -> Self {
        self.add_source(ConfigSource::Default)
    }

    pub fn with_file<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_source(ConfigSource::File(path.as_ref().to_path_buf()))
    }

    pub fn with_optional_file<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_source(ConfigSource::OptionalFile(path.as_ref().to_path_buf()))
    }

    pub fn with_env(self) -> Self {
        self.add_source(ConfigSource::Environment)
    }

    /// Load the configuration
    pub fn load(&self) -> GuardResult<GuardConfig> {
        let mut config = GuardConfig::default();

        for source in &self.sources {
            match source {
                ConfigSource::Default => {
                    debug!("loading default config");
                    config = GuardConfig::default();
                }
                ConfigSource::File(path) => {
                    debug!("loading config from file: {}", path.display());
                    config = load_from_file(path)?;
                }
                ConfigSource::OptionalFile(path) => {
                    if path.exists() {
                        debug!("loading config from file: {}", path.display());
                        config = load_from_file(path)?;
                    } else {
                        debug!("optional config file not found: {}", path.display());
                    }
                }
                ConfigSource::Environment => {
                    debug!("applying environment overrides");
                    apply_env_overrides(&mut config);
                }
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_empty_loader_yields_defaults() {
        let config = ConfigLoader::new().load().unwrap();
        assert_eq!(config, GuardConfig::default());
    }

    #[test]
    fn test_optional_file_missing_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let config = ConfigLoader::new()
            .with_defaults()
            .with_optional_file(temp_dir.path().join("absent.toml"))
            .load()
            .unwrap();
        assert_eq!(config, GuardConfig::default());
    }

    #[test]
    fn test_required_file_missing_fails() {
        let temp_dir = TempDir::new().unwrap();
        let result = ConfigLoader::new()
            .with_file(temp_dir.path().join("absent.toml"))
            .load();
        assert!(result.is_err());
    }

    #[test]
    fn test_file_source_applies() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("hfguard.json");
        fs::write(&path, r#"{"image_keywords": ["render"]}"#).unwrap();

        let config = ConfigLoader::new()
            .with_defaults()
            .with_file(&path)
            .load()
            .unwrap();
        assert_eq!(config.image_keywords, vec!["render"]);
    }
}
