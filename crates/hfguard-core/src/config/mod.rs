//! Configuration management
//!
//! Defaults, then an optional file, then environment overrides. The
//! result is plain data; `GuardConfig::build_guard` turns it into the
//! immutable `PolicyGuard`.

mod defaults;
mod env_loader;
mod file_loader;
mod guard_config;
mod http_config;
mod loader;
mod logging_config;

pub use defaults::{
    CONFIG_FILE_NAME, DEFAULT_ALLOWED_DOMAINS, DEFAULT_BASE_URL, DEFAULT_CHAT_MODELS,
    DEFAULT_DENIED_PROVIDERS, DEFAULT_IMAGE_KEYWORDS, DEFAULT_IMAGE_MODELS, TOKEN_ENV_VARS,
    default_config_path,
};
pub use env_loader::{apply_env_overrides, apply_overrides_from, load_dotenv};
pub use file_loader::load_from_file;
pub use guard_config::{GuardConfig, ModelLists};
pub use http_config::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT, HttpConfig};
pub use loader::{ConfigLoader, ConfigSource};
pub use logging_config::LoggingConfig;

use crate::error::GuardResult;
use std::path::Path;

/// Load configuration the way the CLI does: defaults, then `path` (or the
/// per-user default file if it exists), then `.env` and the environment.
pub fn load_config(path: Option<&Path>) -> GuardResult<GuardConfig> {
    let mut loader = ConfigLoader::new().with_defaults();

    loader = match path {
        Some(path) => loader.with_file(path),
        None => match default_config_path() {
            Some(default_path) => loader.with_optional_file(default_path),
            None => loader,
        },
    };

    load_dotenv();
    loader.with_env().load()
}
