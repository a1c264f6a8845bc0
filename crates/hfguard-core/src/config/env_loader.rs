//! Environment overrides

use super::defaults::TOKEN_ENV_VARS;
use super::guard_config::GuardConfig;
use super::logging_config::LoggingConfig;
use std::env;
use tracing::debug;

/// Load a `.env` file from the working directory, if present
pub fn load_dotenv() {
    if let Ok(path) = dotenv::dotenv() {
        debug!("loaded environment from {}", path.display());
    }
}

/// Apply `HFGUARD_*` variables and the token variables to `config`
pub fn apply_env_overrides(config: &mut GuardConfig) {
    apply_overrides_from(config, |key| env::var(key).ok());
}

/// Same as `apply_env_overrides` with an injectable lookup
pub fn apply_overrides_from<F>(config: &mut GuardConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(base_url) = get("HFGUARD_BASE_URL") {
        debug!("base_url overridden from environment");
        config.base_url = base_url;
    }

    config.logging.merge(LoggingConfig {
        level: get("HFGUARD_LOG_LEVEL").unwrap_or_default(),
        format: get("HFGUARD_LOG_FORMAT").unwrap_or_default(),
    });

    if let Some((var, token)) = TOKEN_ENV_VARS
        .iter()
        .find_map(|var| get(var).map(|token| (*var, token)))
    {
        debug!("token read from {}", var);
        config.token = Some(token);
    }
}
