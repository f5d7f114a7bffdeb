use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use std::path::{Path, PathBuf};

use super::{types::Config, ConfigError};

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "FOOTSTATS_CONFIG";

/// Config file used when [`CONFIG_PATH_ENV`] is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Prefix of the per-key overrides. Nested keys are split on `__`.
pub const ENV_PREFIX: &str = "FOOTSTATS_";

/// Path from `FOOTSTATS_CONFIG`, or `config.toml` in the working directory.
pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Load configuration from a TOML file, then apply overrides such as
/// `FOOTSTATS_PROVIDER__API_KEY` or `FOOTSTATS_SERVER__PORT`.
///
/// `FOOTSTATS_CONFIG` itself is not treated as an override.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    Figment::new()
        .merge(Toml::file(path))
        .merge(overrides())
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))
}

fn overrides() -> Env {
    let path_key = CONFIG_PATH_ENV
        .trim_start_matches(ENV_PREFIX)
        .to_ascii_lowercase();
    Env::prefixed(ENV_PREFIX)
        .split("__")
        .ignore(&[path_key.as_str()])
}

/// Parse a TOML string without environment overrides.
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}
