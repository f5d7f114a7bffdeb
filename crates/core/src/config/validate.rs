use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Provider section exists (enforced by serde)
/// - Server port is not 0
/// - Provider API key and competition are not empty
/// - Provider timeout is not 0
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    // Server validation
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    // Provider validation
    if config.provider.api_key.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "provider.api_key cannot be empty".to_string(),
        ));
    }
    if config.provider.competition.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "provider.competition cannot be empty".to_string(),
        ));
    }
    if config.provider.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "provider.timeout_secs cannot be 0".to_string(),
        ));
    }

    Ok(())
}
