use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::PathBuf;

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub provider: ProviderConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::from([0, 0, 0, 0])
}

fn default_port() -> u16 {
    8080
}

/// football-data.org provider configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderConfig {
    /// API token sent as `X-Auth-Token`.
    pub api_key: String,
    /// API base URL (default: https://api.football-data.org/v4)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Competition code (default: "PD", La Liga)
    #[serde(default = "default_competition")]
    pub competition: String,
    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
}

fn default_base_url() -> String {
    "https://api.football-data.org/v4".to_string()
}

fn default_competition() -> String {
    "PD".to_string()
}

fn default_timeout() -> u32 {
    30
}

/// CSV/JSON export configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

/// Sanitized config for API responses (secrets redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub provider: SanitizedProviderConfig,
    pub server: ServerConfig,
    pub export: ExportConfig,
}

/// Sanitized provider config (API key hidden)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedProviderConfig {
    pub base_url: String,
    pub competition: String,
    pub api_key_configured: bool,
    pub timeout_secs: u32,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            provider: SanitizedProviderConfig {
                base_url: config.provider.base_url.clone(),
                competition: config.provider.competition.clone(),
                api_key_configured: !config.provider.api_key.is_empty(),
                timeout_secs: config.provider.timeout_secs,
            },
            server: config.server.clone(),
            export: config.export.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml = r#"
[provider]
api_key = "secret"
base_url = "http://localhost:9000/v4"
competition = "PL"
timeout_secs = 10

[server]
host = "127.0.0.1"
port = 9000

[export]
output_dir = "/tmp/footstats"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.provider.api_key, "secret");
        assert_eq!(config.provider.base_url, "http://localhost:9000/v4");
        assert_eq!(config.provider.competition, "PL");
        assert_eq!(config.provider.timeout_secs, 10);
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host.to_string(), "127.0.0.1");
        assert_eq!(config.export.output_dir.to_str().unwrap(), "/tmp/footstats");
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let toml = r#"
[provider]
api_key = "secret"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.provider.base_url, "https://api.football-data.org/v4");
        assert_eq!(config.provider.competition, "PD");
        assert_eq!(config.provider.timeout_secs, 30); // default
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host.to_string(), "0.0.0.0");
        assert_eq!(config.export.output_dir.to_str().unwrap(), "output");
    }

    #[test]
    fn test_deserialize_missing_provider_fails() {
        let toml = r#"
[server]
port = 8080
"#;
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_missing_api_key_fails() {
        let toml = r#"
[provider]
competition = "PD"
"#;
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_sanitized_config_hides_api_key() {
        let config: Config = toml::from_str(
            r#"
[provider]
api_key = "secret-key"
"#,
        )
        .unwrap();

        let sanitized = SanitizedConfig::from(&config);
        assert!(sanitized.provider.api_key_configured);
        assert_eq!(sanitized.provider.competition, "PD");
        assert_eq!(sanitized.server.port, 8080);

        let json = serde_json::to_string(&sanitized).unwrap();
        assert!(!json.contains("secret-key"));
    }
}
