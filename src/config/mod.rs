//! Configuration loading and validation.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculate::DEFAULT_ADVICE_COUNT;
use crate::models::Rank;

/// Prefix for environment overrides, e.g. `RL_COACH__SERVER__PORT=9000`.
pub const ENV_PREFIX: &str = "RL_COACH";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to load config: {0}")]
    LoadError(#[from] ::config::ConfigError),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,

    /// Path every endpoint is mounted under
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_cors_origin() -> String {
    "*".to_string()
}

fn default_api_prefix() -> String {
    "/api/analysis".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origin: default_cors_origin(),
            api_prefix: default_api_prefix(),
        }
    }
}

/// Request defaults for the analysis endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Rank assumed when a request omits `current_rank`
    #[serde(default = "default_rank")]
    pub default_rank: String,

    /// Advice items per analysis
    #[serde(default = "default_advice_count")]
    pub advice_count: usize,
}

fn default_rank() -> String {
    Rank::Gold.to_string()
}

fn default_advice_count() -> usize {
    DEFAULT_ADVICE_COUNT
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            default_rank: default_rank(),
            advice_count: default_advice_count(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub analysis: AnalysisConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            server: ServerConfig::default(),
            analysis: AnalysisConfig::default(),
        }
    }
}

/// `RL_COACH__SECTION__KEY` overrides, with numbers and booleans parsed.
fn environment() -> ::config::Environment {
    ::config::Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Layered load: defaults, then the TOML file if it exists, then
    /// `RL_COACH__*` environment variables.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with_env(path, environment())
    }

    fn load_with_env(path: &Path, env: ::config::Environment) -> Result<Self, ConfigError> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::from(path).format(::config::FileFormat::Toml).required(false))
            .add_source(env)
            .build()?;
        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "Server port must be greater than 0".to_string(),
            ));
        }

        if !self.server.api_prefix.starts_with('/') {
            return Err(ConfigError::ValidationError(format!(
                "API prefix must start with '/': {}",
                self.server.api_prefix
            )));
        }

        if self.analysis.advice_count == 0 {
            return Err(ConfigError::ValidationError(
                "Advice count must be greater than 0".to_string(),
            ));
        }

        if Rank::parse(&self.analysis.default_rank).is_none() {
            return Err(ConfigError::ValidationError(format!(
                "Unknown default rank: {}",
                self.analysis.default_rank
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn env_with(vars: &[(&str, &str)]) -> ::config::Environment {
        environment().source(Some(
            vars.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        ))
    }

    fn no_env() -> ::config::Environment {
        env_with(&[])
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.log_level, "info");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.api_prefix, "/api/analysis");
        assert_eq!(config.analysis.default_rank, "Gold");
        assert_eq!(config.analysis.advice_count, 3);
    }

    #[test]
    fn test_config_validation_ok() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_bad_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_bad_prefix() {
        let mut config = AppConfig::default();
        config.server.api_prefix = "api".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_bad_advice_count() {
        let mut config = AppConfig::default();
        config.analysis.advice_count = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_unknown_rank() {
        let mut config = AppConfig::default();
        config.analysis.default_rank = "Unranked".to_string();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Unranked"));
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml_str = toml::to_string(&config).unwrap();

        // Should be parseable
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.server.api_prefix, parsed.server.api_prefix);
        assert_eq!(config.analysis.advice_count, parsed.analysis.advice_count);
    }

    #[test]
    fn test_from_file_partial() {
        let file = write_config(
            r#"
            log_level = "debug"

            [server]
            port = 9000

            [analysis]
            default_rank = "Diamond"
            "#,
        );

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.analysis.default_rank, "Diamond");
        assert_eq!(config.analysis.advice_count, 3);
    }

    #[test]
    fn test_from_file_invalid() {
        let file = write_config("[analysis]\nadvice_count = 0\n");
        assert!(matches!(
            AppConfig::from_file(file.path()),
            Err(ConfigError::ValidationError(_))
        ));

        let file = write_config("server = [");
        assert!(matches!(
            AppConfig::from_file(file.path()),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_from_file_missing() {
        let err = AppConfig::from_file(Path::new("/nonexistent/rl-coach.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError(_)));
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config =
            AppConfig::load_with_env(Path::new("/nonexistent/rl-coach.toml"), no_env()).unwrap();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.analysis.default_rank, "Gold");
    }

    #[test]
    fn test_load_reads_file() {
        let file = write_config("[server]\nport = 7000\n");
        let config = AppConfig::load_with_env(file.path(), no_env()).unwrap();
        assert_eq!(config.server.port, 7000);
        assert_eq!(config.server.api_prefix, "/api/analysis");
    }

    #[test]
    fn test_load_env_overrides_file() {
        let file = write_config("[server]\nport = 7000\n");
        let env = env_with(&[
            ("RL_COACH__SERVER__PORT", "7100"),
            ("RL_COACH__ANALYSIS__ADVICE_COUNT", "5"),
            ("RL_COACH__ANALYSIS__DEFAULT_RANK", "Champion"),
        ]);

        let config = AppConfig::load_with_env(file.path(), env).unwrap();
        assert_eq!(config.server.port, 7100);
        assert_eq!(config.analysis.advice_count, 5);
        assert_eq!(config.analysis.default_rank, "Champion");
    }

    #[test]
    fn test_load_env_invalid_value_fails_validation() {
        let env = env_with(&[("RL_COACH__ANALYSIS__ADVICE_COUNT", "0")]);
        let err = AppConfig::load_with_env(Path::new("/nonexistent/rl-coach.toml"), env).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }
}
