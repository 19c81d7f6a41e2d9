use dioxus_logger::tracing::Level;

use crate::error::config::ConfigError;

const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub log_level: Level,
}

impl Config {
    /// Reads configuration from environment variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` is not set
    /// - `Err(ConfigError::InvalidEnvValue)` - An optional variable failed to parse
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let database_max_connections = match std::env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(value) => parse_max_connections(&value)?,
            Err(_) => DEFAULT_DATABASE_MAX_CONNECTIONS,
        };

        let log_level = match std::env::var("LOG_LEVEL") {
            Ok(value) => parse_log_level(&value)?,
            Err(_) => Level::INFO,
        };

        Ok(Self {
            database_url,
            database_max_connections,
            log_level,
        })
    }
}

fn parse_max_connections(value: &str) -> Result<u32, ConfigError> {
    match value.parse::<u32>() {
        Ok(0) => Err(ConfigError::InvalidEnvValue {
            var: "DATABASE_MAX_CONNECTIONS".to_string(),
            reason: "must be greater than 0".to_string(),
        }),
        Ok(max) => Ok(max),
        Err(e) => Err(ConfigError::InvalidEnvValue {
            var: "DATABASE_MAX_CONNECTIONS".to_string(),
            reason: e.to_string(),
        }),
    }
}

fn parse_log_level(value: &str) -> Result<Level, ConfigError> {
    value
        .parse::<Level>()
        .map_err(|e| ConfigError::InvalidEnvValue {
            var: "LOG_LEVEL".to_string(),
            reason: e.to_string(),
        })
}
