//! Application settings and configuration management

use crate::error::{AppError, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default location of the optional configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`]
pub const CONFIG_PATH_ENV: &str = "DATA_GATEWAY_CONFIG";

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Where the producer writes the scraped document
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataConfig {
    #[serde(default = "default_file_path")]
    pub file_path: String,
}

fn default_file_path() -> String {
    "scraped_data.json".to_string()
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            file_path: default_file_path(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Settings {
    /// Load settings from the configuration file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(config_path(std::env::var(CONFIG_PATH_ENV).ok()))
    }

    /// Load settings from a specific configuration file path
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_with_env(path, environment())
    }

    fn load_with_env<P: AsRef<Path>>(path: P, env: Environment) -> Result<Self> {
        let config = Config::builder()
            .set_default("server.host", default_host())?
            .set_default("server.port", i64::from(default_port()))?
            .set_default("data.file_path", default_file_path())?
            .set_default("logging.level", default_log_level())?
            .set_default("logging.format", default_log_format())?
            // A missing file is fine, defaults and env still apply
            .add_source(File::from(path.as_ref()).required(false))
            // Override with environment variables (prefixed with DATA_GATEWAY__)
            .add_source(env)
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::invalid_config("Server port cannot be 0"));
        }

        if self.server.host.trim().is_empty() {
            return Err(AppError::invalid_config("Server host cannot be empty"));
        }

        if self.data.file_path.trim().is_empty() {
            return Err(AppError::invalid_config("Data file path cannot be empty"));
        }

        if !["json", "pretty"].contains(&self.logging.format.as_str()) {
            return Err(AppError::invalid_config(format!(
                "Invalid log format '{}'. Must be 'json' or 'pretty'",
                self.logging.format
            )));
        }

        Ok(())
    }

    /// The `host:port` string the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// The config file to read: the override if one is set, else the default
fn config_path(override_path: Option<String>) -> String {
    override_path
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string())
}

fn environment() -> Environment {
    Environment::with_prefix("DATA_GATEWAY")
        .separator("__")
        .try_parsing(true)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            data: DataConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
