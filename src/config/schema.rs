//! Configuration schema types

use crate::anonymization::AnonymizationConfig;
use serde::{Deserialize, Serialize};

/// Root configuration, mapped from the TOML file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VeloConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Anonymization engine configuration
    #[serde(default)]
    pub anonymization: AnonymizationConfig,
}

impl Default for VeloConfig {
    fn default() -> Self {
        Self {
            application: ApplicationConfig::default(),
            logging: LoggingConfig::default(),
            anonymization: AnonymizationConfig::default(),
        }
    }
}

impl VeloConfig {
    /// Validate the full configuration
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.logging.validate()?;
        self.anonymization
            .validate()
            .map_err(|e| format!("anonymization: {e}"))?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    pub fn validate(&self) -> Result<(), String> {
        match self.log_level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(format!(
                "Invalid log_level '{other}'. Must be one of: trace, debug, info, warn, error"
            )),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Write logs to local files in addition to the console
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for local log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Log rotation strategy (daily or hourly)
    #[serde(default = "default_rotation")]
    pub local_rotation: String,
}

fn default_log_path() -> String {
    "./logs".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_rotation(),
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<(), String> {
        match self.local_rotation.as_str() {
            "daily" | "hourly" => Ok(()),
            other => Err(format!(
                "Invalid local_rotation '{other}'. Must be 'daily' or 'hourly'"
            )),
        }
    }
}
