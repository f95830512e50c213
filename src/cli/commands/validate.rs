//! Validate config command implementation

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => {
                println!("Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        match config.validate() {
            Ok(_) => {
                println!("Configuration is valid");
                println!();
                println!("Configuration Summary:");
                println!("  Log Level: {}", config.application.log_level);
                println!("  File Logging: {}", config.logging.local_enabled);
                println!("  Anonymization Enabled: {}", config.anonymization.enabled);
                println!("  Dry Run: {}", config.anonymization.dry_run);
                println!(
                    "  Pattern Library: {}",
                    config
                        .anonymization
                        .pattern_library
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "(embedded default)".to_string())
                );
                println!("  Audit Logging: {}", config.anonymization.audit.enabled);
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("Configuration validation failed");
                println!("   Error: {e}");
                println!();
                Ok(2)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_missing_file_returns_config_error_code() {
        let args = ValidateArgs {};
        let code = args.execute("/nonexistent/velo.toml").unwrap();
        assert_eq!(code, 2);
    }

    #[test]
    fn test_validate_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("velo.toml");
        std::fs::write(&path, "[application]\nlog_level = \"info\"\n").unwrap();

        let args = ValidateArgs {};
        let code = args.execute(path.to_str().unwrap()).unwrap();
        assert_eq!(code, 0);
    }
}
