//! CLI interface and argument parsing

pub mod commands;

use clap::{Parser, Subcommand};

/// Velo - reversible PII anonymization for judicial text
#[derive(Parser, Debug)]
#[command(name = "velo")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "velo.toml", env = "VELO_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "VELO_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Anonymize a text, writing the masked text and its mapping
    Mask(commands::mask::MaskArgs),

    /// Restore originals in a masked text or JSON record
    Restore(commands::restore::RestoreArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_mask() {
        let cli = Cli::parse_from(["velo", "mask", "--input", "acta.txt"]);
        assert_eq!(cli.config, "velo.toml");
        assert!(matches!(cli.command, Commands::Mask(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["velo", "--config", "custom.toml", "mask", "--input", "a.txt"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_restore() {
        let cli = Cli::parse_from([
            "velo", "restore", "--input", "out.json", "--mapping", "map.json",
        ]);
        assert!(matches!(cli.command, Commands::Restore(_)));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["velo", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["velo", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["velo", "--log-level", "debug", "init"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }
}
