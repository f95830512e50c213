//! Init command implementation

use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

const DEFAULT_CONFIG: &str = r#"# Velo configuration

[application]
# Log level: trace, debug, info, warn, error
log_level = "info"

[logging]
# Write JSON logs to local files in addition to the console
local_enabled = false
local_path = "./logs"
# Rotation: daily or hourly
local_rotation = "daily"

[anonymization]
enabled = true
# Detect and report without substituting
dry_run = false
# Custom pattern library TOML; omit to use the embedded default
# pattern_library = "./patterns/pii_patterns.toml"

[anonymization.audit]
enabled = false
log_path = "./audit/anonymization.log"
json_format = true
"#;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Destination path for the generated file
    #[arg(short, long, default_value = "velo.toml")]
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        if self.path.exists() && !self.force {
            println!(
                "Refusing to overwrite existing file: {} (use --force)",
                self.path.display()
            );
            return Ok(2);
        }

        std::fs::write(&self.path, DEFAULT_CONFIG)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;

        println!("Wrote default configuration to {}", self.path.display());
        Ok(0)
    }
}
