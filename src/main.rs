// Velo - Reversible PII Anonymization for Judicial Text
// Copyright (c) 2025 Velo Contributors
// Licensed under the MIT License

use clap::Parser;
use std::process;
use velo::cli::{Cli, Commands};
use velo::config::load_or_default;
use velo::logging::init_logging;

fn main() {
    // .env is optional; absence is not an error.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = match load_or_default(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            process::exit(2);
        }
    };

    let log_level = cli
        .log_level
        .as_deref()
        .unwrap_or(&config.application.log_level);
    let _guard = match init_logging(log_level, &config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Velo - Reversible PII Anonymization"
    );

    let exit_code = match execute_command(&cli, &config) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5
        }
    };

    process::exit(exit_code);
}

/// Execute the CLI command
fn execute_command(cli: &Cli, config: &velo::config::VeloConfig) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Mask(args) => args.execute(config),
        Commands::Restore(args) => args.execute(),
        Commands::ValidateConfig(args) => args.execute(&cli.config),
        Commands::Init(args) => args.execute(),
    }
}
