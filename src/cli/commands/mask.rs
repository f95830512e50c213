//! Mask command implementation

use crate::anonymization::{AnonymizationEngine, DetectionReport};
use crate::config::VeloConfig;
use anyhow::Context;
use clap::Args;
use std::io::Read;
use std::path::PathBuf;

/// Arguments for the mask command
#[derive(Args, Debug)]
pub struct MaskArgs {
    /// Input text file ("-" reads stdin)
    #[arg(short, long)]
    pub input: String,

    /// Output file for the masked text (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output file for the substitution mapping (JSON)
    #[arg(short, long)]
    pub mapping_out: Option<PathBuf>,

    /// Detect and report without substituting
    #[arg(long)]
    pub dry_run: bool,
}

impl MaskArgs {
    /// Execute the mask command
    pub fn execute(&self, config: &VeloConfig) -> anyhow::Result<i32> {
        let text = self.read_input()?;

        let mut anon_config = config.anonymization.clone();
        if self.dry_run {
            anon_config.dry_run = true;
        }

        if !anon_config.enabled {
            tracing::warn!("Anonymization disabled; passing text through unchanged");
            self.write_output(&text)?;
            return Ok(0);
        }

        let engine = AnonymizationEngine::new(anon_config)?;
        let result = engine.anonymize(&text)?;

        tracing::info!(
            detections = result.total_matches(),
            elapsed_ms = result.processing_time_ms,
            "Mask pass finished"
        );

        if engine.is_dry_run() {
            let mut report = DetectionReport::new();
            report.add_result(&result);
            println!("{}", report.format_summary());
            return Ok(0);
        }

        if let Some(ref path) = self.mapping_out {
            // The mapping file reverses the masking; it is as sensitive as
            // the original text.
            tracing::warn!(path = %path.display(), "Writing mapping file; protect it like the source text");
            let json = serde_json::to_string_pretty(&result.mapping)
                .context("Failed to serialize mapping")?;
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write mapping: {}", path.display()))?;
        }

        self.write_output(&result.masked_text)?;
        Ok(0)
    }

    fn read_input(&self) -> anyhow::Result<String> {
        if self.input == "-" {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        } else {
            std::fs::read_to_string(&self.input)
                .with_context(|| format!("Failed to read input file: {}", self.input))
        }
    }

    fn write_output(&self, content: &str) -> anyhow::Result<()> {
        match self.output {
            Some(ref path) => std::fs::write(path, content)
                .with_context(|| format!("Failed to write output: {}", path.display())),
            None => {
                println!("{content}");
                Ok(())
            }
        }
    }
}
