//! Restore command implementation

use crate::anonymization::{restore::restore_record, SubstitutionMap};
use anyhow::Context;
use clap::Args;
use serde_json::Value;
use std::path::PathBuf;

/// Arguments for the restore command
#[derive(Args, Debug)]
pub struct RestoreArgs {
    /// Input file: a JSON record or plain masked text
    #[arg(short, long)]
    pub input: PathBuf,

    /// Mapping file written by the mask command
    #[arg(short, long)]
    pub mapping: PathBuf,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl RestoreArgs {
    /// Execute the restore command
    pub fn execute(&self) -> anyhow::Result<i32> {
        let content = std::fs::read_to_string(&self.input)
            .with_context(|| format!("Failed to read input: {}", self.input.display()))?;

        let mapping_json = std::fs::read_to_string(&self.mapping)
            .with_context(|| format!("Failed to read mapping: {}", self.mapping.display()))?;
        let mapping: SubstitutionMap =
            serde_json::from_str(&mapping_json).context("Failed to parse mapping JSON")?;

        // JSON input is restored structurally; anything else is treated as
        // plain masked text.
        let restored = match serde_json::from_str::<Value>(&content) {
            Ok(record) => {
                let restored = restore_record(record, &mapping);
                serde_json::to_string_pretty(&restored)
                    .context("Failed to serialize restored record")?
            }
            Err(_) => mapping.unmask(&content),
        };

        tracing::info!(entries = mapping.len(), "Restore finished");

        match self.output {
            Some(ref path) => std::fs::write(path, restored)
                .with_context(|| format!("Failed to write output: {}", path.display()))?,
            None => println!("{restored}"),
        }

        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_mapping(dir: &std::path::Path) -> PathBuf {
        let mut map = SubstitutionMap::new();
        map.insert("usuario222@ejemplo.com".into(), "real@correo.com".into());
        let path = dir.join("map.json");
        std::fs::write(&path, serde_json::to_string(&map).unwrap()).unwrap();
        path
    }

    #[test]
    fn test_restore_plain_text() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("masked.txt");
        let output = dir.path().join("restored.txt");
        std::fs::write(&input, "escribir a usuario222@ejemplo.com").unwrap();

        let args = RestoreArgs {
            input,
            mapping: write_mapping(dir.path()),
            output: Some(output.clone()),
        };
        assert_eq!(args.execute().unwrap(), 0);
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "escribir a real@correo.com"
        );
    }

    #[test]
    fn test_restore_json_record() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("record.json");
        let output = dir.path().join("restored.json");
        std::fs::write(
            &input,
            r#"{"respuesta": "contacto usuario222@ejemplo.com"}"#,
        )
        .unwrap();

        let args = RestoreArgs {
            input,
            mapping: write_mapping(dir.path()),
            output: Some(output.clone()),
        };
        assert_eq!(args.execute().unwrap(), 0);

        let restored: Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(
            restored["respuesta"],
            serde_json::json!("contacto real@correo.com")
        );
    }

    #[test]
    fn test_invalid_mapping_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("masked.txt");
        let mapping = dir.path().join("map.json");
        std::fs::write(&input, "texto").unwrap();
        std::fs::write(&mapping, "not json").unwrap();

        let args = RestoreArgs {
            input,
            mapping,
            output: None,
        };
        assert!(args.execute().is_err());
    }
}
