//! Audit logging for anonymization operations
//!
//! Records what was replaced without recording the replacement itself:
//! original values appear only as SHA-256 digests, so the audit trail can
//! confirm that a given value was masked without ever storing plaintext PII
//! or the placeholder that now stands for it.

use crate::anonymization::models::AnonymizedText;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

/// One audit entry per anonymize call
#[derive(Debug, Serialize)]
struct AuditEntry {
    timestamp: DateTime<Utc>,
    total_detections: usize,
    detections_by_category: Vec<CategoryCount>,
    /// SHA-256 hex digests of the original values, sorted for determinism
    value_hashes: Vec<String>,
    processing_time_ms: u64,
}

#[derive(Debug, Serialize)]
struct CategoryCount {
    category: String,
    count: usize,
}

/// Append-only audit log writer
pub struct AuditLogger {
    file: Mutex<File>,
    path: PathBuf,
    json_format: bool,
}

impl AuditLogger {
    /// Open (or create) the audit log for appending
    pub fn new(path: PathBuf, json_format: bool) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open audit log: {}", path.display()))?;

        Ok(Self {
            file: Mutex::new(file),
            path,
            json_format,
        })
    }

    /// Record one completed anonymization pass
    pub fn log_anonymization(&self, result: &AnonymizedText) -> Result<()> {
        let mut by_category: Vec<CategoryCount> = result
            .stats_by_category
            .iter()
            .map(|(category, count)| CategoryCount {
                category: category.label().to_string(),
                count: *count,
            })
            .collect();
        by_category.sort_by(|a, b| a.category.cmp(&b.category));

        let mut value_hashes: Vec<String> = result
            .matches
            .iter()
            .map(|m| hash_value(&m.value))
            .collect();
        value_hashes.sort();

        let entry = AuditEntry {
            timestamp: result.timestamp,
            total_detections: result.total_matches(),
            detections_by_category: by_category,
            value_hashes,
            processing_time_ms: result.processing_time_ms,
        };

        let line = if self.json_format {
            serde_json::to_string(&entry).context("Failed to serialize audit entry")?
        } else {
            format!(
                "{} detections={} elapsed_ms={}",
                entry.timestamp.to_rfc3339(),
                entry.total_detections,
                entry.processing_time_ms
            )
        };

        let mut file = self
            .file
            .lock()
            .map_err(|_| anyhow::anyhow!("Audit log lock poisoned"))?;
        writeln!(file, "{line}")
            .with_context(|| format!("Failed to write audit log: {}", self.path.display()))?;

        Ok(())
    }
}

fn hash_value(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anonymization::mapper::SubstitutionMap;
    use crate::anonymization::models::{PiiCategory, PiiMatch};

    fn sample_result() -> AnonymizedText {
        let mut mapping = SubstitutionMap::new();
        mapping.insert("usuario111@ejemplo.com".into(), "real@correo.com".into());
        AnonymizedText::new(
            "contacto usuario111@ejemplo.com".into(),
            mapping,
            vec![PiiMatch::new(
                PiiCategory::Email,
                "real@correo.com".into(),
                9,
            )],
            3,
        )
    }

    #[test]
    fn test_json_entries_never_contain_plaintext() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.log");
        let logger = AuditLogger::new(path.clone(), true).unwrap();

        logger.log_anonymization(&sample_result()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("real@correo.com"));
        assert!(!content.contains("usuario111@ejemplo.com"));
        assert!(content.contains(&hash_value("real@correo.com")));
        assert!(content.contains("\"total_detections\":1"));
    }

    #[test]
    fn test_entries_append_one_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.log");
        let logger = AuditLogger::new(path.clone(), true).unwrap();

        logger.log_anonymization(&sample_result()).unwrap();
        logger.log_anonymization(&sample_result()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn test_plain_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.log");
        let logger = AuditLogger::new(path.clone(), false).unwrap();

        logger.log_anonymization(&sample_result()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("detections=1"));
        assert!(!content.contains("real@correo.com"));
    }
}
