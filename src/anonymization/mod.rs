//! Reversible PII anonymization for judicial text
//!
//! Masks personal data in Colombian judicial documents before they leave
//! the trust boundary and restores the originals in whatever comes back.
//! Detection is regex-driven over an immutable input; every detected value
//! is replaced by a fictitious same-shape decoy, and the placeholder ->
//! original mapping is returned to the caller for the paired restore.
//!
//! # Quick start
//!
//! ```no_run
//! # fn main() -> anyhow::Result<()> {
//! let text = "El señor Carlos Rodríguez, C.C. 1.234.567.890, celular 300 123 4567.";
//! let (masked, mapping) = velo::anonymization::anonymize(text)?;
//!
//! // ... send `masked` to the external service ...
//! let response = serde_json::json!({ "respuesta": masked });
//!
//! let restored = velo::anonymization::restore(response, &mapping);
//! # Ok(())
//! # }
//! ```

pub mod audit;
pub mod config;
pub mod detector;
pub mod engine;
pub mod generator;
pub mod mapper;
pub mod models;
pub mod report;
pub mod restore;

pub use config::{AnonymizationConfig, AuditConfig};
pub use engine::AnonymizationEngine;
pub use mapper::SubstitutionMap;
pub use models::{AnonymizedText, PiiCategory, PiiMatch};
pub use report::DetectionReport;

use anyhow::Result;
use serde_json::Value;

/// Anonymize a text with a default-configured engine.
///
/// Convenience for one-off calls; construct an [`AnonymizationEngine`] and
/// reuse it when processing many texts.
pub fn anonymize(text: &str) -> Result<(String, SubstitutionMap)> {
    let engine = AnonymizationEngine::new(AnonymizationConfig::default())?;
    Ok(engine.anonymize(text)?.into_parts())
}

/// Restore every masked string inside a JSON record
pub fn restore(record: Value, mapping: &SubstitutionMap) -> Value {
    restore::restore_record(record, mapping)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convenience_round_trip() {
        let text = "Notificar a juan.perez@correo.com del auto.";
        let (masked, mapping) = anonymize(text).unwrap();
        assert!(!masked.contains("juan.perez@correo.com"));

        let record = serde_json::json!({ "texto": masked });
        let restored = restore(record, &mapping);
        assert_eq!(restored["texto"], serde_json::json!(text));
    }
}
