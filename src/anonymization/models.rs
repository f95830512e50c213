//! PII data models for judicial text anonymization

use crate::anonymization::mapper::SubstitutionMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// PII category enumeration covering the identifier classes found in
/// Colombian judicial documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PiiCategory {
    /// National ID / tax ID / passport numbers (cédula, T.I., NIT, RUT, pasaporte)
    Identity,
    /// Colombian mobile phone numbers
    Mobile,
    /// Payment card numbers (15 and 16 digit, plus last-four mentions)
    PaymentCard,
    /// Email addresses
    Email,
    /// Street addresses
    Address,
    /// Professional registry numbers (tarjeta profesional, registro)
    ProfessionalRegistry,
    /// Case/docket numbers (radicados)
    Docket,
    /// Person names in judicial or natural order
    PersonName,
    /// Court and institution names (juzgado, tribunal, fiscalía)
    Institution,
}

impl PiiCategory {
    /// Fixed detector execution order.
    ///
    /// Categories prone to false capture by loose digit-run patterns run first;
    /// the broad person-name heuristics run near the end so they can never claim
    /// a span that a stricter category already owns, and institutions run last
    /// because the name predicate explicitly defers them. This ordering is a
    /// pipeline invariant, not an implementation accident.
    pub const PIPELINE_ORDER: [PiiCategory; 9] = [
        Self::Identity,
        Self::Mobile,
        Self::PaymentCard,
        Self::Email,
        Self::Address,
        Self::ProfessionalRegistry,
        Self::Docket,
        Self::PersonName,
        Self::Institution,
    ];

    /// Get the stable label for the category (matches the pattern library TOML)
    pub fn label(&self) -> &'static str {
        match self {
            Self::Identity => "IDENTITY",
            Self::Mobile => "MOBILE",
            Self::PaymentCard => "PAYMENT_CARD",
            Self::Email => "EMAIL",
            Self::Address => "ADDRESS",
            Self::ProfessionalRegistry => "PROFESSIONAL_REGISTRY",
            Self::Docket => "DOCKET",
            Self::PersonName => "PERSON_NAME",
            Self::Institution => "INSTITUTION",
        }
    }

    /// Parse a category label from the pattern library
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "IDENTITY" => Some(Self::Identity),
            "MOBILE" | "PHONE" => Some(Self::Mobile),
            "PAYMENT_CARD" | "CARD" => Some(Self::PaymentCard),
            "EMAIL" => Some(Self::Email),
            "ADDRESS" => Some(Self::Address),
            "PROFESSIONAL_REGISTRY" | "PROFESSIONAL" => Some(Self::ProfessionalRegistry),
            "DOCKET" | "RADICADO" => Some(Self::Docket),
            "PERSON_NAME" | "PERSON" | "NAME" => Some(Self::PersonName),
            "INSTITUTION" | "COURT" => Some(Self::Institution),
            _ => None,
        }
    }
}

impl std::fmt::Display for PiiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A detected PII occurrence.
///
/// The start offset is advisory: substitution is textual (all occurrences of the
/// matched substring), not offset-based, because several detectors may claim the
/// same value at different positions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PiiMatch {
    /// Category of PII
    pub category: PiiCategory,
    /// Matched substring (the original value)
    pub value: String,
    /// Byte offset of the first occurrence in the scanned text
    pub start: usize,
}

impl PiiMatch {
    pub fn new(category: PiiCategory, value: String, start: usize) -> Self {
        Self {
            category,
            value,
            start,
        }
    }
}

/// Result of one `anonymize` call.
///
/// Holds the masked text together with the call-scoped mapping. The mapping is
/// consumed exactly once by the paired `restore` call and must not be cached or
/// persisted by the engine.
#[derive(Debug)]
pub struct AnonymizedText {
    /// Text with every detected value replaced by its placeholder
    pub masked_text: String,
    /// Reversible placeholder -> original association for this call
    pub mapping: SubstitutionMap,
    /// Detected PII occurrences, in pipeline order
    pub matches: Vec<PiiMatch>,
    /// Detection counts by category
    pub stats_by_category: HashMap<PiiCategory, usize>,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
    /// Timestamp of the anonymization
    pub timestamp: DateTime<Utc>,
}

impl AnonymizedText {
    pub fn new(
        masked_text: String,
        mapping: SubstitutionMap,
        matches: Vec<PiiMatch>,
        processing_time_ms: u64,
    ) -> Self {
        let mut stats_by_category = HashMap::new();
        for m in &matches {
            *stats_by_category.entry(m.category).or_insert(0) += 1;
        }

        Self {
            masked_text,
            mapping,
            matches,
            stats_by_category,
            processing_time_ms,
            timestamp: Utc::now(),
        }
    }

    /// Total number of detections
    pub fn total_matches(&self) -> usize {
        self.matches.len()
    }

    /// Check whether any PII was detected
    pub fn has_matches(&self) -> bool {
        !self.matches.is_empty()
    }

    /// Split into the `(masked_text, mapping)` pair of the public contract
    pub fn into_parts(self) -> (String, SubstitutionMap) {
        (self.masked_text, self.mapping)
    }
}
