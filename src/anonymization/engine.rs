//! Main anonymization engine
//!
//! The [`AnonymizationEngine`] orchestrates the full mask cycle: detection
//! over an immutable input, fictitious value generation, mapping
//! construction and a single substitution pass at the end. The paired
//! restore direction delegates to [`restore`](crate::anonymization::restore).
//!
//! # Pipeline
//!
//! Detectors run in [`PiiCategory::PIPELINE_ORDER`] against the original,
//! unmodified text. Every accepted match receives a placeholder that is
//! checked against the uniqueness invariants before it enters the mapping;
//! a match whose placeholder cannot be issued within the retry budget is
//! skipped whole, so the output never contains a half-substituted value.

use crate::anonymization::{
    audit::AuditLogger,
    config::AnonymizationConfig,
    detector::{patterns::PatternRegistry, regex::RegexDetector, PiiDetector},
    generator::{DecoyPools, ValueGenerator},
    mapper::SubstitutionMap,
    models::{AnonymizedText, PiiCategory, PiiMatch},
    restore,
};
use anyhow::{Context, Result};
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;

/// Retries per match before the span is skipped whole
const PLACEHOLDER_RETRIES: usize = 8;

/// Reversible anonymization engine for judicial text.
///
/// Thread-safe; share across threads with `Arc`. All per-call state (the
/// mapping, issued decoys) lives on the stack of `anonymize`, so concurrent
/// calls never interfere.
pub struct AnonymizationEngine {
    config: AnonymizationConfig,
    detector: Arc<dyn PiiDetector>,
    pools: DecoyPools,
    audit_logger: Option<AuditLogger>,
}

impl AnonymizationEngine {
    /// Create an engine from configuration.
    ///
    /// Loads the pattern library (embedded default or the configured file)
    /// and opens the audit log when auditing is enabled.
    pub fn new(config: AnonymizationConfig) -> Result<Self> {
        config
            .validate()
            .context("Invalid anonymization configuration")?;

        let detector: Arc<dyn PiiDetector> = if let Some(ref pattern_path) = config.pattern_library
        {
            let registry = PatternRegistry::from_file(pattern_path)?;
            Arc::new(RegexDetector::with_registry(registry))
        } else {
            Arc::new(RegexDetector::new()?)
        };

        let audit_logger = if config.audit.enabled {
            Some(AuditLogger::new(
                config.audit.log_path.clone(),
                config.audit.json_format,
            )?)
        } else {
            None
        };

        Ok(Self {
            config,
            detector,
            pools: DecoyPools::default(),
            audit_logger,
        })
    }

    /// Replace an engine's detector (tests, alternative rule sets)
    pub fn with_detector(mut self, detector: Arc<dyn PiiDetector>) -> Self {
        self.detector = detector;
        self
    }

    /// Anonymize a text, returning the masked text and its call-scoped
    /// mapping.
    ///
    /// In dry-run mode the returned text is the unmodified input, the
    /// mapping is empty and `matches` reports what would have been replaced.
    pub fn anonymize(&self, text: &str) -> Result<AnonymizedText> {
        let start = Instant::now();

        let mut mapping = SubstitutionMap::new();
        let mut matches: Vec<PiiMatch> = Vec::new();
        let mut generator = ValueGenerator::new(&self.pools);

        for category in PiiCategory::PIPELINE_ORDER {
            let found = self
                .detector
                .find(category, text)
                .with_context(|| format!("Detection failed for category {category}"))?;

            for m in found {
                // A stricter earlier category may have claimed this exact
                // value already (11-12 digit identity/docket overlap).
                if mapping.contains_original(&m.value)
                    || matches.iter().any(|p| p.value == m.value)
                {
                    continue;
                }

                if self.config.dry_run {
                    matches.push(m);
                    continue;
                }

                match self.issue_placeholder(&mut generator, category, &m.value, text, &mapping) {
                    Some(placeholder) => {
                        if mapping.insert(placeholder, m.value.clone()) {
                            matches.push(m);
                        }
                    }
                    None => {
                        tracing::warn!(
                            category = %category,
                            "Placeholder generation exhausted retries; span left untouched"
                        );
                    }
                }
            }
        }

        let masked_text = if self.config.dry_run {
            text.to_string()
        } else {
            mapping.mask(text)
        };

        let processing_time = start.elapsed().as_millis() as u64;
        let result = AnonymizedText::new(masked_text, mapping, matches, processing_time);

        tracing::debug!(
            detections = result.total_matches(),
            elapsed_ms = processing_time,
            dry_run = self.config.dry_run,
            "Anonymization pass complete"
        );

        if let Some(ref logger) = self.audit_logger {
            logger.log_anonymization(&result)?;
        }

        Ok(result)
    }

    /// Restore every masked string inside a JSON record
    pub fn restore(&self, record: Value, mapping: &SubstitutionMap) -> Value {
        restore::restore_record(record, mapping)
    }

    /// Restore a masked text directly
    pub fn restore_text(&self, text: &str, mapping: &SubstitutionMap) -> String {
        mapping.unmask(text)
    }

    /// Generate a placeholder that satisfies every uniqueness invariant:
    /// distinct from the original, not an existing mapping key, absent from
    /// the input text, and never nested with an already-issued placeholder.
    fn issue_placeholder(
        &self,
        generator: &mut ValueGenerator<'_>,
        category: PiiCategory,
        original: &str,
        text: &str,
        mapping: &SubstitutionMap,
    ) -> Option<String> {
        for _ in 0..PLACEHOLDER_RETRIES {
            let candidate = generator.generate(category, original);

            if candidate == original
                || mapping.contains_placeholder(&candidate)
                || text.contains(&candidate)
            {
                continue;
            }
            let nests = mapping
                .placeholders()
                .any(|p| p.contains(candidate.as_str()) || candidate.contains(p));
            if nests {
                continue;
            }

            return Some(candidate);
        }
        None
    }

    /// Whether anonymization is enabled at all (callers skip the engine
    /// when false)
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Whether the engine is in dry-run mode
    pub fn is_dry_run(&self) -> bool {
        self.config.dry_run
    }
}
