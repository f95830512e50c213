//! Regex-based PII detector

use super::{patterns::PatternRegistry, person, PiiDetector};
use crate::anonymization::models::{PiiCategory, PiiMatch};
use anyhow::Result;
use std::collections::HashSet;
use std::sync::Arc;

/// Punctuation stripped from the end of raw candidates. Matched values keep
/// internal punctuation (the judicial comma, ID dots) but never trail it.
const TRAILING_PUNCTUATION: [char; 4] = [',', '.', ';', ':'];

/// Regex detector backed by a [`PatternRegistry`] and per-category validators
pub struct RegexDetector {
    registry: Arc<PatternRegistry>,
    confidence_threshold: f32,
}

impl RegexDetector {
    /// Create a detector with the built-in default patterns
    pub fn new() -> Result<Self> {
        let registry = PatternRegistry::default_patterns()?;
        Ok(Self::with_registry(registry))
    }

    /// Create a detector with a custom pattern registry
    pub fn with_registry(registry: PatternRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            confidence_threshold: 0.6,
        }
    }

    /// Set the confidence threshold
    pub fn with_confidence_threshold(mut self, threshold: f32) -> Self {
        self.confidence_threshold = threshold.clamp(0.0, 1.0);
        self
    }

    /// Category-specific acceptance rule applied to every raw candidate.
    ///
    /// Person names go through the shared predicate; institutions and
    /// addresses are length-gated so short generic mentions survive.
    fn accepts(category: PiiCategory, candidate: &str) -> bool {
        match category {
            PiiCategory::PersonName => person::is_person_name(candidate),
            PiiCategory::Institution => candidate.chars().count() > 20,
            PiiCategory::Address => candidate.chars().count() > 10,
            _ => !candidate.is_empty(),
        }
    }

    fn clean(raw: &str) -> &str {
        raw.trim()
            .trim_end_matches(TRAILING_PUNCTUATION)
            .trim_end()
    }
}

impl PiiDetector for RegexDetector {
    fn find(&self, category: PiiCategory, text: &str) -> Result<Vec<PiiMatch>> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut matches = Vec::new();

        for pattern in self.registry.patterns_for(category) {
            if pattern.confidence < self.confidence_threshold {
                continue;
            }

            for (start, raw) in pattern.regex.candidates(text)? {
                let value = Self::clean(&raw);
                if value.is_empty() || seen.contains(value) {
                    continue;
                }
                if !Self::accepts(category, value) {
                    continue;
                }
                seen.insert(value.to_string());
                matches.push(PiiMatch::new(category, value.to_string(), start));
            }
        }

        Ok(matches)
    }

    fn confidence_threshold(&self) -> f32 {
        self.confidence_threshold
    }
}
