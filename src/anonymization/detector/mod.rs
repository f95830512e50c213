//! PII detection module
//!
//! Trait-based detection interface plus the regex rule engine that backs it.
//! Each category is detected by an ordered list of patterns whose candidates
//! run through a category validator before acceptance.

pub mod patterns;
pub mod person;
pub mod regex;

use crate::anonymization::models::{PiiCategory, PiiMatch};
use anyhow::Result;

/// Trait for PII detection implementations
pub trait PiiDetector: Send + Sync {
    /// Find distinct matches for one category, in first-seen order.
    ///
    /// No-match is not an error: an empty vector is a valid result.
    fn find(&self, category: PiiCategory, text: &str) -> Result<Vec<PiiMatch>>;

    /// Confidence threshold below which patterns are ignored
    fn confidence_threshold(&self) -> f32;
}
