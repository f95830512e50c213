//! Detection report for dry-run mode

use crate::anonymization::models::{AnonymizedText, PiiCategory};
use serde::Serialize;
use std::collections::HashMap;

/// Aggregated detection summary, built from one or more dry-run passes
#[derive(Debug, Default, Serialize)]
pub struct DetectionReport {
    /// Number of texts scanned
    pub texts_scanned: usize,
    /// Total detections across all texts
    pub total_detections: usize,
    /// Detection counts keyed by category label
    pub detections_by_category: HashMap<String, usize>,
    /// Non-fatal problems encountered during scanning
    pub warnings: Vec<String>,
    /// Total processing time in milliseconds
    pub total_processing_time_ms: u64,
}

impl DetectionReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one pass into the report
    pub fn add_result(&mut self, result: &AnonymizedText) {
        self.texts_scanned += 1;
        self.total_detections += result.total_matches();
        self.total_processing_time_ms += result.processing_time_ms;
        for (category, count) in &result.stats_by_category {
            *self
                .detections_by_category
                .entry(category.label().to_string())
                .or_insert(0) += count;
        }
    }

    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    /// Human-readable summary for console output
    pub fn format_summary(&self) -> String {
        let mut out = String::new();
        out.push_str("Detection report\n");
        out.push_str("================\n");
        out.push_str(&format!("Texts scanned:     {}\n", self.texts_scanned));
        out.push_str(&format!("Total detections:  {}\n", self.total_detections));
        out.push_str(&format!(
            "Processing time:   {} ms\n",
            self.total_processing_time_ms
        ));

        if !self.detections_by_category.is_empty() {
            out.push_str("\nBy category:\n");
            // Report in pipeline order so runs are comparable.
            for category in PiiCategory::PIPELINE_ORDER {
                if let Some(count) = self.detections_by_category.get(category.label()) {
                    out.push_str(&format!("  {:<22} {}\n", category.label(), count));
                }
            }
        }

        if !self.warnings.is_empty() {
            out.push_str(&format!("\nWarnings ({}):\n", self.warnings.len()));
            for warning in &self.warnings {
                out.push_str(&format!("  - {warning}\n"));
            }
        }

        out
    }
}
