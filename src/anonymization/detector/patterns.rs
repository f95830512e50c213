//! Pattern library for PII detection
//!
//! Pattern sets are loaded from TOML (embedded default or a user-supplied
//! file) and compiled once into a [`PatternRegistry`]. Most patterns compile
//! with the `regex` crate; the few that need lookaround (the bare digit-run
//! identity fallback must exclude mobile and hour shapes) transparently fall
//! back to `fancy-regex`.

use crate::anonymization::models::PiiCategory;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// One pattern set as declared in TOML
#[derive(Debug, Clone, Deserialize)]
pub struct PatternDefinition {
    /// Set name, used in error messages
    pub name: String,
    /// PII category label
    pub category: String,
    /// Confidence score (0.0 - 1.0)
    pub confidence: f32,
    /// Regex sources for this set, in priority order
    pub patterns: Vec<String>,
}

/// Pattern library container (array keeps declaration order)
#[derive(Debug, Deserialize)]
struct PatternLibrary {
    #[serde(rename = "pattern")]
    sets: Vec<PatternDefinition>,
}

/// A compiled regex, standard or lookaround-capable
#[derive(Debug, Clone)]
pub enum CompiledRegex {
    Standard(regex::Regex),
    Fancy(fancy_regex::Regex),
}

impl CompiledRegex {
    /// Compile with `regex`, falling back to `fancy-regex` for sources that
    /// use features the standard engine rejects (lookaround).
    pub fn compile(source: &str) -> Result<Self> {
        match regex::Regex::new(source) {
            Ok(re) => Ok(Self::Standard(re)),
            Err(_) => {
                let re = fancy_regex::Regex::new(source)
                    .with_context(|| format!("Invalid regex: {source}"))?;
                Ok(Self::Fancy(re))
            }
        }
    }

    /// Yield `(start, value)` for every match, where `value` is capture
    /// group 1 when the pattern defines one and the whole match otherwise.
    pub fn candidates(&self, text: &str) -> Result<Vec<(usize, String)>> {
        let mut out = Vec::new();
        match self {
            Self::Standard(re) => {
                for caps in re.captures_iter(text) {
                    if let Some(m) = caps.get(1).or_else(|| caps.get(0)) {
                        out.push((m.start(), m.as_str().to_string()));
                    }
                }
            }
            Self::Fancy(re) => {
                for caps in re.captures_iter(text) {
                    let caps = caps.context("fancy-regex match failed")?;
                    if let Some(m) = caps.get(1).or_else(|| caps.get(0)) {
                        out.push((m.start(), m.as_str().to_string()));
                    }
                }
            }
        }
        Ok(out)
    }
}

/// Compiled pattern with metadata
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pub regex: CompiledRegex,
    pub category: PiiCategory,
    pub confidence: f32,
}

/// Registry of compiled patterns grouped by category, preserving the TOML
/// declaration order within each category.
pub struct PatternRegistry {
    by_category: HashMap<PiiCategory, Vec<CompiledPattern>>,
    total: usize,
}

impl PatternRegistry {
    /// Load a pattern registry from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).with_context(|| {
            format!(
                "Failed to read pattern library: {}",
                path.as_ref().display()
            )
        })?;
        Self::from_toml(&content)
    }

    /// Build a registry from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let library: PatternLibrary =
            toml::from_str(content).context("Failed to parse pattern library TOML")?;

        let mut by_category: HashMap<PiiCategory, Vec<CompiledPattern>> = HashMap::new();
        let mut total = 0;

        for set in library.sets {
            let category = PiiCategory::parse(&set.category).with_context(|| {
                format!("Unknown category in pattern set '{}': {}", set.name, set.category)
            })?;

            for source in &set.patterns {
                let regex = CompiledRegex::compile(source)
                    .with_context(|| format!("In pattern set '{}'", set.name))?;
                by_category.entry(category).or_default().push(CompiledPattern {
                    regex,
                    category,
                    confidence: set.confidence,
                });
                total += 1;
            }
        }

        Ok(Self { by_category, total })
    }

    /// Built-in default pattern library
    pub fn default_patterns() -> Result<Self> {
        let default_toml = include_str!("../../../patterns/pii_patterns.toml");
        Self::from_toml(default_toml)
    }

    /// Patterns for a category, in declaration order
    pub fn patterns_for(&self, category: PiiCategory) -> &[CompiledPattern] {
        self.by_category
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total number of compiled patterns
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_patterns() {
        let registry = PatternRegistry::default_patterns().unwrap();
        assert!(!registry.is_empty());
        // Every pipeline category must have at least one pattern.
        for category in PiiCategory::PIPELINE_ORDER {
            assert!(
                !registry.patterns_for(category).is_empty(),
                "no patterns for {category}"
            );
        }
    }

    #[test]
    fn test_labeled_identity_pattern_matches() {
        let registry = PatternRegistry::default_patterns().unwrap();
        let patterns = registry.patterns_for(PiiCategory::Identity);
        let text = "identificado con C.C. 1.234.567.890 en la diligencia";
        let matched = patterns
            .iter()
            .flat_map(|p| p.regex.candidates(text).unwrap())
            .any(|(_, v)| v.contains("1.234.567.890"));
        assert!(matched);
    }

    #[test]
    fn test_bare_identity_fallback_skips_mobile_shape() {
        let registry = PatternRegistry::default_patterns().unwrap();
        let patterns = registry.patterns_for(PiiCategory::Identity);
        // 10 digits starting with 3 is a mobile, not an ID.
        let mobile = "llamar al 3001234567 hoy";
        let hit = patterns
            .iter()
            .flat_map(|p| p.regex.candidates(mobile).unwrap())
            .any(|(_, v)| v == "3001234567");
        assert!(!hit);

        // A 10-digit run not starting with 3 is a candidate ID.
        let id = "documento 1034567890 del expediente";
        let hit = patterns
            .iter()
            .flat_map(|p| p.regex.candidates(id).unwrap())
            .any(|(_, v)| v == "1034567890");
        assert!(hit);
    }

    #[test]
    fn test_mobile_pattern_captures_number_without_country_code() {
        let registry = PatternRegistry::default_patterns().unwrap();
        let patterns = registry.patterns_for(PiiCategory::Mobile);
        let text = "contacto +57 300 123 4567";
        let values: Vec<String> = patterns
            .iter()
            .flat_map(|p| p.regex.candidates(text).unwrap())
            .map(|(_, v)| v)
            .collect();
        assert!(values.contains(&"300 123 4567".to_string()));
    }

    #[test]
    fn test_canonical_docket_pattern() {
        let registry = PatternRegistry::default_patterns().unwrap();
        let patterns = registry.patterns_for(PiiCategory::Docket);
        let text = "radicado 11001-60-00000-2024-00123-00";
        let hit = patterns
            .iter()
            .flat_map(|p| p.regex.candidates(text).unwrap())
            .any(|(_, v)| v == "11001-60-00000-2024-00123-00");
        assert!(hit);
    }

    #[test]
    fn test_email_pattern() {
        let registry = PatternRegistry::default_patterns().unwrap();
        let patterns = registry.patterns_for(PiiCategory::Email);
        let hit = patterns
            .iter()
            .flat_map(|p| p.regex.candidates("escribir a juan.perez@correo.com ya").unwrap())
            .any(|(_, v)| v == "juan.perez@correo.com");
        assert!(hit);
    }

    #[test]
    fn test_invalid_category_rejected() {
        let toml = r#"
[[pattern]]
name = "bad"
category = "NOT_A_CATEGORY"
confidence = 0.9
patterns = ['x']
"#;
        assert!(PatternRegistry::from_toml(toml).is_err());
    }

    #[test]
    fn test_invalid_regex_rejected() {
        let toml = r#"
[[pattern]]
name = "broken"
category = "EMAIL"
confidence = 0.9
patterns = ['(unclosed']
"#;
        assert!(PatternRegistry::from_toml(toml).is_err());
    }
}
