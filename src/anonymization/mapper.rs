//! Call-scoped substitution mapping
//!
//! A [`SubstitutionMap`] holds the reversible association between generated
//! placeholders and original substrings for a single anonymize/restore round
//! trip. It is created fresh per `anonymize` call and handed to the caller;
//! it is never cached, shared across calls, or written to disk by the engine.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Bidirectional placeholder <-> original association.
///
/// Serializes as a plain `placeholder -> original` map; the reverse index is
/// rebuilt on deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(
    from = "HashMap<String, String>",
    into = "HashMap<String, String>"
)]
pub struct SubstitutionMap {
    forward: HashMap<String, String>,
    reverse: HashMap<String, String>,
}

impl SubstitutionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a placeholder for an original value.
    ///
    /// Returns `false` without modifying the map when the placeholder is
    /// already a key, the original is already mapped, or the placeholder
    /// equals its original — the caller treats that candidate as skipped.
    pub fn insert(&mut self, placeholder: String, original: String) -> bool {
        if placeholder == original
            || self.forward.contains_key(&placeholder)
            || self.reverse.contains_key(&original)
        {
            return false;
        }
        self.reverse.insert(original.clone(), placeholder.clone());
        self.forward.insert(placeholder, original);
        true
    }

    pub fn contains_placeholder(&self, placeholder: &str) -> bool {
        self.forward.contains_key(placeholder)
    }

    pub fn contains_original(&self, original: &str) -> bool {
        self.reverse.contains_key(original)
    }

    /// Placeholder issued for an original, if any
    pub fn placeholder_for(&self, original: &str) -> Option<&str> {
        self.reverse.get(original).map(String::as_str)
    }

    /// Original behind a placeholder, if any
    pub fn original_for(&self, placeholder: &str) -> Option<&str> {
        self.forward.get(placeholder).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Iterate `(placeholder, original)` pairs in unspecified order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.forward.iter().map(|(p, o)| (p.as_str(), o.as_str()))
    }

    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.forward.keys().map(String::as_str)
    }

    /// Replace every occurrence of every original with its placeholder.
    ///
    /// Substitution is span-based over the input: occurrences are located
    /// first, longest needles claim overlapping spans, and the output is
    /// rebuilt in a single pass. Inserted placeholders are therefore atomic;
    /// a shorter original can never re-match inside text another
    /// substitution just produced.
    pub fn mask(&self, text: &str) -> String {
        let pairs: Vec<(&str, &str)> = self
            .forward
            .iter()
            .map(|(p, o)| (o.as_str(), p.as_str()))
            .collect();
        substitute_spans(text, pairs)
    }

    /// Replace every occurrence of every placeholder with its original.
    ///
    /// Same span discipline as [`mask`](Self::mask). Placeholders absent
    /// from the text are no-ops.
    pub fn unmask(&self, text: &str) -> String {
        let pairs: Vec<(&str, &str)> = self
            .forward
            .iter()
            .map(|(p, o)| (p.as_str(), o.as_str()))
            .collect();
        substitute_spans(text, pairs)
    }
}

/// Replace `(needle, replacement)` pairs in one pass.
///
/// Longer needles claim their byte spans first (ties broken
/// lexicographically for determinism); occurrences overlapping an already
/// claimed span are dropped.
fn substitute_spans(text: &str, mut pairs: Vec<(&str, &str)>) -> String {
    pairs.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(b.0)));

    let mut taken = vec![false; text.len()];
    let mut spans: Vec<(usize, usize, &str)> = Vec::new();

    for (needle, replacement) in pairs {
        if needle.is_empty() {
            continue;
        }
        for (start, _) in text.match_indices(needle) {
            let end = start + needle.len();
            if taken[start..end].iter().any(|&claimed| claimed) {
                continue;
            }
            taken[start..end].iter_mut().for_each(|b| *b = true);
            spans.push((start, end, replacement));
        }
    }

    spans.sort_by_key(|&(start, _, _)| start);

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for (start, end, replacement) in spans {
        out.push_str(&text[cursor..start]);
        out.push_str(replacement);
        cursor = end;
    }
    out.push_str(&text[cursor..]);
    out
}

impl From<HashMap<String, String>> for SubstitutionMap {
    fn from(forward: HashMap<String, String>) -> Self {
        let reverse = forward
            .iter()
            .map(|(p, o)| (o.clone(), p.clone()))
            .collect();
        Self { forward, reverse }
    }
}

impl From<SubstitutionMap> for HashMap<String, String> {
    fn from(map: SubstitutionMap) -> Self {
        map.forward
    }
}
