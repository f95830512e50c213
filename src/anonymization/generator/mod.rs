//! Fictitious value generation
//!
//! Produces same-shape replacements for detected PII: digit groupings,
//! separators and letter-case patterns survive, the values do not. One
//! [`ValueGenerator`] is created per `anonymize` call; it tracks the decoy
//! names and institutions already issued so repeats are avoided within the
//! call, and nothing leaks across calls.

pub mod decoys;

pub use decoys::DecoyPools;

use crate::anonymization::models::PiiCategory;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::sync::OnceLock;

/// Bounded retries when a regenerated digit group accidentally equals the
/// original; after that the first digit is bumped deterministically.
const DIGIT_RETRIES: usize = 8;

fn passport_regex() -> &'static regex::Regex {
    static RE: OnceLock<regex::Regex> = OnceLock::new();
    RE.get_or_init(|| regex::Regex::new(r"[A-Z]{2}\d{6,9}").expect("static regex"))
}

/// Case convention of a name, used to pick a matching decoy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CaseStyle {
    Upper,
    Lower,
    Mixed,
}

impl CaseStyle {
    fn of(text: &str) -> Self {
        let letters: Vec<char> = text.chars().filter(|c| c.is_alphabetic()).collect();
        if !letters.is_empty() && letters.iter().all(|c| c.is_uppercase()) {
            Self::Upper
        } else if !letters.is_empty() && letters.iter().all(|c| c.is_lowercase()) {
            Self::Lower
        } else {
            Self::Mixed
        }
    }
}

/// Per-call fictitious value generator
pub struct ValueGenerator<'a> {
    pools: &'a DecoyPools,
    rng: StdRng,
    issued_names: HashSet<String>,
    issued_institutions: HashSet<String>,
}

impl<'a> ValueGenerator<'a> {
    pub fn new(pools: &'a DecoyPools) -> Self {
        Self {
            pools,
            rng: StdRng::from_entropy(),
            issued_names: HashSet::new(),
            issued_institutions: HashSet::new(),
        }
    }

    /// Generate a same-shape replacement for `original` in `category`.
    ///
    /// The result is best-effort distinct from the original; the orchestrator
    /// re-checks all uniqueness invariants and retries if needed.
    pub fn generate(&mut self, category: PiiCategory, original: &str) -> String {
        match category {
            PiiCategory::Identity | PiiCategory::ProfessionalRegistry => {
                self.regenerate_preserving_shape(original)
            }
            PiiCategory::Mobile => self.generate_mobile(original),
            PiiCategory::PaymentCard => self.generate_card(original),
            PiiCategory::Email => self.generate_email(),
            PiiCategory::Address => self.generate_address(),
            PiiCategory::Docket => self.generate_docket(original),
            PiiCategory::PersonName => self.generate_person_name(original),
            PiiCategory::Institution => self.generate_institution(original),
        }
    }

    /// Random digit string of the given length
    fn random_digits(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| char::from(b'0' + self.rng.gen_range(0..10u8)))
            .collect()
    }

    /// Same-length random digits guaranteed to differ from `group`
    fn regenerate_group(&mut self, group: &str) -> String {
        if group.is_empty() {
            return String::new();
        }
        for _ in 0..DIGIT_RETRIES {
            let candidate = self.random_digits(group.chars().count());
            if candidate != group {
                return candidate;
            }
        }
        // Retries exhausted (plausible only for 1-digit groups): bump the
        // first digit so the result provably differs.
        let mut chars: Vec<char> = group.chars().collect();
        let first = chars[0].to_digit(10).unwrap_or(0);
        chars[0] = char::from_digit((first + 1) % 10, 10).unwrap_or('0');
        chars.into_iter().collect()
    }

    /// Keep every non-digit character in place (labels, dots, dashes) and
    /// regenerate each contiguous digit run to the same length. Passports get
    /// fresh letters too.
    fn regenerate_preserving_shape(&mut self, original: &str) -> String {
        if let Some(m) = passport_regex().find(original) {
            let letters: String = (0..2)
                .map(|_| char::from(self.rng.gen_range(b'A'..=b'Z')))
                .collect();
            let digit_count = m.as_str().chars().filter(char::is_ascii_digit).count();
            let replacement = format!("{letters}{}", self.random_digits(digit_count));
            return original.replacen(m.as_str(), &replacement, 1);
        }

        let mut out = String::with_capacity(original.len());
        let mut run = String::new();
        for c in original.chars() {
            if c.is_ascii_digit() {
                run.push(c);
            } else {
                if !run.is_empty() {
                    out.push_str(&self.regenerate_group(&run));
                    run.clear();
                }
                out.push(c);
            }
        }
        if !run.is_empty() {
            out.push_str(&self.regenerate_group(&run));
        }
        out
    }

    fn generate_mobile(&mut self, original: &str) -> String {
        let digits: String = original.chars().filter(char::is_ascii_digit).collect();
        if digits.chars().count() < 10 {
            return self.regenerate_group(&digits);
        }

        let prefix = self
            .pools
            .mobile_prefixes
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or_else(|| "300".to_string());
        let number = format!("{prefix}{}", self.random_digits(7));

        // Re-apply the original grouping style.
        let separator = if original.contains(' ') {
            Some(' ')
        } else if original.contains('-') {
            Some('-')
        } else if original.contains('.') {
            Some('.')
        } else {
            None
        };
        match separator {
            Some(sep) => format!("{}{sep}{}{sep}{}", &number[..3], &number[3..6], &number[6..]),
            None => number,
        }
    }

    fn generate_card(&mut self, original: &str) -> String {
        let digits: String = original.chars().filter(char::is_ascii_digit).collect();
        let separator = if original.contains(' ') {
            Some(' ')
        } else if original.contains('-') {
            Some('-')
        } else {
            None
        };

        match digits.len() {
            // "terminada en XXXX" mentions
            4 => self.regenerate_group(&digits),
            15 => {
                let number = format!("3{}", self.random_digits(14));
                match separator {
                    Some(sep) => format!(
                        "{}{sep}{}{sep}{}",
                        &number[..4],
                        &number[4..10],
                        &number[10..]
                    ),
                    None => number,
                }
            }
            16 => {
                let first = digits.chars().next().filter(|c| "456".contains(*c)).unwrap_or('4');
                let number = format!("{first}{}", self.random_digits(15));
                match separator {
                    Some(sep) => format!(
                        "{}{sep}{}{sep}{}{sep}{}",
                        &number[..4],
                        &number[4..8],
                        &number[8..12],
                        &number[12..]
                    ),
                    None => number,
                }
            }
            _ => self.regenerate_group(&digits),
        }
    }

    fn generate_email(&mut self) -> String {
        let domain = self
            .pools
            .email_domains
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or_else(|| "ejemplo.com".to_string());
        format!("usuario{}@{domain}", self.rng.gen_range(100..1000))
    }

    fn generate_address(&mut self) -> String {
        let street = self
            .pools
            .street_types
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or_else(|| "Calle".to_string());
        format!(
            "{street} {} #{}-{}",
            self.rng.gen_range(10..=150),
            self.rng.gen_range(10..=99),
            self.rng.gen_range(10..=99)
        )
    }

    fn generate_docket(&mut self, original: &str) -> String {
        if original.contains('-') {
            let segments: Vec<String> = original
                .split('-')
                .map(|segment| {
                    if !segment.is_empty() && segment.chars().all(|c| c.is_ascii_digit()) {
                        self.regenerate_group(segment)
                    } else {
                        segment.to_string()
                    }
                })
                .collect();
            segments.join("-")
        } else {
            self.regenerate_group(original)
        }
    }

    fn generate_person_name(&mut self, original: &str) -> String {
        let wants_comma = original.contains(',');
        let wants_case = CaseStyle::of(original);

        let conflicts = |candidate: &str, issued: &HashSet<String>| {
            issued
                .iter()
                .any(|p| p.contains(candidate) || candidate.contains(p.as_str()))
        };

        // First choice: an unissued decoy in the same form as the original.
        let matching: Vec<&String> = self
            .pools
            .person_names
            .iter()
            .filter(|n| n.contains(',') == wants_comma && CaseStyle::of(n) == wants_case)
            .filter(|n| !self.issued_names.contains(*n) && !conflicts(n, &self.issued_names))
            .collect();
        if let Some(pick) = matching.choose(&mut self.rng) {
            let name = (*pick).clone();
            self.issued_names.insert(name.clone());
            return name;
        }

        // Second choice: any unissued decoy.
        let any: Vec<&String> = self
            .pools
            .person_names
            .iter()
            .filter(|n| !self.issued_names.contains(*n) && !conflicts(n, &self.issued_names))
            .collect();
        if let Some(pick) = any.choose(&mut self.rng) {
            let name = (*pick).clone();
            self.issued_names.insert(name.clone());
            return name;
        }

        // Pool exhausted: synthesize in the matching form.
        let given = self.rng.gen_range(100..1000);
        let family = self.rng.gen_range(100..1000);
        let synthesized = if wants_comma {
            format!("APELLIDO_{family}, PERSONA_{given}")
        } else {
            format!("PERSONA_{given} APELLIDO_{family}")
        };
        let synthesized = match wants_case {
            CaseStyle::Lower => synthesized.to_lowercase(),
            _ => synthesized,
        };
        self.issued_names.insert(synthesized.clone());
        synthesized
    }

    fn generate_institution(&mut self, original: &str) -> String {
        let available: Vec<&String> = self
            .pools
            .institutions
            .iter()
            .filter(|i| !self.issued_institutions.contains(*i) && i.as_str() != original)
            .collect();
        if let Some(pick) = available.choose(&mut self.rng) {
            let name = (*pick).clone();
            self.issued_institutions.insert(name.clone());
            return name;
        }
        let synthesized = format!(
            "DESPACHO JUDICIAL {} DE CIUDAD EJEMPLO",
            self.rng.gen_range(100..1000)
        );
        self.issued_institutions.insert(synthesized.clone());
        synthesized
    }
}
