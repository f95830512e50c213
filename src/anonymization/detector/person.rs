//! Person-name acceptance predicate
//!
//! The person-name regexes are deliberately broad (judicial texts mix
//! "APELLIDOS, NOMBRES", natural order, and every casing); this predicate is
//! the single gate every candidate must pass. It is kept separate from the
//! pattern sources so it can be tested on its own.

/// Tokens that identify institutions, never persons. Substring match against
/// the uppercased candidate, mirroring how these appear embedded in court
/// headers ("JUZGADO PRIMERO PENAL DEL CIRCUITO DE MEDELLÍN").
const INSTITUTION_BLACKLIST: &[&str] = &[
    "JUZGADO",
    "TRIBUNAL",
    "FISCALÍA",
    "MINISTERIO",
    "DEFENSORÍA",
    "PROCURADURÍA",
    "POLICÍA",
    "INPEC",
    "ICBF",
    "AUDIENCIA",
    "SALA",
    "PENAL",
    "CIRCUITO",
    "MUNICIPAL",
    "NACIONAL",
    "DISTRITO",
    "REPÚBLICA",
    "COLOMBIA",
    "BOGOTÁ",
    "MEDELLÍN",
    "CALI",
    "BARRANQUILLA",
    "CARTAGENA",
    "BUCARAMANGA",
];

/// Connector words that cannot form a name on their own.
const STOP_WORDS: &[&str] = &["DE", "DEL", "LA", "LAS", "LOS", "Y", "E"];

/// Decide whether a candidate span looks like a person name.
///
/// Rules: no digits; 2–5 whitespace-separated tokens after normalizing the
/// judicial comma; every token 2–15 letters starting with a letter; tokens are
/// not exclusively connector stop-words; no institution blacklist hit.
pub fn is_person_name(candidate: &str) -> bool {
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        return false;
    }

    if trimmed.chars().any(|c| c.is_ascii_digit()) {
        return false;
    }

    let upper = trimmed.to_uppercase();
    if INSTITUTION_BLACKLIST.iter().any(|inst| upper.contains(inst)) {
        return false;
    }

    // "PÉREZ GARCÍA, JUAN" tokenizes as PÉREZ GARCÍA JUAN.
    let normalized = upper.replace(',', " ");
    let tokens: Vec<&str> = normalized.split_whitespace().collect();
    if tokens.len() < 2 || tokens.len() > 5 {
        return false;
    }

    for token in &tokens {
        let length = token.chars().count();
        if !(2..=15).contains(&length) {
            return false;
        }
        if !token.chars().next().is_some_and(char::is_alphabetic) {
            return false;
        }
    }

    if tokens.iter().all(|t| STOP_WORDS.contains(t)) {
        return false;
    }

    true
}
