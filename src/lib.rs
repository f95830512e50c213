// Velo - Reversible PII Anonymization for Judicial Text
// Copyright (c) 2025 Velo Contributors
// Licensed under the MIT License

//! # Velo - Reversible PII Anonymization for Judicial Text
//!
//! Velo masks personal data in Colombian judicial documents before they are
//! sent to an external service and restores the originals in the response.
//! Substitution is shape-preserving: a cédula stays a cédula-shaped number,
//! a name stays a name in the same case and order, so downstream processing
//! sees realistic text while the real values never leave the trust boundary.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`anonymization`] - Detection, generation, mapping and restore
//! - [`domain`] - Error types shared across the crate
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! # fn main() -> anyhow::Result<()> {
//! let text = "La señora MARÍA GONZÁLEZ, C.C. 1.234.567.890, reside en Bogotá.";
//! let (masked, mapping) = velo::anonymization::anonymize(text)?;
//!
//! // send `masked` out, receive a response back ...
//! let response = serde_json::json!({ "respuesta": masked });
//!
//! let restored = velo::anonymization::restore(response, &mapping);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Infrastructure code uses [`domain::VeloError`]; the anonymization
//! pipeline itself reports failures through `anyhow` with context attached
//! at each stage.

pub mod anonymization;
pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
