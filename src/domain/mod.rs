//! Core domain types
//!
//! Error hierarchy and result alias shared by the configuration, logging
//! and CLI layers. The anonymization module itself uses `anyhow` internally
//! and surfaces failures through these types at the crate boundary.

pub mod errors;
pub mod result;

pub use errors::VeloError;
pub use result::Result;
