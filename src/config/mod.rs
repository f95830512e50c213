//! Configuration management
//!
//! TOML-backed configuration with `${VAR}` substitution and `VELO_*`
//! environment overrides.

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_or_default};
pub use schema::{ApplicationConfig, LoggingConfig, VeloConfig};
