//! Result type alias for Velo operations

use super::errors::VeloError;

/// Convenience alias used throughout the config and logging layers.
pub type Result<T> = std::result::Result<T, VeloError>;
