//! Grid configuration errors.

use thiserror::Error;

/// Rejected grid or simulation configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Size, layout or movement parameters are unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
