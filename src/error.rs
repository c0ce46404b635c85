//! Error types for formatting and configuration

use thiserror::Error;

/// Errors raised while building a formatter or formatting a value
#[derive(Debug, Error)]
pub enum FormatError {
    /// The `#` pattern could not be parsed or has no placeholder
    #[error("invalid format pattern: {0}")]
    InvalidPattern(String),
    /// The user supplied transform failed for this input
    #[error("custom formatter failed: {0}")]
    Transform(String),
    /// The numeric character class could not be compiled
    #[error("failed to build numeric pattern: {0}")]
    NumberPattern(#[from] regex::Error),
}

/// Errors raised while loading configuration from TOML
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The requested preset does not exist
    #[error("preset not found: {0}")]
    NotFound(String),
    /// The configuration data is malformed
    #[error("error parsing format configuration: {0}")]
    ParseError(String),
}
