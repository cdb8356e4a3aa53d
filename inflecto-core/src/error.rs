//! Error types for inflection tables and lookups

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building inflection tables or resolving module names
///
/// The transforms themselves are total over string input and never fail.
#[derive(Debug, Error)]
pub enum InflectError {
    /// A dotted name did not resolve to a known identifier
    #[error("No such symbol: {0}")]
    LookupError(String),

    /// A custom rule carried a regular expression that does not compile
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Configuration loading, parsing or validation error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// A configuration file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The process-wide default table was already initialized
    #[error("Default inflections are already installed")]
    AlreadyInstalled,
}

/// Result type for inflection operations
pub type Result<T> = std::result::Result<T, InflectError>;
