//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// A named profile is missing from the CLI configuration
    UnknownProfile(String),
    /// An argument that must be an integer is not one
    InvalidNumber(String),
    /// CLI configuration file could not be used
    ConfigError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::UnknownProfile(name) => write!(f, "Unknown profile: {name}"),
            CliError::InvalidNumber(value) => write!(f, "Not an integer: {value}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_profile_display() {
        let error = CliError::UnknownProfile("rails".to_string());
        assert_eq!(error.to_string(), "Unknown profile: rails");
    }

    #[test]
    fn test_invalid_number_display() {
        let error = CliError::InvalidNumber("twelve".to_string());
        assert_eq!(error.to_string(), "Not an integer: twelve");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_cli_error_converts_to_anyhow() {
        let failure: CliResult<()> = Err(CliError::UnknownProfile("x".to_string()).into());
        let error = failure.unwrap_err();
        assert!(error.downcast_ref::<CliError>().is_some());
        assert_eq!(error.to_string(), "Unknown profile: x");
    }
}
