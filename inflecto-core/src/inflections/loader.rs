//! Embedded default rules and the process-wide default table

use std::path::Path;
use std::sync::OnceLock;

use crate::error::{InflectError, Result};
use crate::inflections::config::InflectionsConfig;
use crate::inflections::Inflections;

const ENGLISH_TOML: &str = include_str!("../../configs/english.toml");

static DEFAULT_INFLECTIONS: OnceLock<Inflections> = OnceLock::new();

/// Parse the embedded English defaults
pub fn english_config() -> Result<InflectionsConfig> {
    let config = InflectionsConfig::from_toml_str(ENGLISH_TOML)?;

    // Validate that the embedded config is the one we expect
    match &config.metadata {
        Some(metadata) if metadata.code == "en" => Ok(config),
        Some(metadata) => Err(InflectError::ConfigurationError(format!(
            "Config code mismatch: expected en, got {}",
            metadata.code
        ))),
        None => Err(InflectError::ConfigurationError(
            "Embedded English config is missing its metadata".to_string(),
        )),
    }
}

/// Read and validate an override file
pub fn load_config(path: impl AsRef<Path>) -> Result<InflectionsConfig> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| InflectError::IoError {
        path: path.to_path_buf(),
        source,
    })?;
    InflectionsConfig::from_toml_str(&text).map_err(|e| match e {
        InflectError::ConfigurationError(msg) => {
            InflectError::ConfigurationError(format!("{}: {msg}", path.display()))
        }
        other => other,
    })
}

/// Install the process-wide default table
///
/// Must happen before the first call that reads the default table; after
/// that the table is fixed for the life of the process.
pub fn install(inflections: Inflections) -> Result<()> {
    DEFAULT_INFLECTIONS
        .set(inflections)
        .map_err(|_| InflectError::AlreadyInstalled)?;
    log::debug!("installed custom default inflections");
    Ok(())
}

/// The process-wide default table
///
/// Falls back to the embedded English rules when nothing was installed.
pub fn default_inflections() -> &'static Inflections {
    DEFAULT_INFLECTIONS.get_or_init(|| {
        Inflections::english().expect("Failed to load embedded English inflections")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_english_config_metadata() {
        let config = english_config().unwrap();
        let metadata = config.metadata.unwrap();
        assert_eq!(metadata.code, "en");
        assert_eq!(metadata.name, "English");
        assert_eq!(config.irregulars.len(), 9);
        assert_eq!(config.uncountables.len(), 16);
        assert!(config.acronyms.is_empty());
    }

    #[test]
    fn test_default_inflections_is_shared() {
        let first = default_inflections();
        let second = default_inflections();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_install_after_first_use_fails() {
        let _ = default_inflections();
        match install(Inflections::empty()) {
            Err(InflectError::AlreadyInstalled) => (),
            other => panic!("Expected AlreadyInstalled, got {other:?}"),
        }
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "acronyms = [\"API\"]\nuncountables = [\"police\"]\n").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.acronyms, vec!["API"]);
        assert_eq!(config.uncountables, vec!["police"]);
    }

    #[test]
    fn test_load_config_missing_file() {
        match load_config("does/not/exist.toml") {
            Err(InflectError::IoError { path, .. }) => {
                assert_eq!(path, Path::new("does/not/exist.toml"));
            }
            other => panic!("Expected IoError, got {other:?}"),
        }
    }

    #[test]
    fn test_load_config_reports_path_on_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "plurals = 3").unwrap();

        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }
}
