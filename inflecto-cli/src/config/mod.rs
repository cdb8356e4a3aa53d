//! Configuration module

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use inflecto_core::{Inflections, InflectionsConfig};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Named inflection tables, each layered over the English defaults
    #[serde(default)]
    pub profiles: BTreeMap<String, InflectionsConfig>,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load the CLI configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&text)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;

        for (name, profile) in &config.profiles {
            profile
                .validate()
                .with_context(|| format!("Invalid profile '{name}' in {}", path.display()))?;
        }
        log::debug!(
            "loaded CLI config from {} with {} profiles",
            path.display(),
            config.profiles.len()
        );
        Ok(config)
    }

    /// Look up a profile by name
    pub fn profile(&self, name: &str) -> Result<&InflectionsConfig, CliError> {
        self.profiles
            .get(name)
            .ok_or_else(|| CliError::UnknownProfile(name.to_string()))
    }
}

/// Where the inflection table for a command comes from
#[derive(Debug, Default)]
pub struct TableSource<'a> {
    /// Loaded CLI configuration, if any
    pub cli_config: Option<&'a CliConfig>,
    /// Profile name inside the CLI configuration
    pub profile: Option<&'a str>,
    /// Standalone rules file layered last
    pub rules: Option<&'a Path>,
}

impl TableSource<'_> {
    /// Build the table: defaults, then the profile, then the rules file
    pub fn build(&self) -> Result<Inflections> {
        let mut inflections = match (self.profile, self.cli_config) {
            (Some(name), Some(config)) => Inflections::from_config(config.profile(name)?)
                .with_context(|| format!("Failed to build profile '{name}'"))?,
            (Some(name), None) => {
                return Err(CliError::UnknownProfile(format!(
                    "{name} (no configuration file given)"
                ))
                .into())
            }
            (None, _) => Inflections::english()?,
        };

        if let Some(path) = self.rules {
            let rules = inflecto_core::load_config(path)?;
            inflections
                .apply_config(&rules)
                .with_context(|| format!("Failed to apply rules from {}", path.display()))?;
            log::info!("applied rules from {}", path.display());
        }

        Ok(inflections)
    }
}
