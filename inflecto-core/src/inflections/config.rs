//! Configuration structures and validation
//!
//! This module defines the TOML schema for inflection overrides. The
//! embedded English defaults use the same schema.

use serde::{Deserialize, Serialize};

use crate::error::{InflectError, Result};
use crate::inflections::tables::Pattern;

/// Root inflection configuration
///
/// Every list is optional; an empty configuration yields the default table.
/// Rule lists are ordered lowest priority first: each entry is prepended, so
/// the last one listed is tried first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InflectionsConfig {
    /// Also seed the built-in acronym list
    #[serde(default)]
    pub default_acronyms: bool,
    #[serde(default)]
    pub uncountables: Vec<String>,
    #[serde(default)]
    pub acronyms: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(default)]
    pub plurals: Vec<RuleConfig>,
    #[serde(default)]
    pub singulars: Vec<RuleConfig>,
    #[serde(default)]
    pub irregulars: Vec<IrregularConfig>,
    #[serde(default)]
    pub humans: Vec<RuleConfig>,
}

/// Rule-set metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// A single rule entry
///
/// Written either as a `["literal", "replacement"]` pair or as a
/// `{ regex = "...", replacement = "..." }` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleConfig {
    Literal(String, String),
    Regex { regex: String, replacement: String },
}

impl RuleConfig {
    /// Literal substring rule
    pub fn literal(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        RuleConfig::Literal(pattern.into(), replacement.into())
    }

    /// Regular expression rule
    pub fn regex(regex: impl Into<String>, replacement: impl Into<String>) -> Self {
        RuleConfig::Regex {
            regex: regex.into(),
            replacement: replacement.into(),
        }
    }

    /// Compile into a pattern/replacement pair
    pub fn to_rule(&self) -> Result<(Pattern, &str)> {
        match self {
            RuleConfig::Literal(pattern, replacement) => {
                Ok((Pattern::literal(pattern.as_str()), replacement.as_str()))
            }
            RuleConfig::Regex { regex, replacement } => {
                Ok((Pattern::regex(regex)?, replacement.as_str()))
            }
        }
    }

    fn pattern_text(&self) -> &str {
        match self {
            RuleConfig::Literal(pattern, _) => pattern,
            RuleConfig::Regex { regex, .. } => regex,
        }
    }
}

/// Irregular singular/plural pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrregularConfig {
    pub singular: String,
    pub plural: String,
}

impl InflectionsConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)
            .map_err(|e| InflectError::ConfigurationError(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(metadata) = &self.metadata {
            if metadata.code.trim().is_empty() {
                return Err(InflectError::ConfigurationError(
                    "metadata.code must not be empty".to_string(),
                ));
            }
        }

        let rule_lists = [
            ("plurals", &self.plurals),
            ("singulars", &self.singulars),
            ("humans", &self.humans),
        ];
        for (section, rules) in rule_lists {
            if let Some(index) = rules.iter().position(|rule| rule.pattern_text().is_empty()) {
                return Err(InflectError::ConfigurationError(format!(
                    "{section}[{index}] has an empty pattern"
                )));
            }
        }

        if let Some(index) = self
            .irregulars
            .iter()
            .position(|pair| pair.singular.trim().is_empty() || pair.plural.trim().is_empty())
        {
            return Err(InflectError::ConfigurationError(format!(
                "irregulars[{index}] needs both a singular and a plural word"
            )));
        }

        if self.acronyms.iter().any(|word| word.trim().is_empty()) {
            return Err(InflectError::ConfigurationError(
                "acronyms must not contain blank words".to_string(),
            ));
        }

        Ok(())
    }

    /// Whether the configuration adds nothing to the defaults
    pub fn is_empty(&self) -> bool {
        !self.default_acronyms
            && self.uncountables.is_empty()
            && self.acronyms.is_empty()
            && self.plurals.is_empty()
            && self.singulars.is_empty()
            && self.irregulars.is_empty()
            && self.humans.is_empty()
    }
}
