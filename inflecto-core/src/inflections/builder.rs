//! Fluent builder for custom inflection tables

use crate::error::Result;
use crate::inflections::config::{InflectionsConfig, IrregularConfig, RuleConfig};
use crate::inflections::Inflections;

/// Fluent builder over [`InflectionsConfig`]
///
/// ```rust
/// use inflecto_core::Inflections;
///
/// let inflections = Inflections::builder()
///     .plural("octopus", "octopi")
///     .acronym("API")
///     .build()
///     .unwrap();
///
/// assert_eq!(inflections.pluralize("octopus"), "octopi");
/// assert_eq!(inflections.camelize("api_access", true), "APIAccess");
/// ```
#[derive(Debug, Default)]
pub struct InflectionsBuilder {
    config: InflectionsConfig,
}

impl InflectionsBuilder {
    /// Create a new builder over the default English rules
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: InflectionsConfig) -> Self {
        Self { config }
    }

    /// Literal plural override
    pub fn plural(mut self, pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        self.config
            .plurals
            .push(RuleConfig::literal(pattern, replacement));
        self
    }

    /// Regular expression plural override
    pub fn plural_regex(mut self, regex: impl Into<String>, replacement: impl Into<String>) -> Self {
        self.config.plurals.push(RuleConfig::regex(regex, replacement));
        self
    }

    /// Literal singular override
    pub fn singular(mut self, pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        self.config
            .singulars
            .push(RuleConfig::literal(pattern, replacement));
        self
    }

    /// Regular expression singular override
    pub fn singular_regex(
        mut self,
        regex: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        self.config
            .singulars
            .push(RuleConfig::regex(regex, replacement));
        self
    }

    /// Irregular singular/plural pair
    pub fn irregular(mut self, singular: impl Into<String>, plural: impl Into<String>) -> Self {
        self.config.irregulars.push(IrregularConfig {
            singular: singular.into(),
            plural: plural.into(),
        });
        self
    }

    /// Uncountable word
    pub fn uncountable(mut self, word: impl Into<String>) -> Self {
        self.config.uncountables.push(word.into());
        self
    }

    /// Acronym in its canonical casing
    pub fn acronym(mut self, word: impl Into<String>) -> Self {
        self.config.acronyms.push(word.into());
        self
    }

    /// Regular expression humanize rule
    pub fn human(mut self, regex: impl Into<String>, replacement: impl Into<String>) -> Self {
        self.config.humans.push(RuleConfig::regex(regex, replacement));
        self
    }

    /// Seed the built-in acronym list
    pub fn default_acronyms(mut self, enabled: bool) -> Self {
        self.config.default_acronyms = enabled;
        self
    }

    /// The configuration collected so far
    pub fn config(&self) -> &InflectionsConfig {
        &self.config
    }

    /// Build the table
    pub fn build(self) -> Result<Inflections> {
        Inflections::from_config(&self.config)
    }
}
