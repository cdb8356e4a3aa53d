//! Composite inflection tables
//!
//! An [`Inflections`] value owns one plural, one singular and one human rule
//! set, an uncountable word set and an acronym table. Defaults are seeded
//! first; overrides are layered on top by prepending, so the most recently
//! added rule always wins.

pub mod builder;
pub mod config;
pub mod loader;
pub mod tables;

pub use builder::InflectionsBuilder;
pub use config::{InflectionsConfig, IrregularConfig, Metadata, RuleConfig};
pub use loader::{default_inflections, english_config, install, load_config};
pub use tables::{Acronyms, Pattern, Rule, Rules, Uncountables, DEFAULT_ACRONYMS};

use std::path::Path;

use unicode_segmentation::UnicodeSegmentation;

use crate::error::Result;
use crate::transform;

/// A complete set of inflection rules
///
/// Build once, then share freely: every transform borrows the table
/// immutably, so a published table can be read from many threads.
#[derive(Debug, Clone, Default)]
pub struct Inflections {
    plurals: Rules,
    singulars: Rules,
    humans: Rules,
    uncountables: Uncountables,
    acronyms: Acronyms,
}

impl Inflections {
    /// A table without any rules, uncountables or acronyms
    pub fn empty() -> Self {
        Self::default()
    }

    /// The default English table
    pub fn english() -> Result<Self> {
        let mut inflections = Self::empty();
        inflections.apply_config(&english_config()?)?;
        Ok(inflections)
    }

    /// The default English table with `config` layered on top
    pub fn from_config(config: &InflectionsConfig) -> Result<Self> {
        config.validate()?;
        let mut inflections = Self::english()?;
        inflections.apply_config(config)?;
        log::debug!(
            "built inflections: {} plural, {} singular, {} human rules, {} uncountables, {} acronyms",
            inflections.plurals.len(),
            inflections.singulars.len(),
            inflections.humans.len(),
            inflections.uncountables.len(),
            inflections.acronyms.len()
        );
        Ok(inflections)
    }

    /// Load overrides from a TOML file and layer them on the defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_config(&load_config(path)?)
    }

    /// Start a fluent builder
    pub fn builder() -> InflectionsBuilder {
        InflectionsBuilder::new()
    }

    /// Layer a configuration onto this table
    ///
    /// Order is fixed: plurals, singulars, irregulars, uncountables,
    /// acronyms (built-in list first when requested), human rules.
    pub fn apply_config(&mut self, config: &InflectionsConfig) -> Result<()> {
        for rule in &config.plurals {
            let (pattern, replacement) = rule.to_rule()?;
            self.add_plural(pattern, replacement);
        }
        for rule in &config.singulars {
            let (pattern, replacement) = rule.to_rule()?;
            self.add_singular(pattern, replacement);
        }
        for pair in &config.irregulars {
            self.add_irregular(&pair.singular, &pair.plural)?;
        }
        self.add_uncountable(&config.uncountables);
        if config.default_acronyms {
            self.add_acronym(DEFAULT_ACRONYMS);
        }
        self.add_acronym(&config.acronyms);
        for rule in &config.humans {
            let (pattern, replacement) = rule.to_rule()?;
            self.add_human(pattern, replacement);
        }
        Ok(())
    }

    /// Register a plural rule ahead of all existing ones
    pub fn add_plural(&mut self, pattern: Pattern, replacement: impl Into<String>) {
        self.plurals.prepend(pattern, replacement);
    }

    /// Register a singular rule ahead of all existing ones
    pub fn add_singular(&mut self, pattern: Pattern, replacement: impl Into<String>) {
        self.singulars.prepend(pattern, replacement);
    }

    /// Register a humanize rule ahead of all existing ones
    pub fn add_human(&mut self, pattern: Pattern, replacement: impl Into<String>) {
        self.humans.prepend(pattern, replacement);
    }

    /// Register an irregular singular/plural pair
    ///
    /// Both words stop being uncountable. When the words share their first
    /// grapheme the rules capture it, so the pair also matches at the end
    /// of longer words in any casing of that first letter ("salesperson").
    pub fn add_irregular(&mut self, singular: &str, plural: &str) -> Result<()> {
        self.uncountables.remove(singular);
        self.uncountables.remove(plural);

        let (s_head, s_tail) = split_first_grapheme(singular);
        let (p_head, p_tail) = split_first_grapheme(plural);

        if s_head.to_lowercase() == p_head.to_lowercase() {
            self.add_plural(
                Pattern::regex(&format!(
                    "(?i)({}){}$",
                    regex::escape(s_head),
                    regex::escape(s_tail)
                ))?,
                format!("${{1}}{}", escape_replacement(p_tail)),
            );
            self.add_singular(
                Pattern::regex(&format!(
                    "(?i)({}){}$",
                    regex::escape(p_head),
                    regex::escape(p_tail)
                ))?,
                format!("${{1}}{}", escape_replacement(s_tail)),
            );
        } else {
            for (from_head, from_tail, to_head, to_tail, plural_rule) in [
                (s_head, s_tail, p_head, p_tail, true),
                (p_head, p_tail, s_head, s_tail, false),
            ] {
                for (from_initial, to_initial) in [
                    (from_head.to_uppercase(), to_head.to_uppercase()),
                    (from_head.to_lowercase(), to_head.to_lowercase()),
                ] {
                    let pattern = Pattern::regex(&format!(
                        "{}(?i:{})$",
                        regex::escape(&from_initial),
                        regex::escape(from_tail)
                    ))?;
                    let replacement = escape_replacement(&format!("{to_initial}{to_tail}"));
                    if plural_rule {
                        self.add_plural(pattern, replacement);
                    } else {
                        self.add_singular(pattern, replacement);
                    }
                }
            }
        }

        log::trace!("registered irregular pair {singular}/{plural}");
        Ok(())
    }

    /// Mark words as uncountable
    pub fn add_uncountable<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.uncountables.insert(word.as_ref());
        }
    }

    /// Register acronyms under their lowercase form
    pub fn add_acronym<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref();
            self.acronyms.add(word.to_lowercase(), word);
        }
    }

    pub fn plurals(&self) -> &Rules {
        &self.plurals
    }

    pub fn singulars(&self) -> &Rules {
        &self.singulars
    }

    pub fn humans(&self) -> &Rules {
        &self.humans
    }

    pub fn uncountables(&self) -> &Uncountables {
        &self.uncountables
    }

    pub fn acronyms(&self) -> &Acronyms {
        &self.acronyms
    }

    // Transform shorthands over this table

    pub fn pluralize(&self, word: &str) -> String {
        transform::pluralize(word, self)
    }

    pub fn singularize(&self, word: &str) -> String {
        transform::singularize(word, self)
    }

    pub fn is_uncountable(&self, word: &str) -> bool {
        transform::is_uncountable(word, self)
    }

    pub fn camelize(&self, word: &str, upper: bool) -> String {
        transform::camelize(word, self, upper)
    }

    pub fn underscore(&self, word: &str) -> String {
        transform::underscore(word, self)
    }

    pub fn humanize(&self, word: &str) -> String {
        transform::humanize(word, self)
    }

    pub fn titleize(&self, word: &str) -> String {
        transform::titleize(word, self)
    }

    pub fn classify(&self, table_name: &str) -> String {
        transform::classify(table_name, self)
    }

    pub fn tableize(&self, class_name: &str) -> String {
        transform::tableize(class_name, self)
    }

    pub fn foreign_key(&self, class_name: &str, separate_with_underscore: bool) -> String {
        transform::foreign_key(class_name, self, separate_with_underscore)
    }
}

/// Split off the first grapheme cluster
fn split_first_grapheme(word: &str) -> (&str, &str) {
    match word.graphemes(true).next() {
        Some(head) => word.split_at(head.len()),
        None => ("", ""),
    }
}

/// Make literal text safe inside a regex replacement template
fn escape_replacement(text: &str) -> String {
    text.replace('$', "$$")
}
