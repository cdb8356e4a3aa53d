//! Rule-driven English inflection
//!
//! This crate pluralizes, singularizes and re-cases words and dotted module
//! identifiers. Every transform is driven by an [`Inflections`] table: an
//! ordered set of pattern/replacement rules in which the most recently added
//! rule always wins, plus uncountable words and acronyms.
//!
//! # Architecture
//!
//! - **Tables**: [`Rules`], [`Acronyms`] and [`Uncountables`], the building
//!   blocks of a table
//! - **Inflections**: the composite table, seeded from the embedded English
//!   rules and extended through [`InflectionsConfig`] or the builder
//! - **Transforms**: stateless functions taking a table by reference
//!
//! # Example
//!
//! ```rust
//! use inflecto_core::Inflections;
//!
//! // Custom tables layer overrides on top of the English defaults
//! let inflections = Inflections::builder()
//!     .acronym("API")
//!     .plural("octopus", "octopi")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(inflections.pluralize("octopus"), "octopi");
//! assert_eq!(inflections.camelize("api_access", true), "APIAccess");
//!
//! // The crate-level functions use the process-wide default table
//! assert_eq!(inflecto_core::pluralize("person"), "people");
//! assert_eq!(inflecto_core::ordinalize(21), "21st");
//! ```

pub mod error;
pub mod inflections;
pub mod modules;
pub mod transform;

pub use error::{InflectError, Result};
pub use inflections::{
    default_inflections, english_config, install, load_config, Acronyms, Inflections,
    InflectionsBuilder, InflectionsConfig, IrregularConfig, Metadata, Pattern, Rule, RuleConfig,
    Rules, Uncountables, DEFAULT_ACRONYMS,
};
pub use modules::{modulize, ModuleRegistry};
pub use transform::{
    dasherize, deconstantize, demodulize, ordinal, ordinalize, PATH_SEPARATOR, SEGMENT_DELIMITER,
};

// Shorthands over the process-wide default table

pub fn pluralize(word: &str) -> String {
    transform::pluralize(word, default_inflections())
}

pub fn singularize(word: &str) -> String {
    transform::singularize(word, default_inflections())
}

pub fn is_uncountable(word: &str) -> bool {
    transform::is_uncountable(word, default_inflections())
}

pub fn camelize(word: &str, upper: bool) -> String {
    transform::camelize(word, default_inflections(), upper)
}

pub fn underscore(word: &str) -> String {
    transform::underscore(word, default_inflections())
}

pub fn humanize(word: &str) -> String {
    transform::humanize(word, default_inflections())
}

pub fn titleize(word: &str) -> String {
    transform::titleize(word, default_inflections())
}

pub fn classify(table_name: &str) -> String {
    transform::classify(table_name, default_inflections())
}

pub fn tableize(class_name: &str) -> String {
    transform::tableize(class_name, default_inflections())
}

pub fn foreign_key(class_name: &str, separate_with_underscore: bool) -> String {
    transform::foreign_key(class_name, default_inflections(), separate_with_underscore)
}
