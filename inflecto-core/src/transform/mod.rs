//! Stateless string transforms parameterized by an [`Inflections`] table
//!
//! Every function here is total: empty input, punctuation and mixed casing
//! all produce a best-effort result rather than an error.
//!
//! [`Inflections`]: crate::inflections::Inflections

pub mod case;
pub mod naming;
pub mod noun;
pub mod ordinal;

pub use case::{
    camelize, dasherize, humanize, titleize, underscore, PATH_SEPARATOR, SEGMENT_DELIMITER,
};
pub use naming::{classify, deconstantize, demodulize, foreign_key, tableize};
pub use noun::{is_uncountable, pluralize, singularize};
pub use ordinal::{ordinal, ordinalize};
