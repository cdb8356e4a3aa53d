//! Runtime tables backing an inflection set
//!
//! Every lookup is total: unknown input falls through unchanged.

pub mod acronyms;
pub mod rules;
pub mod uncountables;

pub use acronyms::{Acronyms, DEFAULT_ACRONYMS};
pub use rules::{Pattern, Rule, Rules};
pub use uncountables::Uncountables;
