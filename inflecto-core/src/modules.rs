//! Registry of known module identifiers for [`modulize`]

use std::collections::BTreeSet;

use crate::error::{InflectError, Result};
use crate::transform::{PATH_SEPARATOR, SEGMENT_DELIMITER};

/// Set of dotted identifiers a name may resolve to
#[derive(Debug, Clone, Default)]
pub struct ModuleRegistry {
    symbols: BTreeSet<String>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an identifier, `/` separators are stored as `.`
    pub fn register(&mut self, symbol: impl AsRef<str>) -> &mut Self {
        self.symbols.insert(normalize(symbol.as_ref()));
        self
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols.contains(&normalize(symbol))
    }

    /// Registered identifiers in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for ModuleRegistry {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut registry = Self::new();
        for symbol in iter {
            registry.register(symbol);
        }
        registry
    }
}

/// Resolve `name` to a registered identifier
///
/// # Errors
///
/// Returns [`InflectError::LookupError`] when nothing by that name is
/// registered.
pub fn modulize<'r>(name: &str, registry: &'r ModuleRegistry) -> Result<&'r str> {
    let key = normalize(name);
    registry
        .symbols
        .get(&key)
        .map(String::as_str)
        .ok_or(InflectError::LookupError(key))
}

fn normalize(name: &str) -> String {
    name.trim().replace(PATH_SEPARATOR, &SEGMENT_DELIMITER.to_string())
}
