//! Words exempt from pluralization and singularization

use std::collections::BTreeMap;

/// Case-insensitive word set that remembers the spelling it was given
#[derive(Debug, Clone, Default)]
pub struct Uncountables {
    /// lowercase -> word as inserted
    words: BTreeMap<String, String>,
}

impl Uncountables {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a word; the original spelling is kept for display
    pub fn insert(&mut self, word: impl Into<String>) {
        let word = word.into();
        self.words.insert(word.to_lowercase(), word);
    }

    /// Remove a word regardless of its casing
    pub fn remove(&mut self, word: &str) -> bool {
        self.words.remove(&word.to_lowercase()).is_some()
    }

    /// Case-insensitive membership
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(&word.to_lowercase())
    }

    /// Words as inserted, ordered by their lowercase form
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.values().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
