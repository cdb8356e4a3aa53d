//! Acronym registry used by the casing transforms
//!
//! Keys are lowercase words, values the canonical casing that must survive
//! camelization (`"api"` -> `"API"`). A combined alternation of every
//! canonical form is rebuilt on each insertion.

use std::borrow::Cow;
use std::collections::HashMap;

use regex::Regex;

/// Acronyms known to the engine but only seeded on request
pub const DEFAULT_ACRONYMS: [&str; 8] = [
    "API", "CSRF", "CSV", "DB", "HMAC", "HTTP", "JSON", "OpenSSL",
];

/// Lowercase key to canonical casing, plus the derived match pattern
#[derive(Debug, Clone, Default)]
pub struct Acronyms {
    entries: HashMap<String, String>,
    /// `None` while empty: an empty table matches nothing
    pattern: Option<Regex>,
}

impl Acronyms {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite an entry and rebuild the combined pattern
    pub fn add(&mut self, key: impl Into<String>, canonical: impl Into<String>) {
        let key = key.into();
        let canonical = canonical.into();
        log::trace!("registering acronym {key} -> {canonical}");
        self.entries.insert(key, canonical);
        self.pattern = self.build_pattern();
    }

    /// Canonical form for `word`, if it is a registered acronym
    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries.get(&word.to_lowercase()).map(String::as_str)
    }

    /// Acronym casing when known, otherwise optionally capitalized
    pub fn apply(&self, word: &str, capitalize: bool) -> String {
        match self.get(word) {
            Some(canonical) => canonical.to_string(),
            None if capitalize => capitalize_first(word),
            None => word.to_string(),
        }
    }

    /// Combined pattern over all canonical forms
    ///
    /// Groups: `pre` (boundary or preceding alphanumeric), `acronym`, and
    /// `post` (boundary or following non-lowercase character).
    pub fn pattern(&self) -> Option<&Regex> {
        self.pattern.as_ref()
    }

    /// Whether any registered acronym occurs in `text`
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(text))
    }

    /// Registered acronyms occurring in `text`, left to right
    pub fn find_iter<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let Some(pattern) = &self.pattern else {
            return Vec::new();
        };
        pattern
            .captures_iter(text)
            .filter_map(|caps| caps.name("acronym"))
            .map(|m| m.as_str())
            .collect()
    }

    /// Lowercase every registered acronym, splitting it from a preceding word
    ///
    /// `"MyAPIClient"` becomes `"My_apiClient"` with `API` registered.
    pub fn downcase_matches<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let Some(pattern) = &self.pattern else {
            return Cow::Borrowed(text);
        };
        pattern.replace_all(text, |caps: &regex::Captures<'_>| {
            let pre = caps.name("pre").map_or("", |m| m.as_str());
            let acronym = caps.name("acronym").map_or("", |m| m.as_str());
            let post = caps.name("post").map_or("", |m| m.as_str());
            let joint = if pre.is_empty() { "" } else { "_" };
            format!("{pre}{joint}{}{post}", acronym.to_lowercase())
        })
    }

    /// `(key, canonical)` pairs sorted by key
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        let mut pairs: Vec<_> = self
            .entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect();
        pairs.sort_unstable();
        pairs.into_iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn build_pattern(&self) -> Option<Regex> {
        if self.entries.is_empty() {
            return None;
        }

        // Longest first so "HTTPS" is preferred over "HTTP"
        let mut forms: Vec<&str> = self.entries.values().map(String::as_str).collect();
        forms.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        forms.dedup();

        let alternation = forms
            .iter()
            .map(|form| regex::escape(form))
            .collect::<Vec<_>>()
            .join("|");
        let source =
            format!(r"(?P<pre>\b|[A-Za-z\d])(?P<acronym>{alternation})(?P<post>\b|[^a-z])");

        match Regex::new(&source) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                log::warn!("acronym pattern could not be compiled: {e}");
                None
            }
        }
    }
}

/// Uppercase the first character, leave the rest untouched
pub(crate) fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
