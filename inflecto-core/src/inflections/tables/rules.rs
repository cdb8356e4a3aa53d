//! Ordered pattern/replacement rule sets
//!
//! Rules are kept highest-priority first. New rules are pushed to the front,
//! so the most recently registered rule is always tried before the defaults
//! it overrides.

use std::borrow::Cow;
use std::collections::VecDeque;
use std::fmt;

use regex::Regex;

use crate::error::{InflectError, Result};

/// Left-hand side of a rule
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Plain substring; only the first occurrence is replaced
    Literal(String),
    /// Regular expression; only the first match is replaced and `${n}`
    /// references in the replacement are expanded
    Regex(Regex),
}

impl Pattern {
    /// Literal substring pattern
    pub fn literal(text: impl Into<String>) -> Self {
        Pattern::Literal(text.into())
    }

    /// Compile a regular expression pattern
    pub fn regex(source: &str) -> Result<Self> {
        Regex::new(source)
            .map(Pattern::Regex)
            .map_err(|source_err| InflectError::InvalidPattern {
                pattern: source.to_string(),
                source: source_err,
            })
    }

    /// Source text of the pattern
    pub fn as_str(&self) -> &str {
        match self {
            Pattern::Literal(text) => text,
            Pattern::Regex(regex) => regex.as_str(),
        }
    }

    /// Whether this is a regular expression pattern
    pub fn is_regex(&self) -> bool {
        matches!(self, Pattern::Regex(_))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Literal(text) => write!(f, "{text:?}"),
            Pattern::Regex(regex) => write!(f, "/{}/", regex.as_str()),
        }
    }
}

/// A single pattern/replacement pair
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Pattern,
    replacement: String,
}

impl Rule {
    /// Create a rule
    pub fn new(pattern: Pattern, replacement: impl Into<String>) -> Self {
        Self {
            pattern,
            replacement: replacement.into(),
        }
    }

    /// The rule's pattern
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// The rule's replacement template
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Apply the rule, returning `None` unless the word actually changed
    pub fn apply<'w>(&self, word: &'w str) -> Option<Cow<'w, str>> {
        let replaced = match &self.pattern {
            Pattern::Literal(text) => {
                if text.is_empty() || !word.contains(text.as_str()) {
                    return None;
                }
                Cow::Owned(word.replacen(text.as_str(), &self.replacement, 1))
            }
            Pattern::Regex(regex) => regex.replace(word, self.replacement.as_str()),
        };

        if replaced == word {
            None
        } else {
            Some(replaced)
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {:?}", self.pattern, self.replacement)
    }
}

/// Priority-ordered rule set
#[derive(Debug, Clone, Default)]
pub struct Rules {
    rules: VecDeque<Rule>,
}

impl Rules {
    /// Create an empty rule set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a rule ahead of every existing rule
    pub fn prepend(&mut self, pattern: Pattern, replacement: impl Into<String>) {
        let rule = Rule::new(pattern, replacement);
        log::trace!("prepending rule {rule}");
        self.rules.push_front(rule);
    }

    /// Apply the first rule that changes `word`; unchanged input otherwise
    pub fn apply(&self, word: &str) -> String {
        self.rules
            .iter()
            .find_map(|rule| rule.apply(word))
            .map(Cow::into_owned)
            .unwrap_or_else(|| word.to_string())
    }

    /// Rules in priority order
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Visit rules in priority order
    pub fn for_each<F: FnMut(&Rule)>(&self, visitor: F) {
        self.rules.iter().for_each(visitor);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
