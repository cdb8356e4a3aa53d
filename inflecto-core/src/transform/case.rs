//! Casing transforms: camelize, underscore, dasherize, humanize, titleize

use std::sync::OnceLock;

use regex::Regex;
use smallvec::SmallVec;

use crate::inflections::Inflections;

/// Hierarchical name separator in camelized form
pub const SEGMENT_DELIMITER: char = '.';
/// Hierarchical name separator in underscored form
pub const PATH_SEPARATOR: char = '/';

static ACRONYM_RUN: OnceLock<Regex> = OnceLock::new();
static LOWER_TO_UPPER: OnceLock<Regex> = OnceLock::new();

/// `XMLParser` -> `XML_Parser`
fn acronym_run() -> &'static Regex {
    ACRONYM_RUN.get_or_init(|| {
        Regex::new(r"([A-Z\d]+)([A-Z][a-z])").expect("Invalid acronym run pattern")
    })
}

/// `dataMapper` -> `data_Mapper`
fn lower_to_upper() -> &'static Regex {
    LOWER_TO_UPPER
        .get_or_init(|| Regex::new(r"([a-z\d])([A-Z])").expect("Invalid case boundary pattern"))
}

/// Convert `snake_case` (or `path/snake_case`) to CamelCase
///
/// `upper` only affects the very first sub-word: every later segment and
/// every later sub-word is capitalized. Registered acronyms keep their
/// canonical casing wherever they appear.
///
/// ```rust
/// use inflecto_core::Inflections;
///
/// let inflections = Inflections::english().unwrap();
/// assert_eq!(inflections.camelize("active_model/errors", true), "ActiveModel.Errors");
/// assert_eq!(inflections.camelize("active_model", false), "activeModel");
/// ```
pub fn camelize(word: &str, inflections: &Inflections, upper: bool) -> String {
    let acronyms = inflections.acronyms();
    let delimiter = SEGMENT_DELIMITER.to_string();
    let normalized = word.replace(PATH_SEPARATOR, &delimiter);

    let segments: SmallVec<[String; 4]> = normalized
        .split(SEGMENT_DELIMITER)
        .enumerate()
        .map(|(segment_index, segment)| {
            segment
                .split(['_', '-'])
                .enumerate()
                .map(|(index, part)| acronyms.apply(part, upper || segment_index > 0 || index > 0))
                .collect::<String>()
        })
        .collect();

    segments.join(delimiter.as_str())
}

/// Convert CamelCase to `snake_case`
///
/// Segment delimiters become path separators, and registered acronyms are
/// kept together as one lowercase word.
pub fn underscore(word: &str, inflections: &Inflections) -> String {
    if !word.contains(|c: char| c.is_uppercase() || c == '-' || c == SEGMENT_DELIMITER) {
        return word.to_string();
    }

    let word = word.replace(SEGMENT_DELIMITER, &PATH_SEPARATOR.to_string());
    let word = inflections.acronyms().downcase_matches(&word);
    let word = acronym_run().replace_all(&word, "${1}_${2}");
    let word = lower_to_upper().replace_all(&word, "${1}_${2}");
    word.replace('-', "_").to_lowercase()
}

/// Replace underscores with dashes
pub fn dasherize(word: &str) -> String {
    word.replace('_', "-")
}

/// Turn an attribute name into display text
///
/// Human rules run first, then a trailing `_id` is dropped and underscores
/// become spaces. Only the first word is capitalized; registered acronyms
/// keep their casing in every word.
pub fn humanize(word: &str, inflections: &Inflections) -> String {
    let result = inflections.humans().apply(word);
    let result = result.strip_suffix("_id").unwrap_or(&result);
    let result = result.replace('_', " ");

    let separator = result.chars().find(|c| !is_word_char(*c)).unwrap_or(' ');
    let acronyms = inflections.acronyms();
    let words: SmallVec<[String; 8]> = result
        .split(separator)
        .enumerate()
        .map(|(index, part)| acronyms.apply(part, index == 0))
        .collect();
    words.join(separator.to_string().as_str())
}

/// Capitalize every word of the humanized form
///
/// ```rust
/// use inflecto_core::Inflections;
///
/// let inflections = Inflections::english().unwrap();
/// assert_eq!(inflections.titleize("TheManWithoutAPast"), "The Man Without A Past");
/// ```
pub fn titleize(word: &str, inflections: &Inflections) -> String {
    let humanized = humanize(&underscore(word, inflections), inflections);
    let acronyms = inflections.acronyms();

    let words: SmallVec<[String; 8]> = humanized
        .split(' ')
        .map(|part| acronyms.apply(part, true))
        .collect();
    words.join(" ")
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
