//! Class, table and key names built from the other transforms

use crate::inflections::Inflections;
use crate::transform::case::{camelize, underscore, SEGMENT_DELIMITER};
use crate::transform::noun::{pluralize, singularize};

/// Class name for a table name: `"blog_posts"` -> `"BlogPost"`
///
/// Any dotted prefix (a schema name) is dropped first.
pub fn classify(table_name: &str, inflections: &Inflections) -> String {
    let name = match table_name.rfind('.') {
        Some(index) => &table_name[index + 1..],
        None => table_name,
    };
    camelize(&singularize(name, inflections), inflections, true)
}

/// Table name for a class name: `"RawScaledScorer"` -> `"raw_scaled_scorers"`
pub fn tableize(class_name: &str, inflections: &Inflections) -> String {
    pluralize(&underscore(class_name, inflections), inflections)
}

/// Foreign key column for a class name: `"Admin.Message"` -> `"message_id"`
///
/// The name is singularized, so `"Messages"` gives `"message_id"` as well.
pub fn foreign_key(
    class_name: &str,
    inflections: &Inflections,
    separate_with_underscore: bool,
) -> String {
    let base = underscore(&singularize(demodulize(class_name), inflections), inflections);
    let suffix = if separate_with_underscore { "_id" } else { "id" };
    format!("{base}{suffix}")
}

/// Last segment of a dotted path: `"Admin.UserSession"` -> `"UserSession"`
pub fn demodulize(path: &str) -> &str {
    match path.rfind(SEGMENT_DELIMITER) {
        Some(index) => &path[index + SEGMENT_DELIMITER.len_utf8()..],
        None => path,
    }
}

/// Everything before the last segment: `"Net.Http.Get"` -> `"Net.Http"`
pub fn deconstantize(path: &str) -> &str {
    match path.rfind(SEGMENT_DELIMITER) {
        Some(index) => &path[..index],
        None => "",
    }
}
