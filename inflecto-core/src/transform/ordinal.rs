//! English ordinal suffixes

/// Suffix for `n`: `"st"`, `"nd"`, `"rd"` or `"th"`
///
/// Only the magnitude matters, so `-1` and `1` share a suffix.
pub fn ordinal(n: impl Into<i128>) -> &'static str {
    let abs = n.into().unsigned_abs();

    if matches!(abs % 100, 11..=13) {
        return "th";
    }
    match abs % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// `n` followed by its ordinal suffix, sign included
///
/// ```rust
/// assert_eq!(inflecto_core::ordinalize(22), "22nd");
/// assert_eq!(inflecto_core::ordinalize(-113), "-113th");
/// ```
pub fn ordinalize(n: impl Into<i128>) -> String {
    let n = n.into();
    format!("{n}{}", ordinal(n))
}
