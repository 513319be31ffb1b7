use once_cell::sync::Lazy;
use regex::Regex;

// Matches a numeric token with an optional single decimal separator, followed
// by a glued-on run of Latin or Cyrillic letters at the end of the label,
// e.g. "500гр" or "2.5kg".
static TRAILING_UNIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+[.,]?\d*)[A-Za-zА-Яа-я]+$").expect("valid unit-suffix pattern"));

/// Canonicalizes a raw category label: trims, collapses internal whitespace
/// runs to single spaces, and strips a trailing alphabetic suffix glued onto a
/// numeric token (an accidental unit, like the "гр" in "500гр").
///
/// Idempotent; never fails.
pub fn normalize(label: &str) -> String {
    let collapsed = label.split_whitespace().collect::<Vec<_>>().join(" ");
    TRAILING_UNIT.replace(&collapsed, "$1").into_owned()
}
