//! Key token conversion between snake_case and CamelCase
//!
//! The rules follow the usual inflection heuristics: underscores mark word
//! boundaries in one direction, uppercase letters mark them in the other.
//! The two directions are not exact inverses:
//!
//! ```
//! use keycase::casing::{to_camel, to_snake};
//!
//! assert_eq!(to_snake("IOError"), "io_error");
//! assert_eq!(to_camel(&to_snake("IOError"), true), "IoError");
//! ```

use regex::{Captures, Regex};
use std::sync::LazyLock;

static WORD_START_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?:^|_)(.)").unwrap());
static ACRONYM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").unwrap());
static WORD_END_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([a-z\d])([A-Z])").unwrap());

/// Convert a key to CamelCase.
///
/// With `capitalize_first` set the result is UpperCamelCase (`"device_type"`
/// becomes `"DeviceType"`); otherwise the first character of the result is
/// lowercased (`"deviceType"`). Hyphens are left alone.
pub fn to_camel(key: &str, capitalize_first: bool) -> String {
    let upper = WORD_START_RE
        .replace_all(key, |caps: &Captures<'_>| caps[1].to_uppercase())
        .into_owned();

    if capitalize_first {
        return upper;
    }

    let mut chars = upper.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => upper,
    }
}

/// Convert a key to lowerCamelCase, the form used for rewritten mapping keys.
pub fn to_lower_camel(key: &str) -> String {
    to_camel(key, false)
}

/// Convert a key to snake_case.
///
/// An underscore is inserted before the last capital of an uppercase run that
/// precedes a capitalised word (`"HTTPServer"` becomes `"http_server"`) and
/// between a lowercase letter or digit and a following capital. Hyphens
/// become underscores and the whole result is lowercased.
pub fn to_snake(key: &str) -> String {
    let split = ACRONYM_RE.replace_all(key, "${1}_${2}");
    let split = WORD_END_RE.replace_all(&split, "${1}_${2}");
    split.replace('-', "_").to_lowercase()
}
