//! Compiled regex patterns for value classification.
//!
//! Each pattern is anchored so a match always consumes the whole value.

use regex::Regex;

/// Pattern for whole numbers with an optional sign.
pub static INTEGER_PATTERN: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"^[-+]?[0-9]+$").expect("Invalid integer pattern"));

/// Pattern for decimal numbers, optionally in scientific notation.
pub static DECIMAL_PATTERN: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"^[-+]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][-+]?[0-9]+)?$")
        .expect("Invalid decimal pattern")
});
