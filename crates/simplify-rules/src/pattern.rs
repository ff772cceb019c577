//! Recognizing regexps that only ever match one literal string.
//!
//! A pattern is fixed when it is made entirely of
//!
//! - ordinary characters (anything but `.*+?[^$\`),
//! - a backslash followed by one of those special characters,
//! - a one-character bracket class such as `[.]`.
//!
//! Backslash-letter escapes (`\w`, `\b`, `\s-`, ...) are classes or anchors, so
//! any pattern containing one is not fixed. Anything outside this grammar is
//! treated as not fixed, even if it happens to be literal.

use regex::Regex;
use std::sync::LazyLock;

static FIXED_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[^.*+?\[^$\\]|\\[.*+?\[^$\\]|\[[^\]^]\])*$")
        .expect("fixed-pattern grammar is a valid regex")
});

/// Whether `pattern` matches exactly one literal string.
pub fn is_fixed(pattern: &str) -> bool {
    FIXED_PATTERN.is_match(pattern)
}

/// The literal string a fixed pattern matches, or `None` if not fixed.
pub fn literal_of_fixed(pattern: &str) -> Option<String> {
    if !is_fixed(pattern) {
        return None;
    }
    let mut literal = String::with_capacity(pattern.len());
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => literal.extend(chars.next()),
            '[' => {
                literal.extend(chars.next());
                chars.next(); // ']'
            }
            _ => literal.push(c),
        }
    }
    Some(literal)
}
