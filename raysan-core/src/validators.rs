// File: raysan-core/src/validators.rs
//! Character and key predicates shared by the rule table, the recursive passes
//! and the [`needs_sanitization`] heuristic.
//!
//! License: MIT OR Apache-2.0

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::value::Value;

/// Keys that can reach an object's prototype chain when the data is later
/// merged into a JavaScript object.
static DANGEROUS_KEYS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    let mut set = HashSet::new();
    set.extend(["__proto__", "constructor", "prototype"]);
    set
});

static STRICT_KEY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("strict key pattern is valid"));

/// Control characters other than tab, newline and carriage return, plus angle brackets.
static SUSPICIOUS_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\x00-\x08\x0B\x0C\x0E-\x1F\x7F<>]").expect("suspicious char pattern is valid"));

pub fn is_dangerous_key(key: &str) -> bool {
    DANGEROUS_KEYS.contains(key)
}

/// Whether `key` survives the strict pass (identifier-like: letters, digits, `_`, `$`).
pub fn is_strict_key(key: &str) -> bool {
    STRICT_KEY_PATTERN.is_match(key)
}

/// Printable ASCII or whitespace.
pub fn is_strict_char(c: char) -> bool {
    (' '..='~').contains(&c) || c.is_whitespace()
}

/// C0 controls and DEL, except the whitespace controls `\t`, `\n` and `\r`.
pub fn is_disallowed_control(c: char) -> bool {
    c.is_ascii_control() && !matches!(c, '\t' | '\n' | '\r')
}

/// Zero-width and formatting characters that render as nothing but can carry
/// hidden content: zero-width spaces/joiners, directional marks and overrides,
/// word joiners, the BOM, soft hyphens and Unicode tag characters.
pub fn is_invisible_char(c: char) -> bool {
    matches!(
        c,
        '\u{00AD}'
            | '\u{200B}'..='\u{200F}'
            | '\u{202A}'..='\u{202E}'
            | '\u{2060}'..='\u{2064}'
            | '\u{2066}'..='\u{2069}'
            | '\u{FEFF}'
            | '\u{E0000}'..='\u{E007F}'
    )
}

fn has_suspicious_chars(s: &str) -> bool {
    SUSPICIOUS_CHARS.is_match(s)
}

fn flags_value(value: &Value) -> bool {
    match value {
        Value::String(s) => has_suspicious_chars(s),
        Value::Object(map) => map.keys().any(|k| is_dangerous_key(k) || has_suspicious_chars(k)),
        _ => false,
    }
}

/// Shallow heuristic: does this value contain control characters or angle
/// brackets in a string, in an object key, or in the elements of an array?
///
/// Arrays are inspected one level down; nested arrays are not followed. Objects
/// with a prototype-reaching key (`__proto__`, `constructor`, `prototype`) also
/// count.
pub fn needs_sanitization(value: &Value) -> bool {
    match value {
        Value::Array(items) => items.iter().any(flags_value),
        other => flags_value(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_does_not_need_sanitization() {
        assert!(!needs_sanitization(&Value::from("clean text")));
        assert!(!needs_sanitization(&Value::from("multi\nline\ttext")));
    }

    #[test]
    fn test_angle_brackets_and_controls_need_sanitization() {
        assert!(needs_sanitization(&Value::from("a<b")));
        assert!(needs_sanitization(&Value::from("bell\x07")));
    }

    #[test]
    fn test_object_keys_are_checked() {
        let clean = Value::object([("name", Value::from("<b>"))]);
        // Only keys are inspected on objects.
        assert!(!needs_sanitization(&clean));
        assert!(needs_sanitization(&Value::object([("<k>", Value::Null)])));
        assert!(needs_sanitization(&Value::object([("__proto__", Value::Null)])));
    }

    #[test]
    fn test_arrays_recurse_one_level() {
        assert!(needs_sanitization(&Value::Array(vec![Value::from("ok"), Value::from("x>y")])));
        let nested = Value::Array(vec![Value::Array(vec![Value::from("x>y")])]);
        assert!(!needs_sanitization(&nested));
    }

    #[test]
    fn test_strict_key_pattern() {
        assert!(is_strict_key("user_name"));
        assert!(is_strict_key("$ref"));
        assert!(!is_strict_key("1abc"));
        assert!(!is_strict_key("with-dash"));
        assert!(!is_strict_key(""));
    }

    #[test]
    fn test_invisible_chars() {
        assert!(is_invisible_char('\u{200B}'));
        assert!(is_invisible_char('\u{E0001}'));
        assert!(!is_invisible_char('é'));
    }
}
