//! builtin.rs - The built-in rule table.
//!
//! Each [`BuiltinRule`] pairs a predicate with an infallible transform over a
//! single value. They only look at the value they are handed; recursion into
//! arrays and objects belongs to the deep pass.
//!
//! Ordering matters for idempotence: NUL, escape, control and invisible
//! character removal all run before script stripping, so a later deletion can
//! never glue a `<script>` tag back together. Whitespace normalization runs last
//! among string rules; the script pattern already tolerates any whitespace it
//! would collapse.
//!
//! License: MIT OR Apache-2.0

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::SanitizationConfig;
use crate::validators::{is_dangerous_key, is_disallowed_control, is_invisible_char};
use crate::value::Value;

static SCRIPT_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").expect("script block pattern is valid"));

const ESC: char = '\u{1b}';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinRule {
    RemoveNullBytes,
    StripAnsiEscapes,
    RemoveControlCharacters,
    StripInvisibleUnicode,
    StripScriptTags,
    RemoveDangerousKeys,
    NormalizeWhitespace,
    SanitizeNumbers,
}

impl BuiltinRule {
    pub const ALL: [BuiltinRule; 8] = [
        BuiltinRule::RemoveNullBytes,
        BuiltinRule::StripAnsiEscapes,
        BuiltinRule::RemoveControlCharacters,
        BuiltinRule::StripInvisibleUnicode,
        BuiltinRule::StripScriptTags,
        BuiltinRule::RemoveDangerousKeys,
        BuiltinRule::NormalizeWhitespace,
        BuiltinRule::SanitizeNumbers,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BuiltinRule::RemoveNullBytes => "remove_null_bytes",
            BuiltinRule::StripAnsiEscapes => "strip_ansi_escapes",
            BuiltinRule::RemoveControlCharacters => "remove_control_characters",
            BuiltinRule::StripInvisibleUnicode => "strip_invisible_unicode",
            BuiltinRule::StripScriptTags => "strip_script_tags",
            BuiltinRule::RemoveDangerousKeys => "remove_dangerous_keys",
            BuiltinRule::NormalizeWhitespace => "normalize_whitespace",
            BuiltinRule::SanitizeNumbers => "sanitize_numbers",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            BuiltinRule::RemoveNullBytes => "Removes NUL bytes from strings",
            BuiltinRule::StripAnsiEscapes => "Removes ANSI/VT terminal escape sequences from strings",
            BuiltinRule::RemoveControlCharacters => {
                "Removes control characters other than tab, newline and carriage return"
            }
            BuiltinRule::StripInvisibleUnicode => {
                "Removes zero-width, directional-override, BOM and tag characters"
            }
            BuiltinRule::StripScriptTags => "Removes <script> blocks from strings",
            BuiltinRule::RemoveDangerousKeys => {
                "Drops __proto__, constructor and prototype keys from objects"
            }
            BuiltinRule::NormalizeWhitespace => {
                "Collapses whitespace runs and trims strings unless whitespace is preserved"
            }
            BuiltinRule::SanitizeNumbers => "Replaces NaN and infinite numbers with 0",
        }
    }

    pub fn priority(self) -> i32 {
        match self {
            BuiltinRule::RemoveNullBytes => 100,
            BuiltinRule::StripAnsiEscapes => 95,
            BuiltinRule::RemoveControlCharacters => 90,
            BuiltinRule::StripInvisibleUnicode => 85,
            BuiltinRule::StripScriptTags => 80,
            BuiltinRule::RemoveDangerousKeys => 75,
            BuiltinRule::NormalizeWhitespace => 70,
            BuiltinRule::SanitizeNumbers => 60,
        }
    }

    pub fn applies_to(self, value: &Value, config: &SanitizationConfig) -> bool {
        match (self, value) {
            (BuiltinRule::StripAnsiEscapes, Value::String(s)) => s.contains(ESC),
            (BuiltinRule::NormalizeWhitespace, Value::String(_)) => !config.preserve_whitespace,
            (BuiltinRule::RemoveDangerousKeys, Value::Object(_)) => true,
            (BuiltinRule::SanitizeNumbers, Value::Number(_)) => true,
            (
                BuiltinRule::RemoveNullBytes
                | BuiltinRule::RemoveControlCharacters
                | BuiltinRule::StripInvisibleUnicode
                | BuiltinRule::StripScriptTags,
                Value::String(_),
            ) => true,
            _ => false,
        }
    }

    /// Applies the rule. Values the rule does not handle come back unchanged.
    pub fn transform(self, value: &Value, _config: &SanitizationConfig) -> Value {
        match (self, value) {
            (BuiltinRule::RemoveNullBytes, Value::String(s)) => Value::String(s.replace('\0', "")),
            (BuiltinRule::StripAnsiEscapes, Value::String(s)) => Value::String(strip_ansi(s)),
            (BuiltinRule::RemoveControlCharacters, Value::String(s)) => {
                Value::String(s.chars().filter(|c| !is_disallowed_control(*c)).collect())
            }
            (BuiltinRule::StripInvisibleUnicode, Value::String(s)) => {
                Value::String(s.chars().filter(|c| !is_invisible_char(*c)).collect())
            }
            (BuiltinRule::StripScriptTags, Value::String(s)) => Value::String(strip_script_blocks(s)),
            (BuiltinRule::RemoveDangerousKeys, Value::Object(map)) => {
                let mut kept = map.clone();
                kept.retain(|k, _| !is_dangerous_key(k));
                Value::Object(kept)
            }
            (BuiltinRule::NormalizeWhitespace, Value::String(s)) => {
                Value::String(s.split_whitespace().collect::<Vec<_>>().join(" "))
            }
            (BuiltinRule::SanitizeNumbers, Value::Number(n)) if !n.is_finite() => Value::Number(0.0),
            _ => value.clone(),
        }
    }
}

fn strip_ansi(s: &str) -> String {
    let stripped = strip_ansi_escapes::strip(s.as_bytes());
    String::from_utf8_lossy(&stripped).into_owned()
}

/// Removes `<script>` blocks until none remain, so nested fragments such as
/// `<scr<script></script>ipt>` cannot reassemble into a new block.
pub fn strip_script_blocks(s: &str) -> String {
    let mut current = s.to_string();
    while SCRIPT_BLOCK.is_match(&current) {
        current = SCRIPT_BLOCK.replace_all(&current, "").into_owned();
    }
    current
}
