// raysan-core/src/engine.rs
//! Defines the core SanitizationEngine trait.
//!
//! The trait is the seam between callers and a concrete sanitizer. Only
//! [`SanitizationEngine::sanitize`] and [`SanitizationEngine::sanitization_rules`]
//! need implementing; the type-guarded entry points, batching and JSON parsing
//! are provided on top of them, so every engine gets the same "always returns"
//! behavior.
//!
//! License: MIT OR Apache-2.0

use log::debug;

use crate::config::SanitizationConfig;
use crate::result::SanitizationResult;
use crate::rules::SanitizationRule;
use crate::value::Value;

pub trait SanitizationEngine: Send + Sync {
    /// Sanitizes `value`. `None` uses the engine's default configuration.
    ///
    /// Never fails: rule errors surface as warnings on the result.
    fn sanitize(&self, value: &Value, config: Option<&SanitizationConfig>) -> SanitizationResult;

    /// A copy of the rules this engine currently applies (custom per-call rules excluded).
    fn sanitization_rules(&self) -> Vec<SanitizationRule>;

    /// Sanitizes a string; anything else is returned untouched with a warning.
    fn sanitize_string(&self, value: &Value, config: Option<&SanitizationConfig>) -> SanitizationResult {
        if !value.is_string() {
            return SanitizationResult::rejected(value, "Input is not a string");
        }
        self.sanitize(value, config)
    }

    /// Sanitizes an object; anything else is returned untouched with a warning.
    fn sanitize_object(&self, value: &Value, config: Option<&SanitizationConfig>) -> SanitizationResult {
        if !value.is_object() {
            return SanitizationResult::rejected(value, "Input is not an object");
        }
        self.sanitize(value, config)
    }

    /// Sanitizes an array; anything else is returned untouched with a warning.
    fn sanitize_array(&self, value: &Value, config: Option<&SanitizationConfig>) -> SanitizationResult {
        if !value.is_array() {
            return SanitizationResult::rejected(value, "Input is not an array");
        }
        self.sanitize(value, config)
    }

    fn batch_sanitize(&self, values: &[Value], config: Option<&SanitizationConfig>) -> Vec<SanitizationResult> {
        values.iter().map(|value| self.sanitize(value, config)).collect()
    }

    /// Parses `text` as JSON and returns the sanitized value, or `None` if it does not parse.
    fn sanitize_json(&self, text: &str) -> Option<Value> {
        match serde_json::from_str::<Value>(text) {
            Ok(value) => Some(self.sanitize(&value, None).sanitized),
            Err(e) => {
                debug!("sanitize_json: input is not valid JSON: {}", e);
                None
            }
        }
    }
}
