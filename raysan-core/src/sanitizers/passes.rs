//! passes.rs - The three stages of a sanitization call.
//!
//! 1. [`apply_rules`]: the flat pass, each rule once against the top-level value.
//! 2. [`deep_sanitize`]: drops dangerous keys throughout nested structures.
//! 3. [`strict_sanitize`]: printable-ASCII strings and identifier-like keys.
//!
//! Both recursive passes stop at `max_depth`: a node at that depth is returned
//! as it came in.
//!
//! License: MIT OR Apache-2.0

use log::{debug, warn};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::config::SanitizationConfig;
use crate::errors::RaysanError;
use crate::rules::SanitizationRule;
use crate::validators::{is_dangerous_key, is_strict_char, is_strict_key};
use crate::value::Value;

/// Outcome of the flat pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RulePassOutcome {
    pub value: Value,
    /// Names of rules whose output differed from their input, in run order.
    pub applied_rules: Vec<String>,
    pub warnings: Vec<String>,
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Runs one rule against `value`. `Ok(None)` means the rule does not apply.
/// A panic in the predicate or transform is caught and reported like an `Err`.
fn run_rule(rule: &SanitizationRule, value: &Value, config: &SanitizationConfig) -> Result<Option<Value>, RaysanError> {
    let attempt = panic::catch_unwind(AssertUnwindSafe(|| {
        if rule.applies_to(value, config) {
            rule.apply(value, config).map(Some)
        } else {
            Ok(None)
        }
    }));
    match attempt {
        Ok(Ok(next)) => Ok(next),
        Ok(Err(e)) => Err(RaysanError::RuleFailed(rule.name.clone(), e.to_string())),
        Err(payload) => Err(RaysanError::RuleFailed(
            rule.name.clone(),
            format!("panicked: {}", panic_message(payload.as_ref())),
        )),
    }
}

/// Runs each applicable rule once, in the order given.
///
/// A rule is recorded only when it actually changed the value. A failing or
/// panicking rule contributes a warning and leaves the value as it was.
pub fn apply_rules(value: &Value, rules: &[SanitizationRule], config: &SanitizationConfig) -> RulePassOutcome {
    let mut working = value.clone();
    let mut applied_rules = Vec::new();
    let mut warnings = Vec::new();

    for rule in rules {
        match run_rule(rule, &working, config) {
            Ok(None) => {}
            Ok(Some(next)) => {
                if next != working {
                    debug!("Rule '{}' modified a {} value.", rule.name, working.kind());
                    applied_rules.push(rule.name.clone());
                    working = next;
                }
            }
            Err(failure) => {
                warn!("{}", failure);
                warnings.push(failure.to_string());
            }
        }
    }

    RulePassOutcome {
        value: working,
        applied_rules,
        warnings,
    }
}

/// Recursively drops dangerous keys from objects, descending through arrays.
/// Primitives pass through untouched.
pub fn deep_sanitize(value: Value, config: &SanitizationConfig, depth: usize) -> Value {
    if depth >= config.max_depth {
        return value;
    }
    match value {
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| deep_sanitize(item, config, depth + 1))
                .collect(),
        ),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(k, _)| {
                    let dangerous = is_dangerous_key(k);
                    if dangerous {
                        debug!("Deep pass dropped key '{}' at depth {}.", k, depth);
                    }
                    !dangerous
                })
                .map(|(k, v)| (k, deep_sanitize(v, config, depth + 1)))
                .collect(),
        ),
        other => other,
    }
}

/// Filters strings to printable ASCII plus whitespace, zeroes non-finite numbers
/// and keeps only identifier-like object keys.
pub fn strict_sanitize(value: Value, config: &SanitizationConfig, depth: usize) -> Value {
    if depth >= config.max_depth {
        return value;
    }
    match value {
        Value::String(s) => Value::String(s.chars().filter(|c| is_strict_char(*c)).collect()),
        Value::Number(n) if !n.is_finite() => Value::Number(0.0),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| strict_sanitize(item, config, depth + 1))
                .collect(),
        ),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(k, _)| is_strict_key(k))
                .map(|(k, v)| (k, strict_sanitize(v, config, depth + 1)))
                .collect(),
        ),
        other => other,
    }
}
