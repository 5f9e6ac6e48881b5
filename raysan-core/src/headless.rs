// raysan-core/src/headless.rs
//! `headless.rs`
//! Convenience wrappers for one-shot, non-interactive sanitization of JSON text.
//!
//! Unlike [`SanitizationEngine::sanitize_json`], which swallows parse failures,
//! these helpers report them, which is what a pipeline or CLI wants.

use log::debug;

use crate::config::SanitizationConfig;
use crate::engine::SanitizationEngine;
use crate::engines::sanitizer::Sanitizer;
use crate::errors::RaysanError;
use crate::result::SanitizationResult;
use crate::value::Value;

/// Parses `input`, sanitizes it with the built-in rules and returns the full result.
pub fn headless_sanitize_value(
    input: &str,
    config: Option<&SanitizationConfig>,
) -> Result<SanitizationResult, RaysanError> {
    let value: Value = serde_json::from_str(input)?;
    let result = Sanitizer::new().sanitize(&value, config);
    debug!(
        "Headless sanitization applied {} rule(s) with {} warning(s).",
        result.applied_rules.len(),
        result.warnings.len()
    );
    Ok(result)
}

/// Parses `input`, sanitizes it with the built-in rules and returns compact JSON.
///
/// # Arguments
///
/// * `input` - JSON text.
/// * `config` - Settings for the call; `None` uses the defaults.
pub fn headless_sanitize_json(input: &str, config: Option<&SanitizationConfig>) -> Result<String, RaysanError> {
    let result = headless_sanitize_value(input, config)?;
    Ok(serde_json::to_string(&result.sanitized)?)
}
