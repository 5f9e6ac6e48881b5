// raysan-core/src/engines/sanitizer.rs
//! A `SanitizationEngine` implementation driven by a [`RuleRegistry`].
//!
//! Each call snapshots the registry (plus the call's custom rules), runs the
//! flat rule pass, then the deep and strict passes as configured.
//! License: MIT OR Apache-2.0

use log::debug;
use std::sync::Arc;
use std::time::Instant;

use crate::config::SanitizationConfig;
use crate::engine::SanitizationEngine;
use crate::result::SanitizationResult;
use crate::rules::SanitizationRule;
use crate::sanitizers::passes::{apply_rules, deep_sanitize, strict_sanitize};
use crate::sanitizers::registry::RuleRegistry;
use crate::value::Value;

#[derive(Debug, Clone)]
pub struct Sanitizer {
    registry: Arc<RuleRegistry>,
    defaults: SanitizationConfig,
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Sanitizer {
    /// A sanitizer over a fresh registry holding the built-in rules.
    pub fn new() -> Self {
        Self::with_registry(Arc::new(RuleRegistry::new()))
    }

    /// A sanitizer over a shared registry; edits to the registry affect
    /// every later call.
    pub fn with_registry(registry: Arc<RuleRegistry>) -> Self {
        Self {
            registry,
            defaults: SanitizationConfig::default(),
        }
    }

    /// Replaces the configuration used when a call passes `None`.
    pub fn with_defaults(mut self, defaults: SanitizationConfig) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn registry(&self) -> &Arc<RuleRegistry> {
        &self.registry
    }

    pub fn defaults(&self) -> &SanitizationConfig {
        &self.defaults
    }
}

impl SanitizationEngine for Sanitizer {
    fn sanitize(&self, value: &Value, config: Option<&SanitizationConfig>) -> SanitizationResult {
        let started = Instant::now();
        let config = config.unwrap_or(&self.defaults);
        let rules = self.registry.snapshot(&config.custom_rules);
        debug!(
            "Sanitizing a {} value with {} rules (deep: {}, strict: {}, max_depth: {}).",
            value.kind(),
            rules.len(),
            config.enable_deep_sanitization,
            config.enable_strict_mode,
            config.max_depth
        );

        let outcome = apply_rules(value, &rules, config);
        let mut sanitized = outcome.value;
        if config.enable_deep_sanitization {
            sanitized = deep_sanitize(sanitized, config, 0);
        }
        if config.enable_strict_mode {
            sanitized = strict_sanitize(sanitized, config, 0);
        }

        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
        SanitizationResult::new(
            value.clone(),
            sanitized,
            outcome.applied_rules,
            outcome.warnings,
            elapsed_ms,
        )
    }

    fn sanitization_rules(&self) -> Vec<SanitizationRule> {
        self.registry.rules()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::create_custom_rule;

    #[test]
    fn test_defaults_apply_when_config_is_none() {
        let sanitizer = Sanitizer::new().with_defaults(SanitizationConfig {
            preserve_whitespace: true,
            ..Default::default()
        });
        let result = sanitizer.sanitize(&Value::from("  a  "), None);
        assert_eq!(result.sanitized, Value::from("  a  "));

        let result = sanitizer.sanitize(&Value::from("  a  "), Some(&SanitizationConfig::default()));
        assert_eq!(result.sanitized, Value::from("a"));
    }

    #[test]
    fn test_per_call_custom_rules_do_not_leak_into_registry() {
        let sanitizer = Sanitizer::new();
        let config = SanitizationConfig::default().with_custom_rule(create_custom_rule(
            "redact",
            "",
            1,
            |v| v.as_str() == Some("secret"),
            |_, _| Ok(Value::from("[REDACTED]")),
        ));
        let result = sanitizer.sanitize(&Value::from("secret"), Some(&config));
        assert_eq!(result.sanitized, Value::from("[REDACTED]"));
        assert!(result.applied_rules.contains(&"redact".to_string()));
        assert!(!sanitizer.registry().contains("redact"));
    }

    #[test]
    fn test_shared_registry_edits_are_visible() {
        let registry = Arc::new(RuleRegistry::empty());
        let sanitizer = Sanitizer::with_registry(Arc::clone(&registry));
        assert!(sanitizer.sanitization_rules().is_empty());
        registry.add_custom_rule(create_custom_rule("zero", "", 1, |v| v.as_f64().is_some(), |_, _| {
            Ok(Value::from(0.0))
        }));
        assert_eq!(sanitizer.sanitize(&Value::from(5.0), None).sanitized, Value::from(0.0));
    }

    #[test]
    fn test_concurrent_sanitize_sees_whole_registry_states() {
        let sanitizer = Arc::new(Sanitizer::new());
        let uppercase = || {
            create_custom_rule("uppercase", "", 1000, |v| v.is_string(), |v, _| {
                Ok(Value::String(v.as_str().unwrap_or_default().to_uppercase()))
            })
        };

        std::thread::scope(|scope| {
            let registry = Arc::clone(sanitizer.registry());
            scope.spawn(move || {
                for _ in 0..500 {
                    registry.add_custom_rule(uppercase());
                    registry.remove_rule("uppercase");
                }
            });

            for _ in 0..4 {
                let sanitizer = Arc::clone(&sanitizer);
                scope.spawn(move || {
                    for _ in 0..500 {
                        let result = sanitizer.sanitize(&Value::from("x"), None);
                        let applied = result.applied_rules.iter().any(|r| r == "uppercase");
                        if applied {
                            assert_eq!(result.sanitized, Value::from("X"));
                        } else {
                            assert_eq!(result.sanitized, Value::from("x"));
                        }
                        assert!(result.warnings.is_empty());
                    }
                });
            }
        });

        assert!(!sanitizer.registry().contains("uppercase"));
    }

    #[test]
    fn test_metadata_types() {
        let result = Sanitizer::new().sanitize(&Value::from(f64::NAN), None);
        assert_eq!(result.sanitized, Value::from(0.0));
        assert_eq!(result.metadata.original_type, crate::value::ValueKind::Number);
        assert!(result.metadata.processing_time_ms >= 0.0);
    }
}
