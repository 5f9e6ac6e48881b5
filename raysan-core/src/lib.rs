// raysan-core/src/lib.rs
//! # Raysan Core Library
//!
//! `raysan-core` sanitizes loosely-typed values (anything shaped like parsed
//! JSON) before they are handed to a page, a form or a model prompt. It defines
//! a closed [`Value`] model, a prioritized rule table, a shareable
//! [`RuleRegistry`] and a [`SanitizationEngine`] trait with a registry-driven
//! [`Sanitizer`] implementation.
//!
//! A call runs three stages:
//!
//! 1. **Rule pass**: every applicable rule, highest priority first, against the
//!    top-level value. Only rules that change the value are recorded.
//! 2. **Deep pass** (`enable_deep_sanitization`): drops `__proto__`,
//!    `constructor` and `prototype` keys throughout nested arrays and objects,
//!    down to `max_depth`.
//! 3. **Strict pass** (`enable_strict_mode`): printable-ASCII strings,
//!    identifier-like keys, finite numbers.
//!
//! Sanitization never fails. Rule errors become warnings, wrong-shaped input
//! to the typed entry points becomes a warning, and unparseable JSON becomes
//! `None`.
//!
//! ## Modules
//!
//! * `value`: The [`Value`] enum and its JSON conversions.
//! * `config`: [`SanitizationConfig`], YAML loading and [`merge_config`].
//! * `rules`: [`SanitizationRule`] records and [`create_custom_rule`].
//! * `sanitizers`: The built-in rules, the registry and the three passes.
//! * `engine`: The [`SanitizationEngine`] trait.
//! * `engines`: Concrete engines; currently [`Sanitizer`].
//! * `result`: [`SanitizationResult`] and its metadata.
//! * `report`: [`generate_report`] over many results.
//! * `html`: Regex-based [`sanitize_html`] (best effort, not a security boundary).
//! * `validators`: Character/key predicates and [`needs_sanitization`].
//! * `headless`: One-shot helpers that report parse errors.
//!
//! ## Usage Example
//!
//! ```rust
//! use raysan_core::{create_custom_rule, SanitizationEngine, Sanitizer, Value};
//!
//! let sanitizer = Sanitizer::new();
//!
//! let result = sanitizer.sanitize(&Value::from("a\0b"), None);
//! assert_eq!(result.sanitized, Value::from("ab"));
//! assert_eq!(result.applied_rules, ["remove_null_bytes"]);
//!
//! sanitizer.registry().add_custom_rule(create_custom_rule(
//!     "uppercase",
//!     "Uppercases strings",
//!     1000,
//!     |v| v.is_string(),
//!     |v, _| Ok(Value::from(v.as_str().unwrap_or_default().to_uppercase())),
//! ));
//! assert_eq!(sanitizer.sanitize(&Value::from("ab"), None).sanitized, Value::from("AB"));
//! ```
//!
//! ## Error Handling
//!
//! Sanitization entry points are infallible. File and parsing plumbing uses
//! [`RaysanError`] or `anyhow::Error`.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod html;
pub mod report;
pub mod result;
pub mod rules;
pub mod sanitizers;
pub mod validators;
pub mod value;

/// Re-exports the configuration types.
pub use config::{merge_config, ConfigOverrides, SanitizationConfig, DEFAULT_MAX_DEPTH, MAX_DEPTH_LIMIT};

/// Re-exports the custom error type for clear error reporting.
pub use errors::RaysanError;

/// Re-exports the engine trait and its registry-driven implementation.
pub use engine::SanitizationEngine;
pub use engines::sanitizer::Sanitizer;

/// Re-exports rule records, the built-in table and the registry.
pub use rules::{builtin_rules, create_custom_rule, RuleKind, RulePredicate, RuleTransform, SanitizationRule};
pub use sanitizers::builtin::BuiltinRule;
pub use sanitizers::registry::RuleRegistry;

/// Re-exports result and reporting types.
pub use report::{generate_report, RuleUsage, SanitizationReport};
pub use result::{SanitizationMetadata, SanitizationResult};

/// Re-exports the standalone helpers.
pub use headless::{headless_sanitize_json, headless_sanitize_value};
pub use html::sanitize_html;
pub use validators::needs_sanitization;
pub use value::{Value, ValueKind};
