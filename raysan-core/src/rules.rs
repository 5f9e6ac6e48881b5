//! rules.rs - Rule records for the sanitization pipeline.
//!
//! A [`SanitizationRule`] is data: a name, a priority and a [`RuleKind`]. Built-in
//! rules select one of the transforms in [`crate::sanitizers::builtin`] by enum tag,
//! which keeps the rule table inspectable. Custom rules carry caller-supplied
//! closures.
//!
//! License: MIT OR Apache-2.0

use std::fmt;
use std::sync::Arc;

use crate::config::SanitizationConfig;
use crate::sanitizers::builtin::BuiltinRule;
use crate::value::Value;

/// Decides whether a custom rule applies to a value.
pub type RulePredicate = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// Produces the replacement value for a custom rule. An `Err` or a panic is
/// reported as a warning and the value is left as it was. Panics are only
/// caught in unwinding builds; under `panic = "abort"` they end the process.
pub type RuleTransform = Arc<dyn Fn(&Value, &SanitizationConfig) -> anyhow::Result<Value> + Send + Sync>;

/// What a rule does when it runs.
#[derive(Clone)]
pub enum RuleKind {
    Builtin(BuiltinRule),
    Custom {
        predicate: RulePredicate,
        transform: RuleTransform,
    },
}

/// A named, prioritized predicate and transform pair.
#[derive(Clone)]
pub struct SanitizationRule {
    /// Unique, human-readable identifier (e.g. "remove_null_bytes").
    pub name: String,
    pub description: String,
    /// Higher runs first; equal priorities keep registration order.
    pub priority: i32,
    pub kind: RuleKind,
}

impl SanitizationRule {
    pub fn builtin(rule: BuiltinRule) -> Self {
        Self {
            name: rule.name().to_string(),
            description: rule.description().to_string(),
            priority: rule.priority(),
            kind: RuleKind::Builtin(rule),
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self.kind, RuleKind::Builtin(_))
    }

    /// Whether this rule should run against `value`.
    pub fn applies_to(&self, value: &Value, config: &SanitizationConfig) -> bool {
        match &self.kind {
            RuleKind::Builtin(rule) => rule.applies_to(value, config),
            RuleKind::Custom { predicate, .. } => predicate(value),
        }
    }

    /// Runs the transform. Built-in transforms cannot fail.
    pub fn apply(&self, value: &Value, config: &SanitizationConfig) -> anyhow::Result<Value> {
        match &self.kind {
            RuleKind::Builtin(rule) => Ok(rule.transform(value, config)),
            RuleKind::Custom { transform, .. } => transform(value, config),
        }
    }
}

impl fmt::Debug for SanitizationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match &self.kind {
            RuleKind::Builtin(rule) => format!("Builtin({:?})", rule),
            RuleKind::Custom { .. } => "Custom".to_string(),
        };
        f.debug_struct("SanitizationRule")
            .field("name", &self.name)
            .field("priority", &self.priority)
            .field("kind", &kind)
            .finish()
    }
}

/// Builds a custom rule from its parts. Nothing is validated beyond the types.
pub fn create_custom_rule<P, T>(
    name: impl Into<String>,
    description: impl Into<String>,
    priority: i32,
    predicate: P,
    transform: T,
) -> SanitizationRule
where
    P: Fn(&Value) -> bool + Send + Sync + 'static,
    T: Fn(&Value, &SanitizationConfig) -> anyhow::Result<Value> + Send + Sync + 'static,
{
    SanitizationRule {
        name: name.into(),
        description: description.into(),
        priority,
        kind: RuleKind::Custom {
            predicate: Arc::new(predicate),
            transform: Arc::new(transform),
        },
    }
}

/// The built-in rule table, in declaration order.
pub fn builtin_rules() -> Vec<SanitizationRule> {
    BuiltinRule::ALL.iter().copied().map(SanitizationRule::builtin).collect()
}
