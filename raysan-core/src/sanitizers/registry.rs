//! registry.rs - The owned, shareable collection of active rules.
//!
//! A [`RuleRegistry`] is handed to a sanitizer (usually behind an `Arc`) instead
//! of living in a global. Writers go through `add_custom_rule`/`remove_rule`;
//! readers take a sorted snapshot, so a sanitization already in flight never
//! sees a half-applied edit.
//!
//! License: MIT OR Apache-2.0

use log::{debug, warn};
use std::cmp::Reverse;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::rules::{builtin_rules, SanitizationRule};

#[derive(Debug)]
pub struct RuleRegistry {
    rules: RwLock<Vec<SanitizationRule>>,
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleRegistry {
    /// A registry pre-loaded with the built-in rule table.
    pub fn new() -> Self {
        Self::with_rules(builtin_rules())
    }

    /// A registry with no rules at all.
    pub fn empty() -> Self {
        Self::with_rules(Vec::new())
    }

    pub fn with_rules(rules: Vec<SanitizationRule>) -> Self {
        debug!("Creating rule registry with {} rules.", rules.len());
        Self { rules: RwLock::new(rules) }
    }

    // Every write is a single push, replace or retain; a poisoned Vec is still whole.
    fn read(&self) -> RwLockReadGuard<'_, Vec<SanitizationRule>> {
        self.rules.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<SanitizationRule>> {
        self.rules.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Registers a rule. A rule already registered under the same name is replaced
    /// in place, keeping its position for tie-breaking.
    pub fn add_custom_rule(&self, rule: SanitizationRule) {
        let mut rules = self.write();
        if let Some(existing) = rules.iter_mut().find(|r| r.name == rule.name) {
            warn!("Rule '{}' is already registered; replacing it.", rule.name);
            *existing = rule;
        } else {
            debug!("Registering rule '{}' with priority {}.", rule.name, rule.priority);
            rules.push(rule);
        }
    }

    /// Unregisters the rule named `name`. Returns whether a rule was removed.
    pub fn remove_rule(&self, name: &str) -> bool {
        let mut rules = self.write();
        let before = rules.len();
        rules.retain(|r| r.name != name);
        let removed = rules.len() != before;
        if removed {
            debug!("Removed rule '{}'.", name);
        } else {
            warn!("Rule '{}' is not registered; nothing removed.", name);
        }
        removed
    }

    /// A copy of the registered rules, in registration order.
    pub fn rules(&self) -> Vec<SanitizationRule> {
        self.read().clone()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.read().iter().any(|r| r.name == name)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// The registered rules followed by `extra`, sorted by descending priority.
    /// The sort is stable, so equal priorities keep registration order.
    pub fn snapshot(&self, extra: &[SanitizationRule]) -> Vec<SanitizationRule> {
        let mut rules = self.rules();
        rules.extend(extra.iter().cloned());
        rules.sort_by_key(|r| Reverse(r.priority));
        rules
    }
}
