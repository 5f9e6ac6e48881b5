//! Configuration management for `raysan-core`.
//!
//! A [`SanitizationConfig`] is a plain value object: every call either passes one
//! or falls back to [`SanitizationConfig::default`]. Configs can be loaded from
//! YAML, and [`ConfigOverrides`] layers individual settings (e.g. CLI flags) on
//! top of a loaded or default config via [`merge_config`].
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::RaysanError;
use crate::rules::SanitizationRule;

/// Default recursion limit for the deep and strict passes.
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Upper bound accepted for `max_depth` in loaded configuration.
pub const MAX_DEPTH_LIMIT: usize = 1024;

/// Settings for a single sanitization call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SanitizationConfig {
    /// Recurse into arrays and objects after the rule pass.
    pub enable_deep_sanitization: bool,
    /// Apply the printable-ASCII / identifier-key filter after the deep pass.
    pub enable_strict_mode: bool,
    /// Nodes at this depth or deeper are left untouched by the recursive passes.
    pub max_depth: usize,
    /// When true, the whitespace-normalizing rule is skipped.
    pub preserve_whitespace: bool,
    /// Rules applied for this call only, on top of the registry's rules.
    #[serde(skip)]
    pub custom_rules: Vec<SanitizationRule>,
}

impl Default for SanitizationConfig {
    fn default() -> Self {
        Self {
            enable_deep_sanitization: true,
            enable_strict_mode: false,
            max_depth: DEFAULT_MAX_DEPTH,
            preserve_whitespace: false,
            custom_rules: Vec::new(),
        }
    }
}

/// Partial settings; every `Some` field replaces the base value in [`merge_config`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigOverrides {
    pub enable_deep_sanitization: Option<bool>,
    pub enable_strict_mode: Option<bool>,
    pub max_depth: Option<usize>,
    pub preserve_whitespace: Option<bool>,
}

impl SanitizationConfig {
    /// Loads a configuration from a YAML file. Missing fields take their defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading sanitization config from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: SanitizationConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), RaysanError> {
        if self.max_depth > MAX_DEPTH_LIMIT {
            return Err(RaysanError::InvalidConfig(format!(
                "max_depth ({}) exceeds maximum allowed ({})",
                self.max_depth, MAX_DEPTH_LIMIT
            )));
        }
        Ok(())
    }

    /// Adds a rule that only applies to calls made with this config.
    pub fn with_custom_rule(mut self, rule: SanitizationRule) -> Self {
        self.custom_rules.push(rule);
        self
    }
}

/// Layers `overrides` on top of `base`. Custom rules on `base` are kept.
pub fn merge_config(base: SanitizationConfig, overrides: &ConfigOverrides) -> SanitizationConfig {
    let mut merged = base;

    if let Some(deep) = overrides.enable_deep_sanitization {
        debug!("Overriding enable_deep_sanitization: {}", deep);
        merged.enable_deep_sanitization = deep;
    }
    if let Some(strict) = overrides.enable_strict_mode {
        debug!("Overriding enable_strict_mode: {}", strict);
        merged.enable_strict_mode = strict;
    }
    if let Some(depth) = overrides.max_depth {
        debug!("Overriding max_depth: {}", depth);
        merged.max_depth = depth;
    }
    if let Some(preserve) = overrides.preserve_whitespace {
        debug!("Overriding preserve_whitespace: {}", preserve);
        merged.preserve_whitespace = preserve;
    }

    merged
}
