// raysan-core/src/result.rs
//! Result records returned by every sanitization call.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::value::{Value, ValueKind};

/// Details about one sanitization call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SanitizationMetadata {
    pub processing_time_ms: f64,
    pub original_type: ValueKind,
    pub sanitized_type: ValueKind,
    /// Length of the sanitized value serialized as JSON; 0 if it cannot be serialized.
    pub size_bytes: usize,
    /// RFC 3339 time the call finished.
    pub timestamp: String,
}

/// The outcome of sanitizing one value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SanitizationResult {
    pub original: Value,
    pub sanitized: Value,
    pub applied_rules: Vec<String>,
    pub warnings: Vec<String>,
    pub metadata: SanitizationMetadata,
}

impl SanitizationResult {
    pub fn new(
        original: Value,
        sanitized: Value,
        applied_rules: Vec<String>,
        warnings: Vec<String>,
        processing_time_ms: f64,
    ) -> Self {
        let metadata = SanitizationMetadata {
            processing_time_ms,
            original_type: original.kind(),
            sanitized_type: sanitized.kind(),
            size_bytes: serialized_size(&sanitized),
            timestamp: Utc::now().to_rfc3339(),
        };
        Self {
            original,
            sanitized,
            applied_rules,
            warnings,
            metadata,
        }
    }

    /// A result that leaves `value` untouched and explains why.
    pub fn rejected(value: &Value, warning: impl Into<String>) -> Self {
        Self::new(value.clone(), value.clone(), Vec::new(), vec![warning.into()], 0.0)
    }

    pub fn was_modified(&self) -> bool {
        self.original != self.sanitized
    }
}

pub fn serialized_size(value: &Value) -> usize {
    serde_json::to_string(value).map(|s| s.len()).unwrap_or(0)
}
