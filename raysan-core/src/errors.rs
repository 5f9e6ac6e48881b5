//! errors.rs - Custom error types for the raysan-core library.
//!
//! Sanitization itself never fails: rule failures degrade to warnings. The
//! variants here cover the plumbing around it (configuration files, JSON text
//! handed to the headless helpers) and the wording of rule-failure warnings.
//!
//! License: MIT OR Apache-2.0

use thiserror::Error;

/// All error types in the `raysan-core` library.
///
/// `#[non_exhaustive]` so new variants can be added without breaking callers
/// that match on it.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RaysanError {
    #[error("Rule '{0}' failed: {1}")]
    RuleFailed(String, String),

    #[error("Invalid sanitization configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse JSON input: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),
}
