// raysan/src/commands/check.rs
//! `raysan check`: reports whether input needs sanitizing.

use log::debug;

use raysan_core::{needs_sanitization, Value};

/// Parses `input` as JSON, falling back to treating it as a plain string.
pub fn check_input(input: &str) -> bool {
    let value = match serde_json::from_str::<Value>(input) {
        Ok(value) => value,
        Err(e) => {
            debug!("Input is not JSON ({}); checking it as raw text.", e);
            Value::from(input)
        }
    };
    needs_sanitization(&value)
}
