// raysan/src/logger.rs
//! Logger setup for the `raysan` binary.
//!
//! `RUST_LOG` is honoured unless the command line forces a level. Output goes
//! to stderr so that stdout stays clean for sanitized data.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "warn";

/// Initializes `env_logger`. `level_override` takes precedence over `RUST_LOG`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    builder.target(Target::Stderr).format_timestamp(None);

    if let Some(level) = level_override {
        builder.filter_level(level);
    }

    let _ = builder.try_init();
}
