// raysan-core/src/engines/mod.rs
//! Concrete implementations of the `SanitizationEngine` trait.
//!
//! Each engine is a separate file within this directory, declared here with
//! `pub mod <engine_name>;`.

pub mod sanitizer;
