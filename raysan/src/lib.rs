// raysan/src/lib.rs
//! # Raysan CLI Application
//!
//! Shell front end for `raysan-core`: sanitizes JSON documents and JSON Lines
//! streams, scrubs HTML fragments, checks whether input needs sanitizing and
//! lists the built-in rule table.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
pub mod utils;
