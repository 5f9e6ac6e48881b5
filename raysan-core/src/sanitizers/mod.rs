//! The pieces a sanitization call is assembled from.
//!
//! * `builtin`: the built-in rule table and its transforms.
//! * `registry`: the shared, lock-guarded collection of active rules.
//! * `passes`: the flat rule pass and the depth-bounded deep and strict passes.

pub mod builtin;
pub mod passes;
pub mod registry;
