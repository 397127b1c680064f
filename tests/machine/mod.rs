//! Machine model tests against realistic sources.
//!
//! Tests for:
//! - Locating machines
//! - Classifying implementables
//! - Setup bindings
//! - State hierarchy
//! - Transition targets

pub mod tests_hierarchy;
pub mod tests_setup;
pub mod tests_targets;
