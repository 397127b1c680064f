//! IDE feature tests
//!
//! Tests for:
//! - Go to definition
//! - Find references
//! - Code completion
//! - Document symbols

pub mod tests_references;
