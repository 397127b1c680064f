//! Syntax layer tests: loading and parsing source files.

pub mod tests_load;
