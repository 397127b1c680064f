//! Foundation types for xstate-nav.
//!
//! This module provides the position types used throughout the crate:
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`LineCol`], [`LineIndex`] - Line/column conversion for hosts
//!
//! This module has NO dependencies on other xstate-nav modules.

mod span;

pub use span::{LineCol, LineIndex, TextRange, TextSize};
pub(crate) use span::to_size;

// Re-export text-size types for convenience
pub use text_size;
