//! # xstate-nav-base
//!
//! Code intelligence for XState machines written as
//! `setup({...}).createMachine({...})` in TypeScript and TSX sources.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → IDE features (goto-def, references, completion, outline)
//!   ↓
//! machine   → Locator, implementable classifier, setup bindings, states, targets
//!   ↓
//! query     → Compiled tree-sitter patterns and match helpers
//!   ↓
//! syntax    → SyntaxFile, SyntaxNode, ParseError
//!   ↓
//! base      → Primitives (TextRange, LineIndex)
//! ```

// ============================================================================
// MODULES (dependency order: base → syntax → query → machine → ide)
// ============================================================================

/// Foundation types: TextRange, LineIndex
pub mod base;

/// Syntax: parsed files and node handles
pub mod syntax;

/// Structural patterns over syntax trees
pub mod query;

/// Machine model: locate, classify, resolve
pub mod machine;

/// IDE features: goto-definition, find-references, completion, outline
pub mod ide;

// Re-export foundation types
pub use base::{LineCol, LineIndex, TextRange, TextSize};
pub use syntax::{FileExtension, ParseError, SyntaxFile};
