//! Pattern compilation errors.
//!
//! A pattern that fails to compile is a defect in this crate, not in the
//! user's source. The error renders the offending query with the failing
//! line highlighted so the defect is obvious from a test failure.

use thiserror::Error;
use tree_sitter::{QueryError, QueryErrorKind};

use crate::syntax::FileExtension;

/// A structural pattern failed to compile against a grammar.
#[derive(Debug, Error)]
#[error("{rendered}")]
pub struct PatternError {
    /// Registry name of the pattern (`machine`, `config.actions`, ...).
    pub pattern: &'static str,
    /// Grammar the pattern was compiled for.
    pub extension: FileExtension,
    rendered: String,
    #[source]
    source: QueryError,
}

impl PatternError {
    pub(crate) fn new(
        pattern: &'static str,
        extension: FileExtension,
        query_src: &str,
        source: QueryError,
    ) -> Self {
        let rendered = render(pattern, extension, query_src, &source);
        Self {
            pattern,
            extension,
            rendered,
            source,
        }
    }

    /// The underlying tree-sitter error kind.
    pub fn kind(&self) -> &QueryErrorKind {
        &self.source.kind
    }
}

/// Render a query error with the surrounding query lines.
///
/// ```text
/// Invalid `config.guards` pattern for typescript (invalid node type)
///   Location: line 5, column 12 (byte offset 47)
///   Error: Invalid node type strng
///
///   Pattern context:
///      4 |   value: [
///  >>> 5 |     (strng (string_fragment)) @xstate.guard
///                ^
/// ```
fn render(
    pattern: &str,
    extension: FileExtension,
    query_src: &str,
    error: &QueryError,
) -> String {
    let mut msg = format!(
        "Invalid `{}` pattern for {} ({})\n",
        pattern,
        extension,
        kind_label(&error.kind)
    );

    msg.push_str(&format!(
        "  Location: line {}, column {} (byte offset {})\n",
        error.row + 1,
        error.column + 1,
        error.offset
    ));

    if !error.message.is_empty() {
        msg.push_str(&format!("  Error: {}\n", error.message));
    }

    msg.push_str("\n  Pattern context:\n");
    let lines: Vec<&str> = query_src.lines().collect();
    let start = error.row.saturating_sub(2);
    let end = (error.row + 3).min(lines.len());

    for (idx, line) in lines.iter().enumerate().skip(start).take(end.saturating_sub(start)) {
        let marker = if idx == error.row { ">>>" } else { "   " };
        msg.push_str(&format!("  {} {:3} | {}\n", marker, idx + 1, line));
        if idx == error.row {
            msg.push_str(&format!("           {}^\n", " ".repeat(error.column)));
        }
    }

    msg
}

fn kind_label(kind: &QueryErrorKind) -> &'static str {
    match kind {
        QueryErrorKind::Syntax => "syntax error",
        QueryErrorKind::NodeType => "invalid node type",
        QueryErrorKind::Field => "invalid field name",
        QueryErrorKind::Capture => "invalid capture",
        QueryErrorKind::Predicate => "invalid predicate",
        QueryErrorKind::Structure => "structure error",
        QueryErrorKind::Language => "language mismatch",
    }
}
