//! Analysis: per-request entry point for IDE features.
//!
//! An `Analysis` borrows one parsed file and answers queries against it.
//! Nothing is cached: every call re-derives what it needs from the tree.
//!
//! ## Usage
//!
//! ```ignore
//! let file = SyntaxFile::typescript(source)?;
//! let analysis = Analysis::new(&file, AnalysisOptions::default());
//!
//! let goto = analysis.goto_definition(offset);
//! let items = analysis.completions(offset);
//! ```

use crate::base::{LineCol, LineIndex, TextSize};
use crate::syntax::SyntaxFile;

use super::{CompletionItem, GotoResult, ReferenceResult, SymbolInfo};

/// Options for IDE requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// Find-references also returns the setup binding or state key.
    pub include_declaration: bool,
    /// Target completions keep the candidates leading back to the current
    /// state; they always rank last.
    pub include_current_state: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            include_declaration: true,
            include_current_state: true,
        }
    }
}

/// Query interface over one file.
pub struct Analysis<'a> {
    file: &'a SyntaxFile,
    options: AnalysisOptions,
}

impl<'a> Analysis<'a> {
    /// Create an analysis over `file`.
    pub fn new(file: &'a SyntaxFile, options: AnalysisOptions) -> Self {
        if file.has_errors() {
            tracing::warn!(
                "analyzing {} source with syntax errors; results may be partial",
                file.extension()
            );
        }
        Self { file, options }
    }

    /// The options this analysis was created with.
    pub fn options(&self) -> AnalysisOptions {
        self.options
    }

    /// Go to definition at an offset.
    pub fn goto_definition(&self, offset: TextSize) -> GotoResult {
        super::goto_definition(self.file, offset)
    }

    /// Find all references to the implementable or state at an offset.
    pub fn find_references(&self, offset: TextSize) -> ReferenceResult {
        super::find_references(self.file, offset, self.options.include_declaration)
    }

    /// Get completions at an offset.
    pub fn completions(&self, offset: TextSize) -> Vec<CompletionItem> {
        super::completions(self.file, offset, self.options.include_current_state)
    }

    /// Get all states in the document.
    pub fn document_symbols(&self) -> Vec<SymbolInfo> {
        super::document_symbols(self.file)
    }

    // ==================== Positions ====================

    /// Line index of the analyzed text.
    pub fn line_index(&self) -> LineIndex {
        self.file.line_index()
    }

    /// Convert a 0-indexed line/column to an offset.
    pub fn offset(&self, line: u32, col: u32) -> Option<TextSize> {
        self.line_index().offset(LineCol::new(line, col))
    }
}
