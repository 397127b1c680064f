//! Syntax file wrapper for parsed TypeScript/TSX sources.
//!
//! A [`SyntaxFile`] owns the source text together with its tree-sitter tree,
//! so every [`SyntaxNode`] handed out borrows from one consistent snapshot.

use std::fmt;
use std::path::Path;

use tree_sitter::{Language, Tree};

use crate::base::LineIndex;
use crate::syntax::node::SyntaxNode;
use crate::syntax::parser::{ParseError, parse};

/// A parsed source file.
#[derive(Debug, Clone)]
pub struct SyntaxFile {
    text: String,
    tree: Tree,
    extension: FileExtension,
}

/// Grammar used to parse a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileExtension {
    /// `.ts`, `.mts`, `.cts` and plain JavaScript.
    TypeScript,
    /// `.tsx` and `.jsx`.
    Tsx,
}

impl FileExtension {
    /// All supported grammars.
    pub const ALL: [FileExtension; 2] = [FileExtension::TypeScript, FileExtension::Tsx];

    /// Pick the grammar for a file path, if the extension is supported.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        Self::from_extension(ext)
    }

    /// Pick the grammar for a bare extension (without the dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "ts" | "mts" | "cts" | "js" | "mjs" | "cjs" => Some(FileExtension::TypeScript),
            "tsx" | "jsx" => Some(FileExtension::Tsx),
            _ => None,
        }
    }

    /// The tree-sitter language for this grammar.
    pub fn language(self) -> Language {
        match self {
            FileExtension::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            FileExtension::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }
}

impl fmt::Display for FileExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileExtension::TypeScript => f.write_str("typescript"),
            FileExtension::Tsx => f.write_str("tsx"),
        }
    }
}

impl SyntaxFile {
    /// Parse `source` with the given grammar.
    pub fn new(source: &str, extension: FileExtension) -> Result<Self, ParseError> {
        let tree = parse(source, extension)?;
        Ok(Self::from_parts(source.to_string(), tree, extension))
    }

    /// Parse a TypeScript source.
    pub fn typescript(source: &str) -> Result<Self, ParseError> {
        Self::new(source, FileExtension::TypeScript)
    }

    /// Parse a TSX source.
    pub fn tsx(source: &str) -> Result<Self, ParseError> {
        Self::new(source, FileExtension::Tsx)
    }

    pub(crate) fn from_parts(text: String, tree: Tree, extension: FileExtension) -> Self {
        Self {
            text,
            tree,
            extension,
        }
    }

    /// The full source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The grammar this file was parsed with.
    pub fn extension(&self) -> FileExtension {
        self.extension
    }

    /// The root node of the tree (a `program` node).
    pub fn root(&self) -> SyntaxNode<'_> {
        SyntaxNode::new(self.tree.root_node(), &self.text)
    }

    /// Check if tree-sitter had to recover from syntax errors.
    ///
    /// A file with errors is still navigable; recovery keeps most of the tree.
    pub fn has_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }

    /// Build a line index for offset/line-column conversion.
    pub fn line_index(&self) -> LineIndex {
        LineIndex::new(&self.text)
    }
}
