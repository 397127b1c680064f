//! Syntax-level parsing interface.
//!
//! Wraps the tree-sitter TypeScript grammars behind a small API. Loading a
//! file picks the grammar from its extension.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tree_sitter::{LanguageError, Parser, Tree};

use crate::syntax::file::{FileExtension, SyntaxFile};

/// Errors that prevent a file from being parsed at all.
///
/// Syntax errors inside the source are not reported here: tree-sitter
/// recovers and the resulting [`SyntaxFile`] reports them via `has_errors()`.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The grammar could not be loaded (ABI mismatch with the runtime).
    #[error("failed to load {extension} grammar: {source}")]
    Language {
        extension: FileExtension,
        #[source]
        source: LanguageError,
    },

    /// tree-sitter gave up without producing a tree.
    #[error("tree-sitter produced no tree for {extension} source")]
    NoTree { extension: FileExtension },

    /// The path has no supported extension.
    #[error("unsupported file extension: {}", path.display())]
    UnsupportedExtension { path: PathBuf },

    /// IO error while reading the file.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Parse source text into a tree-sitter tree.
pub fn parse(source: &str, extension: FileExtension) -> Result<Tree, ParseError> {
    let mut parser = Parser::new();
    parser
        .set_language(&extension.language())
        .map_err(|source| ParseError::Language { extension, source })?;

    parser
        .parse(source, None)
        .ok_or(ParseError::NoTree { extension })
}

/// Read and parse a file from disk, choosing the grammar from its extension.
pub fn load_and_parse(path: &Path) -> Result<SyntaxFile, ParseError> {
    let extension =
        FileExtension::from_path(path).ok_or_else(|| ParseError::UnsupportedExtension {
            path: path.to_path_buf(),
        })?;

    let text = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let tree = parse(&text, extension)?;
    tracing::debug!("Parsed {} as {}", path.display(), extension);
    Ok(SyntaxFile::from_parts(text, tree, extension))
}
