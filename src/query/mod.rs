//! Structural pattern queries over syntax trees.
//!
//! This is the only place the crate inspects tree shape. Every grammar-shape
//! assumption lives in a tree-sitter query in [`patterns`], and the rest of
//! the crate works with named captures.
//!
//! ## Key Types
//!
//! - [`Pattern`]: a compiled query with a registry name
//! - [`Match`]: one match, mapping capture names to nodes
//! - [`Patterns`]: the per-grammar registry of every pattern the crate uses
//!
//! Matches are visited in the order tree-sitter emits them (pre-order), and
//! every lookup here is "first match wins".

mod error;
pub mod patterns;

pub use error::PatternError;
pub use patterns::Patterns;

use tree_sitter::{Query, QueryCursor, StreamingIterator};

use crate::base::TextSize;
use crate::syntax::{FileExtension, SyntaxNode};

/// A compiled structural pattern.
#[derive(Debug)]
pub struct Pattern {
    name: &'static str,
    query: Query,
    rooted: bool,
}

/// One pattern match: the nodes bound to each capture name.
#[derive(Debug, Clone)]
pub struct Match<'q, 'a> {
    names: &'q [&'q str],
    captures: Vec<(u32, SyntaxNode<'a>)>,
}

impl<'q, 'a> Match<'q, 'a> {
    /// First node bound to `name` in this match.
    pub fn get(&self, name: &str) -> Option<SyntaxNode<'a>> {
        self.captures
            .iter()
            .find(|(index, _)| self.names.get(*index as usize) == Some(&name))
            .map(|(_, node)| *node)
    }

    /// Text of the first node bound to `name`.
    pub fn text(&self, name: &str) -> Option<&'a str> {
        self.get(name).map(|node| node.text())
    }
}

impl Pattern {
    /// Compile `source` for the given grammar.
    pub fn new(
        name: &'static str,
        extension: FileExtension,
        source: &str,
    ) -> Result<Self, PatternError> {
        let query = Query::new(&extension.language(), source)
            .map_err(|err| PatternError::new(name, extension, source, err))?;
        Ok(Self {
            name,
            query,
            rooted: false,
        })
    }

    /// Only match with the pattern's top node at the searched root itself.
    pub fn rooted(mut self) -> Self {
        self.rooted = true;
        self
    }

    /// Registry name, used in logs and errors.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the pattern binds a capture called `name`.
    pub fn has_capture(&self, name: &str) -> bool {
        self.query.capture_index_for_name(name).is_some()
    }

    /// Every match under `root`, in emission order.
    pub fn match_all<'a>(&self, root: SyntaxNode<'a>) -> Vec<Match<'_, 'a>> {
        let mut all = Vec::new();
        self.scan(root, |m| {
            all.push(m);
            None::<()>
        });
        all
    }

    /// First match whose `anchor` capture contains `offset` (half-open).
    ///
    /// Read a different capture of the same match with [`Match::get`].
    pub fn match_at<'a>(
        &self,
        root: SyntaxNode<'a>,
        offset: TextSize,
        anchor: &str,
    ) -> Option<Match<'_, 'a>> {
        self.scan(root, |m| {
            let hit = m.get(anchor).is_some_and(|node| node.contains(offset));
            hit.then_some(m)
        })
    }

    /// First match whose `capture` text equals `text` exactly.
    pub fn find_by_text<'a>(
        &self,
        root: SyntaxNode<'a>,
        capture: &str,
        text: &str,
    ) -> Option<Match<'_, 'a>> {
        self.scan(root, |m| {
            let hit = m.get(capture).is_some_and(|node| node.text() == text);
            hit.then_some(m)
        })
    }

    /// Stream matches under `root` until `visit` returns `Some`.
    fn scan<'q, 'a, T>(
        &'q self,
        root: SyntaxNode<'a>,
        mut visit: impl FnMut(Match<'q, 'a>) -> Option<T>,
    ) -> Option<T> {
        let source = root.source();
        let names = self.query.capture_names();
        let mut cursor = QueryCursor::new();
        if self.rooted {
            cursor.set_max_start_depth(Some(0));
        }
        let mut matches = cursor.matches(&self.query, root.raw(), source.as_bytes());

        while let Some(m) = matches.next() {
            let found = visit(Match {
                names,
                captures: m
                    .captures
                    .iter()
                    .map(|c| (c.index, SyntaxNode::new(c.node, source)))
                    .collect(),
            });
            if found.is_some() {
                tracing::trace!("pattern `{}` hit", self.name);
                return found;
            }
        }
        None
    }
}
