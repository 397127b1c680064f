//! Read-only handle into a parsed tree.

use std::fmt;

use tree_sitter::Node;

use crate::base::{TextRange, TextSize, to_size};

/// A node of an immutable syntax tree, paired with the source it was parsed from.
///
/// Cheap to copy. Never outlives the [`SyntaxFile`](crate::syntax::SyntaxFile)
/// it was taken from.
#[derive(Clone, Copy)]
pub struct SyntaxNode<'a> {
    node: Node<'a>,
    source: &'a str,
}

impl<'a> SyntaxNode<'a> {
    pub(crate) fn new(node: Node<'a>, source: &'a str) -> Self {
        Self { node, source }
    }

    /// The grammar's type tag for this node (`object`, `pair`, `string`, ...).
    pub fn kind(&self) -> &'static str {
        self.node.kind()
    }

    /// Half-open byte range `[start, end)`.
    pub fn range(&self) -> TextRange {
        TextRange::new(to_size(self.node.start_byte()), to_size(self.node.end_byte()))
    }

    /// Literal source text of the node.
    pub fn text(&self) -> &'a str {
        self.source.get(self.node.byte_range()).unwrap_or("")
    }

    /// Whether `offset` falls inside `[start, end)`.
    pub fn contains(&self, offset: TextSize) -> bool {
        self.range().contains(offset)
    }

    /// Named children, in source order.
    pub fn children(&self) -> Vec<SyntaxNode<'a>> {
        let mut cursor = self.node.walk();
        self.node
            .named_children(&mut cursor)
            .map(|n| SyntaxNode::new(n, self.source))
            .collect()
    }

    pub(crate) fn raw(&self) -> Node<'a> {
        self.node
    }

    pub(crate) fn source(&self) -> &'a str {
        self.source
    }
}

impl PartialEq for SyntaxNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.node.id() == other.node.id()
    }
}

impl Eq for SyntaxNode<'_> {}

impl fmt::Debug for SyntaxNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{:?}", self.kind(), self.range())
    }
}
