//! Syntax layer: parsed files and read-only tree handles.
pub mod file;
pub mod node;
pub mod parser;

pub use file::{FileExtension, SyntaxFile};
pub use node::SyntaxNode;
pub use parser::{ParseError, load_and_parse, parse};
