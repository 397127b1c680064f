//! IDE features: High-level APIs for editor hosts.
//!
//! This module composes the machine model into the requests an editor
//! makes. Each function corresponds to one host request.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: Take a file and an offset, return data
//! 2. **No protocol types**: Byte ranges and names, converted by the host
//! 3. **Composable**: Built on top of `machine` queries
//!
//! ## Usage
//!
//! The recommended way to use this module is through `Analysis`:
//!
//! ```ignore
//! use xstate_nav::ide::{Analysis, AnalysisOptions};
//! use xstate_nav::syntax::SyntaxFile;
//!
//! let file = SyntaxFile::typescript(source)?;
//! let analysis = Analysis::new(&file, AnalysisOptions::default());
//! let symbols = analysis.document_symbols();
//! ```

mod analysis;
mod completion;
mod goto;
mod references;
mod symbols;

pub use analysis::{Analysis, AnalysisOptions};
pub use completion::{CompletionItem, CompletionKind, completions};
pub use goto::{GotoResult, GotoTarget, TargetKind, goto_definition};
pub use references::{Reference, ReferenceResult, find_references};
pub use symbols::{SymbolInfo, document_symbols};
