//! State outline for the document view.

use std::sync::Arc;

use crate::base::TextRange;
use crate::machine::{StateNode, build_hierarchy, machines};
use crate::query::Patterns;
use crate::syntax::SyntaxFile;

/// A state in the document outline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolInfo {
    /// Local state name.
    pub name: Arc<str>,
    /// Dot-joined path from the machine root.
    pub qualified_name: Arc<str>,
    /// Explicit `id`, if the state declares one.
    pub id: Option<Arc<str>>,
    /// Index of the machine in the file, in document order.
    pub machine: usize,
    /// The state's config object.
    pub range: TextRange,
    /// The state's key.
    pub selection_range: TextRange,
}

impl SymbolInfo {
    fn from_state(state: &StateNode, machine: usize) -> Option<Self> {
        Some(Self {
            name: Arc::from(state.name.as_str()),
            qualified_name: Arc::from(state.path.as_str()),
            id: (!state.id.is_empty()).then(|| Arc::from(state.id.as_str())),
            machine,
            range: state.range,
            selection_range: state.name_range?,
        })
    }

    /// Get the container name (parent path) for hierarchy building.
    pub fn container_name(&self) -> Option<&str> {
        let qname = self.qualified_name.as_ref();
        qname.rfind('.').map(|idx| &qname[..idx])
    }
}

/// Every state of every machine in `file`, in document order.
///
/// Machine roots are not listed; top-level states have no container.
pub fn document_symbols(file: &SyntaxFile) -> Vec<SymbolInfo> {
    let patterns = Patterns::for_extension(file.extension());
    machines(patterns, file.root())
        .into_iter()
        .enumerate()
        .flat_map(|(index, machine)| {
            build_hierarchy(patterns, machine.machine_config)
                .iter()
                .filter_map(|state| SymbolInfo::from_state(state, index))
                .collect::<Vec<_>>()
        })
        .collect()
}
