//! Completion suggestions implementation.

use std::sync::Arc;

use crate::base::{TextRange, TextSize};
use crate::machine::{
    ImplementableKind, MachineLocation, SetupBinding, StateTargetCandidate, bindings,
    build_hierarchy, classify_in_machine, generate_candidates, locate, target_at,
};
use crate::query::Patterns;
use crate::syntax::SyntaxFile;

/// Kind of completion item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionKind {
    State,
    Action,
    Actor,
    Guard,
    Delay,
}

impl CompletionKind {
    /// Convert to LSP completion item kind number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            CompletionKind::State => 20,  // EnumMember
            CompletionKind::Action => 3,  // Function
            CompletionKind::Actor => 7,   // Class
            CompletionKind::Guard => 2,   // Method
            CompletionKind::Delay => 21,  // Constant
        }
    }

    fn from_implementable(kind: ImplementableKind) -> Option<Self> {
        match kind {
            ImplementableKind::Action => Some(CompletionKind::Action),
            ImplementableKind::Actor => Some(CompletionKind::Actor),
            ImplementableKind::Guard => Some(CompletionKind::Guard),
            ImplementableKind::Delay => Some(CompletionKind::Delay),
            ImplementableKind::Unknown => None,
        }
    }
}

/// A completion suggestion.
#[derive(Clone, Debug)]
pub struct CompletionItem {
    /// The text to insert.
    pub label: Arc<str>,
    /// The kind of completion.
    pub kind: CompletionKind,
    /// Detail text (shown after label).
    pub detail: Option<Arc<str>>,
    /// Range the label replaces: the text between the quotes.
    pub replace_range: Option<TextRange>,
    /// Host sort text; ascending order is best first.
    pub sort_text: Option<Arc<str>>,
}

impl CompletionItem {
    /// Create a new completion item.
    pub fn new(label: impl Into<Arc<str>>, kind: CompletionKind) -> Self {
        Self {
            label: label.into(),
            kind,
            detail: None,
            replace_range: None,
            sort_text: None,
        }
    }

    /// Set the detail text.
    pub fn with_detail(mut self, detail: impl Into<Arc<str>>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Set the replaced range.
    pub fn with_replace_range(mut self, range: TextRange) -> Self {
        self.replace_range = Some(range);
        self
    }

    /// Set the sort text.
    pub fn with_sort_text(mut self, sort_text: impl Into<Arc<str>>) -> Self {
        self.sort_text = Some(sort_text.into());
        self
    }

    /// Create from a state-target candidate.
    pub fn from_candidate(candidate: &StateTargetCandidate) -> Self {
        let detail = if candidate.path.is_empty() {
            "(machine)"
        } else {
            candidate.path.as_str()
        };
        Self::new(candidate.transition_name.as_str(), CompletionKind::State)
            .with_detail(detail)
            .with_sort_text(candidate.sort_key.as_str())
    }

    /// Create from a setup binding; `position` is its declaration index.
    pub fn from_binding(binding: &SetupBinding, position: usize) -> Option<Self> {
        let kind = CompletionKind::from_implementable(binding.kind)?;
        Some(
            Self::new(binding.name.as_str(), kind)
                .with_detail(binding.kind.display())
                .with_sort_text(format!("{position:04}")),
        )
    }
}

/// Get completion suggestions at `offset`.
///
/// Inside a transition target string this offers every state reachable from
/// the owning state, ranked by addressing mode and depth. Inside an
/// implementable string it offers the setup bindings of that kind in
/// declaration order. `include_current_state` keeps the candidates that lead
/// back to the owning state itself.
pub fn completions(
    file: &SyntaxFile,
    offset: TextSize,
    include_current_state: bool,
) -> Vec<CompletionItem> {
    let patterns = Patterns::for_extension(file.extension());
    let Some(location) = locate(patterns, file.root(), offset) else {
        return Vec::new();
    };
    if !location.is_in_machine_config() {
        return Vec::new();
    }

    let items = target_completions(patterns, &location, offset, include_current_state)
        .or_else(|| implementable_completions(patterns, &location, offset))
        .unwrap_or_default();
    tracing::debug!("{} completions at {:?}", items.len(), offset);
    items
}

fn target_completions(
    patterns: &Patterns,
    location: &MachineLocation<'_>,
    offset: TextSize,
    include_current_state: bool,
) -> Option<Vec<CompletionItem>> {
    let states = build_hierarchy(patterns, location.machine_config);
    let occurrence = target_at(patterns, location.machine_config, &states, offset)?;
    let items = generate_candidates(&occurrence.source_path, &states)
        .iter()
        .filter(|candidate| include_current_state || !candidate.is_current())
        .map(|candidate| {
            CompletionItem::from_candidate(candidate).with_replace_range(occurrence.name_range)
        })
        .collect();
    Some(items)
}

fn implementable_completions(
    patterns: &Patterns,
    location: &MachineLocation<'_>,
    offset: TextSize,
) -> Option<Vec<CompletionItem>> {
    let implementable = classify_in_machine(patterns, location.machine_config, offset);
    if !implementable.is_known() {
        return None;
    }
    let replace = implementable.name_range?;
    let items = bindings(patterns, location.setup_config, implementable.kind)
        .iter()
        .enumerate()
        .filter_map(|(position, binding)| CompletionItem::from_binding(binding, position))
        .map(|item| item.with_replace_range(replace))
        .collect();
    Some(items)
}
