//! Go-to-definition implementation.

use std::sync::Arc;

use crate::base::{TextRange, TextSize};
use crate::machine::{
    self, ImplementableKind, SetupBinding, StateNode, build_hierarchy, classify_in_machine,
    find_definition, locate, target_at,
};
use crate::query::Patterns;
use crate::syntax::SyntaxFile;

/// What a navigation target is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TargetKind {
    /// A setup binding of the given kind.
    Implementable(ImplementableKind),
    /// A state of the machine.
    State,
}

impl TargetKind {
    pub fn display(&self) -> &'static str {
        match self {
            TargetKind::Implementable(kind) => kind.display(),
            TargetKind::State => "state",
        }
    }
}

/// Result of a go-to-definition request.
#[derive(Clone, Debug, Default)]
pub struct GotoResult {
    /// Range of the name under the cursor that was resolved.
    pub origin: Option<TextRange>,
    /// The targets to jump to.
    pub targets: Vec<GotoTarget>,
}

impl GotoResult {
    /// Create an empty result (no targets found).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a result with a single target.
    pub fn single(origin: TextRange, target: GotoTarget) -> Self {
        Self {
            origin: Some(origin),
            targets: vec![target],
        }
    }

    /// Check if any targets were found.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// A target location for go-to-definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GotoTarget {
    /// Where to jump.
    pub range: TextRange,
    pub kind: TargetKind,
    pub name: Arc<str>,
    /// The target is a shorthand binding; the host should continue with its
    /// own definition lookup at `range`.
    pub redirect: bool,
}

impl From<&SetupBinding> for GotoTarget {
    fn from(binding: &SetupBinding) -> Self {
        Self {
            range: binding.range,
            kind: TargetKind::Implementable(binding.kind),
            name: Arc::from(binding.name.as_str()),
            redirect: binding.needs_redirect(),
        }
    }
}

impl From<&StateNode> for GotoTarget {
    fn from(state: &StateNode) -> Self {
        Self {
            range: state.name_range.unwrap_or(state.range),
            kind: TargetKind::State,
            name: Arc::from(state.path.as_str()),
            redirect: false,
        }
    }
}

/// Find the definition of the name at `offset`.
///
/// An implementable string in the machine leads to its setup binding; a
/// transition target leads to the key of the state it resolves to (the whole
/// machine config for the root). Anything else yields an empty result so the
/// host can fall back to its own lookup.
pub fn goto_definition(file: &SyntaxFile, offset: TextSize) -> GotoResult {
    let patterns = Patterns::for_extension(file.extension());
    let Some(location) = locate(patterns, file.root(), offset) else {
        return GotoResult::empty();
    };
    if !location.is_in_machine_config() {
        return GotoResult::empty();
    }

    let implementable = classify_in_machine(patterns, location.machine_config, offset);
    if implementable.is_known() {
        let (Some(origin), Some(binding)) = (
            implementable.name_range,
            find_definition(
                patterns,
                location.setup_config,
                implementable.kind,
                &implementable.name,
            ),
        ) else {
            tracing::debug!(
                "no setup binding for {} `{}`",
                implementable.kind.display(),
                implementable.name
            );
            return GotoResult::empty();
        };
        tracing::debug!(
            "goto {} `{}` (redirect: {})",
            binding.kind.display(),
            binding.name,
            binding.needs_redirect()
        );
        return GotoResult::single(origin, GotoTarget::from(&binding));
    }

    let states = build_hierarchy(patterns, location.machine_config);
    let Some(occurrence) = target_at(patterns, location.machine_config, &states, offset) else {
        return GotoResult::empty();
    };
    match machine::resolve(&occurrence.raw, &occurrence.source_path, &states) {
        Some(state) => {
            tracing::debug!("goto target `{}` -> `{}`", occurrence.raw, state.path);
            GotoResult::single(occurrence.name_range, GotoTarget::from(state))
        }
        None => {
            tracing::debug!(
                "unresolved target `{}` in `{}`",
                occurrence.raw,
                occurrence.source_path
            );
            GotoResult::empty()
        }
    }
}
