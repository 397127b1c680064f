//! Find references implementation.

use crate::base::{TextRange, TextSize};
use crate::ide::TargetKind;
use crate::machine::{
    self, ImplementableKind, MachineLocation, StateNode, build_hierarchy, classify_in_machine,
    classify_in_setup, find_all_usages, find_definition, locate, state_named_at, target_at,
    target_occurrences,
};
use crate::query::Patterns;
use crate::syntax::SyntaxFile;

/// Result of a find-references request.
#[derive(Clone, Debug, Default)]
pub struct ReferenceResult {
    /// All references found, declaration first when included.
    pub references: Vec<Reference>,
    /// Whether the declaration was requested.
    pub include_declaration: bool,
}

impl ReferenceResult {
    /// Create an empty result.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if any references were found.
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    /// Get the number of references.
    pub fn len(&self) -> usize {
        self.references.len()
    }

    /// Ranges of the non-declaration references.
    pub fn usages(&self) -> impl Iterator<Item = TextRange> + '_ {
        self.references
            .iter()
            .filter(|r| !r.is_definition)
            .map(|r| r.range)
    }
}

/// A reference to an implementable or a state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reference {
    pub range: TextRange,
    /// Whether this is the definition (vs a reference).
    pub is_definition: bool,
    pub kind: TargetKind,
}

impl Reference {
    fn usage(range: TextRange, kind: TargetKind) -> Self {
        Self {
            range,
            is_definition: false,
            kind,
        }
    }

    fn definition(range: TextRange, kind: TargetKind) -> Self {
        Self {
            range,
            is_definition: true,
            kind,
        }
    }
}

/// Find every reference to the implementable or state at `offset`.
///
/// Works from a setup binding, from an implementable string in the machine,
/// from a state key and from a transition target.
pub fn find_references(
    file: &SyntaxFile,
    offset: TextSize,
    include_declaration: bool,
) -> ReferenceResult {
    let patterns = Patterns::for_extension(file.extension());
    let Some(location) = locate(patterns, file.root(), offset) else {
        return ReferenceResult::empty();
    };

    let references = if location.is_in_setup_config() {
        classify_in_setup(patterns, location.setup_config, offset)
            .map(|binding| {
                implementable_references(
                    patterns,
                    &location,
                    binding.kind,
                    &binding.name,
                    include_declaration,
                )
            })
            .unwrap_or_default()
    } else {
        let implementable = classify_in_machine(patterns, location.machine_config, offset);
        if implementable.is_known() {
            implementable_references(
                patterns,
                &location,
                implementable.kind,
                &implementable.name,
                include_declaration,
            )
        } else {
            state_references(patterns, &location, offset, include_declaration)
        }
    };

    tracing::debug!("{} references at {:?}", references.len(), offset);
    ReferenceResult {
        references,
        include_declaration,
    }
}

fn implementable_references(
    patterns: &Patterns,
    location: &MachineLocation<'_>,
    kind: ImplementableKind,
    name: &str,
    include_declaration: bool,
) -> Vec<Reference> {
    let target_kind = TargetKind::Implementable(kind);
    let declaration = include_declaration
        .then(|| find_definition(patterns, location.setup_config, kind, name))
        .flatten()
        .map(|binding| Reference::definition(binding.range, target_kind));

    declaration
        .into_iter()
        .chain(
            find_all_usages(patterns, location.machine_config, kind, name)
                .into_iter()
                .map(|range| Reference::usage(range, target_kind)),
        )
        .collect()
}

fn state_references(
    patterns: &Patterns,
    location: &MachineLocation<'_>,
    offset: TextSize,
    include_declaration: bool,
) -> Vec<Reference> {
    let states = build_hierarchy(patterns, location.machine_config);
    let state: Option<&StateNode> = state_named_at(&states, offset).or_else(|| {
        let occurrence = target_at(patterns, location.machine_config, &states, offset)?;
        machine::resolve(&occurrence.raw, &occurrence.source_path, &states)
    });
    let Some(state) = state else {
        return Vec::new();
    };

    let declaration = include_declaration
        .then(|| Reference::definition(state.name_range.unwrap_or(state.range), TargetKind::State));

    let usages = target_occurrences(patterns, location.machine_config, &states)
        .into_iter()
        .filter(|occurrence| {
            machine::resolve(&occurrence.raw, &occurrence.source_path, &states)
                .is_some_and(|resolved| resolved.path == state.path)
        })
        .map(|occurrence| Reference::usage(occurrence.name_range, TargetKind::State));

    declaration.into_iter().chain(usages).collect()
}
