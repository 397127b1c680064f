//! Setup binding resolver: `setup({ actions: { name: ... } })` and back.

use smol_str::SmolStr;

use crate::base::{TextRange, TextSize};
use crate::machine::{ImplementableKind, implementables, sort_ranges};
use crate::query::{Match, Patterns};
use crate::syntax::SyntaxNode;

const BINDING: &str = "setup.binding";

/// How a binding is declared in its bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingForm {
    /// `name: expr`, `"name": expr` or `name() {}`; the binding is the definition.
    Explicit,
    /// Bare `name`; the real definition is wherever the identifier points.
    Shorthand,
}

/// A binding declared in one of the setup buckets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupBinding {
    pub kind: ImplementableKind,
    pub name: SmolStr,
    /// Range of the declared name (the key, or the shorthand identifier).
    pub range: TextRange,
    pub form: BindingForm,
}

impl SetupBinding {
    /// Whether the host should follow the identifier to its own declaration.
    pub fn needs_redirect(&self) -> bool {
        self.form == BindingForm::Shorthand
    }

    fn from_match(m: &Match<'_, '_>, kind: ImplementableKind) -> Option<Self> {
        let (node, form) = match m.get("setup.binding.name") {
            Some(node) => (node, BindingForm::Explicit),
            None => (m.get("setup.binding.shorthand")?, BindingForm::Shorthand),
        };
        Some(Self {
            kind,
            name: SmolStr::new(node.text()),
            range: node.range(),
            form,
        })
    }
}

/// Every binding of `kind`, in declaration order.
pub fn bindings(
    patterns: &Patterns,
    setup_config: SyntaxNode<'_>,
    kind: ImplementableKind,
) -> Vec<SetupBinding> {
    let Some(pattern) = kind.setup_pattern(patterns) else {
        return Vec::new();
    };
    pattern
        .match_all(setup_config)
        .iter()
        .filter_map(|m| SetupBinding::from_match(m, kind))
        .collect()
}

/// The binding whose declared name contains `offset`.
pub fn classify_in_setup(
    patterns: &Patterns,
    setup_config: SyntaxNode<'_>,
    offset: TextSize,
) -> Option<SetupBinding> {
    let binding = ImplementableKind::KNOWN.into_iter().find_map(|kind| {
        let m = kind
            .setup_pattern(patterns)?
            .match_at(setup_config, offset, BINDING)?;
        SetupBinding::from_match(&m, kind)
    })?;
    tracing::trace!(
        "setup binding {} `{}` ({:?})",
        binding.kind.display(),
        binding.name,
        binding.form
    );
    Some(binding)
}

/// First binding of `kind` declared with exactly `name`.
pub fn find_definition(
    patterns: &Patterns,
    setup_config: SyntaxNode<'_>,
    kind: ImplementableKind,
    name: &str,
) -> Option<SetupBinding> {
    let m = kind
        .setup_pattern(patterns)?
        .find_by_text(setup_config, BINDING, name)?;
    SetupBinding::from_match(&m, kind)
}

/// Ranges of every `kind` reference to `name` in the machine config.
pub fn find_all_usages(
    patterns: &Patterns,
    machine_config: SyntaxNode<'_>,
    kind: ImplementableKind,
    name: &str,
) -> Vec<TextRange> {
    let mut ranges: Vec<TextRange> = implementables(patterns, machine_config, kind)
        .into_iter()
        .filter(|r| r.name == name)
        .filter_map(|r| r.name_range)
        .collect();
    sort_ranges(&mut ranges);
    ranges
}
