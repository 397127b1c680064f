//! Implementable classifier: what named behavior a position in the machine refers to.

use smol_str::SmolStr;

use crate::base::{TextRange, TextSize};
use crate::machine::{Literal, literal};
use crate::query::{Match, Pattern, Patterns};
use crate::syntax::SyntaxNode;

/// Kind of named behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImplementableKind {
    Action,
    Actor,
    Guard,
    Delay,
    Unknown,
}

impl ImplementableKind {
    /// The four real kinds, in classification order.
    pub const KNOWN: [ImplementableKind; 4] = [
        ImplementableKind::Action,
        ImplementableKind::Actor,
        ImplementableKind::Guard,
        ImplementableKind::Delay,
    ];

    pub fn display(self) -> &'static str {
        match self {
            ImplementableKind::Action => "action",
            ImplementableKind::Actor => "actor",
            ImplementableKind::Guard => "guard",
            ImplementableKind::Delay => "delay",
            ImplementableKind::Unknown => "unknown",
        }
    }

    pub fn is_known(self) -> bool {
        self != ImplementableKind::Unknown
    }

    /// Pattern over this kind's setup bucket.
    pub(crate) fn setup_pattern(self, patterns: &Patterns) -> Option<&Pattern> {
        match self {
            ImplementableKind::Action => Some(&patterns.setup_actions),
            ImplementableKind::Actor => Some(&patterns.setup_actors),
            ImplementableKind::Guard => Some(&patterns.setup_guards),
            ImplementableKind::Delay => Some(&patterns.setup_delays),
            ImplementableKind::Unknown => None,
        }
    }

    /// Machine-side pattern and its anchor/name captures.
    fn machine_pattern(self, patterns: &Patterns) -> Option<(&Pattern, &'static str, &'static str)> {
        match self {
            ImplementableKind::Action => {
                Some((&patterns.actions, "xstate.action", "xstate.action.name"))
            }
            ImplementableKind::Actor => Some((&patterns.actors, "xstate.actor", "xstate.actor.name")),
            ImplementableKind::Guard => Some((&patterns.guards, "xstate.guard", "xstate.guard.name")),
            ImplementableKind::Delay => Some((&patterns.delays, "xstate.delay", "xstate.delay.name")),
            ImplementableKind::Unknown => None,
        }
    }
}

/// Classification result at one position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImplementableRef {
    pub kind: ImplementableKind,
    /// The matched node: the string literal (quotes included) or the `after` key.
    pub range: Option<TextRange>,
    /// Where the name itself sits; empty and inside the quotes for `""`.
    pub name_range: Option<TextRange>,
    pub name: SmolStr,
}

impl ImplementableRef {
    /// The "nothing here" result.
    pub fn unknown() -> Self {
        Self {
            kind: ImplementableKind::Unknown,
            range: None,
            name_range: None,
            name: SmolStr::default(),
        }
    }

    pub fn is_known(&self) -> bool {
        self.kind.is_known()
    }

    fn from_literal(kind: ImplementableKind, literal: Literal<'_>) -> Self {
        Self {
            kind,
            range: Some(literal.anchor.range()),
            name_range: Some(literal.name_range),
            name: SmolStr::new(literal.name),
        }
    }
}

/// Classify the position `offset` inside a machine config.
///
/// Tries the action, actor, guard and delay patterns in that order; the
/// shapes cannot overlap, so the order only decides which runs first.
pub fn classify_in_machine(
    patterns: &Patterns,
    machine_config: SyntaxNode<'_>,
    offset: TextSize,
) -> ImplementableRef {
    for kind in ImplementableKind::KNOWN {
        let Some((pattern, anchor, name)) = kind.machine_pattern(patterns) else {
            continue;
        };
        let found = pattern
            .match_at(machine_config, offset, anchor)
            .and_then(|m| literal(&m, anchor, name));
        if let Some(lit) = found {
            tracing::trace!("classified {} `{}` at {:?}", kind.display(), lit.name, offset);
            return ImplementableRef::from_literal(kind, lit);
        }
    }
    ImplementableRef::unknown()
}

/// Every reference of `kind` in a machine config, sorted by position.
pub fn implementables(
    patterns: &Patterns,
    machine_config: SyntaxNode<'_>,
    kind: ImplementableKind,
) -> Vec<ImplementableRef> {
    let Some((pattern, anchor, name)) = kind.machine_pattern(patterns) else {
        return Vec::new();
    };

    let mut refs: Vec<ImplementableRef> = pattern
        .match_all(machine_config)
        .iter()
        .filter_map(|m: &Match<'_, '_>| literal(m, anchor, name))
        .map(|lit| ImplementableRef::from_literal(kind, lit))
        .collect();

    refs.sort_by_key(|r| r.name_range.map(|range| (range.start(), range.end())));
    refs.dedup_by(|a, b| a.name_range == b.name_range);
    refs
}
