//! Transition target strings and the states they are written in.

use smol_str::SmolStr;

use crate::base::{TextRange, TextSize};
use crate::machine::{StateNode, literal, owner_of};
use crate::query::{Match, Patterns};
use crate::syntax::SyntaxNode;

const ANCHOR: &str = "xstate.target";
const NAME: &str = "xstate.target.name";

/// One target string literal in a machine config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetOccurrence {
    /// The string literal, quotes included.
    pub range: TextRange,
    /// The text between the quotes; empty for `""`.
    pub name_range: TextRange,
    pub raw: SmolStr,
    /// Path of the innermost state containing the literal.
    pub source_path: String,
}

impl TargetOccurrence {
    fn from_match(m: &Match<'_, '_>, states: &[StateNode]) -> Option<Self> {
        let lit = literal(m, ANCHOR, NAME)?;
        let range = lit.anchor.range();
        let owner = owner_of(states, range)?;
        Some(Self {
            range,
            name_range: lit.name_range,
            raw: SmolStr::new(lit.name),
            source_path: owner.path.clone(),
        })
    }
}

/// Every target string in the machine config, in document order.
pub fn target_occurrences(
    patterns: &Patterns,
    machine_config: SyntaxNode<'_>,
    states: &[StateNode],
) -> Vec<TargetOccurrence> {
    let mut found: Vec<TargetOccurrence> = patterns
        .targets
        .match_all(machine_config)
        .iter()
        .filter_map(|m| TargetOccurrence::from_match(m, states))
        .collect();
    found.sort_by_key(|o| o.range.start());
    found.dedup_by_key(|o| o.range);
    found
}

/// The target string containing `offset`.
pub fn target_at(
    patterns: &Patterns,
    machine_config: SyntaxNode<'_>,
    states: &[StateNode],
    offset: TextSize,
) -> Option<TargetOccurrence> {
    let m = patterns.targets.match_at(machine_config, offset, ANCHOR)?;
    TargetOccurrence::from_match(&m, states)
}
