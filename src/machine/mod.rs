//! Machine model: structural matching and resolution over one machine.
//!
//! Every function here is a pure function of the tree it is given. Nothing is
//! cached: callers re-derive what they need per request.
//!
//! ## Flow
//!
//! ```text
//! locate(root, offset)                  ← which machine, which region
//!     │
//!     ├── machine config ──► classify_in_machine ──► find_definition (setup)
//!     │                 └──► build_hierarchy ──► target_at ──► resolve
//!     │
//!     └── setup config ───► classify_in_setup ──► find_all_usages (machine)
//! ```

mod implementable;
mod locate;
mod setup;
mod states;
mod target;
mod transitions;

pub use implementable::{ImplementableKind, ImplementableRef, classify_in_machine, implementables};
pub use locate::{Machine, MachineLocation, MachineRegion, locate, machines};
pub use setup::{
    BindingForm, SetupBinding, bindings, classify_in_setup, find_all_usages, find_definition,
};
pub use states::{StateNode, build_hierarchy, owner_of, state_named_at};
pub use target::{
    StateTargetCandidate, TargetMode, TransitionTarget, generate_candidates, parse_target,
    resolve,
};
pub use transitions::{TargetOccurrence, target_at, target_occurrences};

use crate::base::{TextRange, TextSize};
use crate::query::Match;
use crate::syntax::SyntaxNode;

/// A named literal bound by a pattern: the anchor node, its name and where
/// the name sits in the source.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Literal<'a> {
    pub anchor: SyntaxNode<'a>,
    pub name: &'a str,
    pub name_range: TextRange,
}

/// Read the `anchor`/`name` capture pair of a match.
///
/// For an empty string literal the name is `""` and its range is the empty
/// range just inside the opening quote.
pub(crate) fn literal<'a>(m: &Match<'_, 'a>, anchor: &str, name: &str) -> Option<Literal<'a>> {
    let anchor = m.get(anchor)?;
    let literal = match m.get(name) {
        Some(node) => Literal {
            anchor,
            name: node.text(),
            name_range: node.range(),
        },
        None if anchor.kind() == "string" => Literal {
            anchor,
            name: "",
            name_range: TextRange::empty(anchor.range().start() + TextSize::from(1)),
        },
        None => Literal {
            anchor,
            name: anchor.text(),
            name_range: anchor.range(),
        },
    };
    Some(literal)
}

/// Sort ranges by start and drop exact duplicates.
pub(crate) fn sort_ranges(ranges: &mut Vec<TextRange>) {
    ranges.sort_by_key(|r| (r.start(), r.end()));
    ranges.dedup();
}
