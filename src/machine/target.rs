//! Transition target parsing, resolution and completion candidates.
//!
//! Three addressing modes:
//!
//! ```text
//! #id.rest   → Absolute          state with `id`, then `rest` below it
//! .rest      → RelativeChild     `rest` below the current state
//! rest       → RelativeSibling   `rest` below the current state's parent
//! ```

use rustc_hash::FxHashSet;

use crate::base::TextRange;
use crate::machine::StateNode;
use crate::machine::states::{join_path, parent_path, relative_path};

/// How a target string addresses its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TargetMode {
    Absolute,
    RelativeChild,
    RelativeSibling,
}

impl TargetMode {
    /// Completion rank: siblings first, absolute last.
    pub fn rank(self) -> u8 {
        match self {
            TargetMode::RelativeSibling => 0,
            TargetMode::RelativeChild => 1,
            TargetMode::Absolute => 2,
        }
    }

    /// Leading sigil of a target written in this mode.
    pub fn sigil(self) -> &'static str {
        match self {
            TargetMode::Absolute => "#",
            TargetMode::RelativeChild => ".",
            TargetMode::RelativeSibling => "",
        }
    }
}

/// A parsed target string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTarget<'r> {
    pub mode: TargetMode,
    /// The target with its sigil removed.
    pub target_path: &'r str,
}

/// Classify `raw` by its leading character.
pub fn parse_target(raw: &str) -> TransitionTarget<'_> {
    if let Some(rest) = raw.strip_prefix('#') {
        TransitionTarget {
            mode: TargetMode::Absolute,
            target_path: rest,
        }
    } else if let Some(rest) = raw.strip_prefix('.') {
        TransitionTarget {
            mode: TargetMode::RelativeChild,
            target_path: rest,
        }
    } else {
        TransitionTarget {
            mode: TargetMode::RelativeSibling,
            target_path: raw,
        }
    }
}

/// First state carrying `id`.
fn state_with_id<'s>(states: &'s [StateNode], id: &str) -> Option<&'s StateNode> {
    states.iter().find(|s| !s.id.is_empty() && s.id == id)
}

fn state_at_path<'s>(states: &'s [StateNode], path: &str) -> Option<&'s StateNode> {
    states.iter().find(|s| s.path == path)
}

/// Resolve `raw` as written in the state at `current_path`.
///
/// From the root, a sibling target resolves against the root itself.
pub fn resolve<'s>(raw: &str, current_path: &str, states: &'s [StateNode]) -> Option<&'s StateNode> {
    let target = parse_target(raw);
    if target.target_path.is_empty() {
        return None;
    }

    match target.mode {
        TargetMode::Absolute => {
            let (id, rest) = target
                .target_path
                .split_once('.')
                .unwrap_or((target.target_path, ""));
            let anchor = state_with_id(states, id)?;
            if rest.is_empty() {
                return Some(anchor);
            }
            states
                .iter()
                .find(|s| s.relative_to(&anchor.path) == Some(rest))
        }
        TargetMode::RelativeChild => {
            state_at_path(states, &join_path(current_path, target.target_path))
        }
        TargetMode::RelativeSibling => {
            let parent = parent_path(current_path).unwrap_or("");
            state_at_path(states, &join_path(parent, target.target_path))
        }
    }
}

/// One way to write a transition to some state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateTargetCandidate {
    /// The target string to insert, sigil included.
    pub transition_name: String,
    pub mode: TargetMode,
    /// `{marker}{depth:04}{rank}`; ascending order is best first.
    pub sort_key: String,
    /// Config range of the destination state.
    pub range: TextRange,
    /// Path of the destination state.
    pub path: String,
}

impl StateTargetCandidate {
    fn new(
        state: &StateNode,
        current_path: &str,
        mode: TargetMode,
        addressed: &str,
        depth: usize,
    ) -> Self {
        let marker = u8::from(state.path == current_path);
        Self {
            transition_name: format!("{}{}", mode.sigil(), addressed),
            mode,
            sort_key: format!("{marker}{depth:04}{}", mode.rank()),
            range: state.range,
            path: state.path.clone(),
        }
    }

    /// Whether this candidate leads back to the state it is written in.
    pub fn is_current(&self) -> bool {
        self.sort_key.starts_with('1')
    }
}

fn segments(path: &str) -> usize {
    path.split('.').count()
}

/// Every target string that reaches some state from `current_path`, best first.
///
/// Each state is offered once per mode that can address it: absolutely via
/// its own id or any ancestor's id, as a child when it sits under the current
/// state, and as a sibling when it sits under the current state's parent.
pub fn generate_candidates(current_path: &str, states: &[StateNode]) -> Vec<StateTargetCandidate> {
    // Only the first state with a given id is reachable through it.
    let anchors: Vec<&StateNode> = states
        .iter()
        .filter(|s| !s.id.is_empty())
        .filter(|s| state_with_id(states, &s.id).is_some_and(|first| std::ptr::eq(first, *s)))
        .collect();
    let sibling_base = parent_path(current_path);

    let mut candidates = Vec::new();
    for state in states {
        for anchor in &anchors {
            if anchor.path == state.path {
                candidates.push(StateTargetCandidate::new(
                    state,
                    current_path,
                    TargetMode::Absolute,
                    &anchor.id,
                    1,
                ));
            } else if let Some(rest) = state.relative_to(&anchor.path) {
                candidates.push(StateTargetCandidate::new(
                    state,
                    current_path,
                    TargetMode::Absolute,
                    &format!("{}.{}", anchor.id, rest),
                    1 + segments(rest),
                ));
            }
        }

        if let Some(rest) = relative_path(&state.path, current_path) {
            candidates.push(StateTargetCandidate::new(
                state,
                current_path,
                TargetMode::RelativeChild,
                rest,
                segments(rest),
            ));
        }

        if let Some(rest) = sibling_base.and_then(|base| relative_path(&state.path, base)) {
            candidates.push(StateTargetCandidate::new(
                state,
                current_path,
                TargetMode::RelativeSibling,
                rest,
                segments(rest),
            ));
        }
    }

    candidates.sort_by(|a, b| {
        (&a.sort_key, &a.transition_name).cmp(&(&b.sort_key, &b.transition_name))
    });
    let mut seen = FxHashSet::default();
    candidates.retain(|c| seen.insert(c.transition_name.clone()));
    candidates
}
